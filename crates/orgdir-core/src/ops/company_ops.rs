use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use crate::commands::{CompanyPatch, NewCompany, NewHoliday};
use crate::errors::{OrgDirError, Result};
use crate::model::{Company, Holiday};
use crate::ops::Store;

/// Create a new company
pub(crate) fn create_company(store: &mut Store, new: NewCompany) -> Result<String> {
    if new.name.trim().is_empty() {
        return Err(OrgDirError::InvalidName {
            reason: "company name must not be empty".to_string(),
        });
    }
    if new.code.trim().is_empty() {
        return Err(OrgDirError::InvalidName {
            reason: "company code must not be empty".to_string(),
        });
    }

    let id = Uuid::now_v7().to_string();
    let mut company = Company::new(id.clone(), new.name, new.code);
    company.description = new.description;
    company.address = new.address;
    company.phone = new.phone;
    company.email = new.email;
    company.tax_code = new.tax_code;

    debug!(company_id = %id, "created company");
    store.insert_company(company);
    Ok(id)
}

/// Apply a partial update to a company
pub(crate) fn update_company(
    store: &mut Store,
    company_id: &str,
    patch: CompanyPatch,
) -> Result<()> {
    let company = store.get_company_mut(company_id)?;

    if let Some(name) = patch.name {
        if name.trim().is_empty() {
            return Err(OrgDirError::InvalidName {
                reason: "company name must not be empty".to_string(),
            });
        }
        company.name = name;
    }
    if let Some(code) = patch.code {
        company.code = code;
    }
    if let Some(description) = patch.description {
        company.description = Some(description);
    }
    if let Some(address) = patch.address {
        company.address = Some(address);
    }
    if let Some(phone) = patch.phone {
        company.phone = Some(phone);
    }
    if let Some(email) = patch.email {
        company.email = Some(email);
    }
    if let Some(tax_code) = patch.tax_code {
        company.tax_code = Some(tax_code);
    }
    if let Some(is_active) = patch.is_active {
        company.is_active = is_active;
    }
    company.updated_at = Utc::now();
    Ok(())
}

/// Delete a company.
///
/// Refused while departments still reference it; holidays cascade.
pub(crate) fn delete_company(store: &mut Store, company_id: &str) -> Result<()> {
    store.get_company(company_id)?;

    let departments = store.departments_of_company(company_id);
    if !departments.is_empty() {
        return Err(OrgDirError::DeleteWithChildren {
            entity_id: company_id.to_string(),
            child_kind: "departments",
            child_count: departments.len(),
        });
    }

    store
        .holidays
        .retain(|_, h| h.company_id != company_id);
    store.companies.remove(company_id);
    debug!(company_id = %company_id, "deleted company");
    Ok(())
}

/// Declare a holiday for a company
pub(crate) fn create_holiday(store: &mut Store, new: NewHoliday) -> Result<String> {
    store.get_company(&new.company_id)?;
    if new.name.trim().is_empty() {
        return Err(OrgDirError::InvalidName {
            reason: "holiday name must not be empty".to_string(),
        });
    }

    let id = Uuid::now_v7().to_string();
    let mut holiday = Holiday::new(id.clone(), new.company_id, new.name, new.date);
    holiday.description = new.description;
    holiday.is_recurring = new.is_recurring;
    store.insert_holiday(holiday);
    Ok(id)
}

/// Remove a holiday
pub(crate) fn delete_holiday(store: &mut Store, holiday_id: &str) -> Result<()> {
    if store.holidays.remove(holiday_id).is_none() {
        return Err(OrgDirError::HolidayNotFound {
            holiday_id: holiday_id.to_string(),
        });
    }
    Ok(())
}
