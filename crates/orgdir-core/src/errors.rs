use orgdir_core_types::{RequestId, TraceId};
use thiserror::Error;

/// Result type alias using OrgDirError
pub type Result<T> = std::result::Result<T, OrgDirError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Stable classification of all errors in the directory service. Each kind
/// maps to a stable error code usable for programmatic handling, testing,
/// and external API responses. The three caller-facing classes are:
/// validation (rejected request), not-found (empty/negative result), and
/// internal (opaque infrastructure fault).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    // Structural/Validation
    InvalidInput,
    InvalidEmail,
    DuplicateEmail,
    NotFound,
    CycleDetected,
    MissingReference,

    // Mutation
    CannotDelete,

    // Integration/IO
    Io,
    Serialization,
    Persistence,

    // Internal
    Internal,
}

impl ErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ErrorKind::InvalidEmail => "ERR_INVALID_EMAIL",
            ErrorKind::DuplicateEmail => "ERR_DUPLICATE_EMAIL",
            ErrorKind::NotFound => "ERR_NOT_FOUND",
            ErrorKind::CycleDetected => "ERR_CYCLE_DETECTED",
            ErrorKind::MissingReference => "ERR_MISSING_REFERENCE",
            ErrorKind::CannotDelete => "ERR_CANNOT_DELETE",
            ErrorKind::Io => "ERR_IO",
            ErrorKind::Serialization => "ERR_SERIALIZATION",
            ErrorKind::Persistence => "ERR_PERSISTENCE",
            ErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// Whether this kind surfaces to callers as a rejected request
    /// (as opposed to an empty result or an opaque internal failure)
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ErrorKind::InvalidInput
                | ErrorKind::InvalidEmail
                | ErrorKind::DuplicateEmail
                | ErrorKind::CycleDetected
                | ErrorKind::MissingReference
                | ErrorKind::CannotDelete
        )
    }

    /// Whether this kind surfaces to callers as "no data"
    pub fn is_not_found(&self) -> bool {
        matches!(self, ErrorKind::NotFound)
    }
}

/// Canonical structured error type
///
/// Carries classification plus context for debugging. Used across the
/// store and engine crates, where errors mix domain conditions with
/// infrastructure faults.
#[derive(Debug, Clone)]
pub struct ServiceError {
    kind: ErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
}

impl ServiceError {
    /// Create a new error with the specified kind
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add trace ID context
    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the trace ID context, if any
    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ServiceError {}

// ========== End Error Facility ==========

/// Domain error taxonomy for directory operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrgDirError {
    // ===== Not-found conditions =====
    /// Company not found in store
    #[error("Company not found: {company_id}")]
    CompanyNotFound { company_id: String },

    /// Department not found in store
    #[error("Department not found: {department_id}")]
    DepartmentNotFound { department_id: String },

    /// Team not found in store
    #[error("Team not found: {team_id}")]
    TeamNotFound { team_id: String },

    /// Employee not found in store
    #[error("Employee not found: {employee_id}")]
    EmployeeNotFound { employee_id: String },

    /// Holiday not found in store
    #[error("Holiday not found: {holiday_id}")]
    HolidayNotFound { holiday_id: String },

    // ===== Validation errors =====
    /// Required name is empty or whitespace-only
    #[error("Invalid name: {reason}")]
    InvalidName { reason: String },

    /// Email is empty or malformed
    #[error("Invalid email: {reason}")]
    InvalidEmail { reason: String },

    /// Email already belongs to another employee
    #[error("Email already in use: {email}")]
    DuplicateEmail { email: String },

    // ===== Structural errors =====
    /// Parent department belongs to a different company
    #[error("Parent department {parent_id} belongs to a different company")]
    ParentCompanyMismatch { parent_id: String },

    /// Department parent chain would cycle back to the department
    #[error(
        "Cycle detected: setting parent would create a cycle involving department {department_id}"
    )]
    DepartmentCycle { department_id: String },

    /// Manager chain would cycle back to the employee
    #[error(
        "Cycle detected: setting manager would create a reporting cycle involving employee {employee_id}"
    )]
    ManagerCycle { employee_id: String },

    /// Department references a company that doesn't exist
    #[error("Department {department_id} references missing company {company_id}")]
    MissingCompany {
        department_id: String,
        company_id: String,
    },

    /// Team references a department that doesn't exist
    #[error("Team {team_id} references missing department {department_id}")]
    MissingDepartment {
        team_id: String,
        department_id: String,
    },

    /// Employee references a team that doesn't exist
    #[error("Employee {employee_id} references missing team {team_id}")]
    MissingTeam {
        employee_id: String,
        team_id: String,
    },

    /// Employee references a manager that doesn't exist
    #[error("Employee {employee_id} references missing manager {manager_id}")]
    MissingManager {
        employee_id: String,
        manager_id: String,
    },

    /// Employee references a department that doesn't exist
    #[error("Employee {employee_id} references missing department {department_id}")]
    EmployeeMissingDepartment {
        employee_id: String,
        department_id: String,
    },

    // ===== Mutation errors =====
    /// Cannot delete an entity that still owns children
    #[error("Cannot delete {entity_id}: has {child_count} dependent {child_kind}")]
    DeleteWithChildren {
        entity_id: String,
        child_kind: &'static str,
        child_count: usize,
    },

    // ===== Generic errors =====
    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Generic internal error
    #[error("Internal error: {message}")]
    Internal { message: String },
}

/// Conversion from the domain taxonomy to the classified facility error
impl From<OrgDirError> for ServiceError {
    fn from(err: OrgDirError) -> Self {
        let text = err.to_string();
        match err {
            OrgDirError::CompanyNotFound { company_id } => ServiceError::new(ErrorKind::NotFound)
                .with_entity_id(company_id)
                .with_message("Company not found"),

            OrgDirError::DepartmentNotFound { department_id } => {
                ServiceError::new(ErrorKind::NotFound)
                    .with_entity_id(department_id)
                    .with_message("Department not found")
            }

            OrgDirError::TeamNotFound { team_id } => ServiceError::new(ErrorKind::NotFound)
                .with_entity_id(team_id)
                .with_message("Team not found"),

            OrgDirError::EmployeeNotFound { employee_id } => {
                ServiceError::new(ErrorKind::NotFound)
                    .with_entity_id(employee_id)
                    .with_message("Employee not found")
            }

            OrgDirError::HolidayNotFound { holiday_id } => ServiceError::new(ErrorKind::NotFound)
                .with_entity_id(holiday_id)
                .with_message("Holiday not found"),

            OrgDirError::InvalidName { .. } => {
                ServiceError::new(ErrorKind::InvalidInput).with_message(text)
            }

            OrgDirError::InvalidEmail { .. } => {
                ServiceError::new(ErrorKind::InvalidEmail).with_message(text)
            }

            OrgDirError::DuplicateEmail { email } => {
                ServiceError::new(ErrorKind::DuplicateEmail)
                    .with_message(format!("Email already in use: {}", email))
            }

            OrgDirError::ParentCompanyMismatch { parent_id } => {
                ServiceError::new(ErrorKind::InvalidInput)
                    .with_entity_id(parent_id)
                    .with_message(text)
            }

            OrgDirError::DepartmentCycle { department_id } => {
                ServiceError::new(ErrorKind::CycleDetected)
                    .with_entity_id(department_id)
                    .with_message("Setting parent would create a cycle")
            }

            OrgDirError::ManagerCycle { employee_id } => {
                ServiceError::new(ErrorKind::CycleDetected)
                    .with_entity_id(employee_id)
                    .with_message("Setting manager would create a reporting cycle")
            }

            OrgDirError::MissingCompany { department_id, .. } => {
                ServiceError::new(ErrorKind::MissingReference)
                    .with_entity_id(department_id)
                    .with_message(text)
            }

            OrgDirError::MissingDepartment { team_id, .. } => {
                ServiceError::new(ErrorKind::MissingReference)
                    .with_entity_id(team_id)
                    .with_message(text)
            }

            OrgDirError::MissingTeam { employee_id, .. }
            | OrgDirError::MissingManager { employee_id, .. }
            | OrgDirError::EmployeeMissingDepartment { employee_id, .. } => {
                ServiceError::new(ErrorKind::MissingReference)
                    .with_entity_id(employee_id)
                    .with_message(text)
            }

            OrgDirError::DeleteWithChildren { entity_id, .. } => {
                ServiceError::new(ErrorKind::CannotDelete)
                    .with_entity_id(entity_id)
                    .with_message(text)
            }

            OrgDirError::Serialization { message } => {
                ServiceError::new(ErrorKind::Serialization).with_message(message)
            }

            OrgDirError::Internal { message } => {
                ServiceError::new(ErrorKind::Internal).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to OrgDirError
impl From<serde_json::Error> for OrgDirError {
    fn from(err: serde_json::Error) -> Self {
        OrgDirError::Serialization {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_codes_stable() {
        let cases = [
            (ErrorKind::InvalidEmail, "ERR_INVALID_EMAIL"),
            (ErrorKind::DuplicateEmail, "ERR_DUPLICATE_EMAIL"),
            (ErrorKind::NotFound, "ERR_NOT_FOUND"),
            (ErrorKind::CycleDetected, "ERR_CYCLE_DETECTED"),
            (ErrorKind::CannotDelete, "ERR_CANNOT_DELETE"),
            (ErrorKind::Persistence, "ERR_PERSISTENCE"),
        ];
        for (kind, expected_code) in cases {
            assert_eq!(kind.code(), expected_code, "Wrong code for {:?}", kind);
        }
    }

    #[test]
    fn test_not_found_classification() {
        let err: ServiceError = OrgDirError::EmployeeNotFound {
            employee_id: "e-1".to_string(),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.kind().is_not_found());
        assert!(!err.kind().is_validation());
        assert_eq!(err.entity_id(), Some("e-1"));
    }

    #[test]
    fn test_duplicate_email_is_validation() {
        let err: ServiceError = OrgDirError::DuplicateEmail {
            email: "a@b.c".to_string(),
        }
        .into();
        assert!(err.kind().is_validation());
        assert_eq!(err.code(), "ERR_DUPLICATE_EMAIL");
    }

    #[test]
    fn test_display_includes_op_and_entity() {
        let err = ServiceError::new(ErrorKind::Persistence)
            .with_op("sqlite")
            .with_entity_id("e-1")
            .with_message("disk I/O error");
        let text = err.to_string();
        assert!(text.contains("ERR_PERSISTENCE"));
        assert!(text.contains("sqlite"));
        assert!(text.contains("e-1"));
    }
}
