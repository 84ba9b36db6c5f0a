use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ops::Store;
use crate::queries::views::{employee_view, EmployeeView};

const DEFAULT_PAGE: i32 = 1;
const DEFAULT_PAGE_SIZE: i32 = 10;

/// Criteria for a directory page.
///
/// All filters are optional and combine with AND; `search` matches
/// case-insensitively as a substring of first name, last name, or email.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DirectoryFilter {
    pub department_id: Option<String>,
    pub team_id: Option<String>,
    pub search: Option<String>,
    pub page: i32,
    pub page_size: i32,
}

/// One page of the directory listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryPage {
    pub items: Vec<EmployeeView>,
    pub total_count: usize,
    pub page: i32,
    pub page_size: i32,
}

/// Filter, search, sort, and paginate the employee directory.
///
/// `total_count` is the size of the filtered set before pagination.
/// Ordering is last name, then first name, then id, so equal pages of an
/// unchanged snapshot always return the same rows. Non-positive page or
/// page size fall back to 1 and 10.
pub fn directory_page(store: &Store, filter: &DirectoryFilter) -> DirectoryPage {
    let page = if filter.page < 1 { DEFAULT_PAGE } else { filter.page };
    let page_size = if filter.page_size < 1 {
        DEFAULT_PAGE_SIZE
    } else {
        filter.page_size
    };

    let mut matched: Vec<_> = store
        .employees()
        .values()
        .filter(|e| {
            filter
                .department_id
                .as_deref()
                .map_or(true, |d| e.department_id.as_deref() == Some(d))
        })
        .filter(|e| {
            filter
                .team_id
                .as_deref()
                .map_or(true, |t| e.team_id.as_deref() == Some(t))
        })
        .filter(|e| {
            filter
                .search
                .as_deref()
                .filter(|s| !s.trim().is_empty())
                .map_or(true, |s| {
                    let needle = s.to_lowercase();
                    e.first_name.to_lowercase().contains(&needle)
                        || e.last_name.to_lowercase().contains(&needle)
                        || e.email.to_lowercase().contains(&needle)
                })
        })
        .collect();

    matched.sort_by(|a, b| {
        (&a.last_name, &a.first_name, &a.id).cmp(&(&b.last_name, &b.first_name, &b.id))
    });

    let total_count = matched.len();
    let skip = (page as usize - 1).saturating_mul(page_size as usize);
    let items: Vec<EmployeeView> = matched
        .into_iter()
        .skip(skip)
        .take(page_size as usize)
        .map(|e| employee_view(store, e))
        .collect();

    debug!(total_count, page, page_size, returned = items.len(), "directory page");
    DirectoryPage {
        items,
        total_count,
        page,
        page_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Employee;

    fn seed(store: &mut Store, id: &str, first: &str, last: &str, dept: Option<&str>) {
        let mut e = Employee::new(
            id.to_string(),
            format!("EMP-{id}"),
            first.to_string(),
            last.to_string(),
            format!("{id}@example.com"),
        );
        e.department_id = dept.map(str::to_string);
        store.insert_employee(e);
    }

    fn sample_store() -> Store {
        let mut store = Store::new();
        seed(&mut store, "e1", "Ada", "Lovelace", Some("d1"));
        seed(&mut store, "e2", "Grace", "Hopper", Some("d1"));
        seed(&mut store, "e3", "Alan", "Turing", Some("d2"));
        seed(&mut store, "e4", "Edsger", "Dijkstra", None);
        store
    }

    #[test]
    fn test_sorted_by_last_then_first_name() {
        let store = sample_store();
        let page = directory_page(&store, &DirectoryFilter::default());
        let names: Vec<&str> = page.items.iter().map(|v| v.last_name.as_str()).collect();
        assert_eq!(names, vec!["Dijkstra", "Hopper", "Lovelace", "Turing"]);
        assert_eq!(page.total_count, 4);
    }

    #[test]
    fn test_department_filter() {
        let store = sample_store();
        let filter = DirectoryFilter {
            department_id: Some("d1".to_string()),
            ..DirectoryFilter::default()
        };
        let page = directory_page(&store, &filter);
        assert_eq!(page.total_count, 2);
        assert!(page.items.iter().all(|v| v.department_id.as_deref() == Some("d1")));
    }

    #[test]
    fn test_search_matches_any_of_three_fields() {
        let store = sample_store();
        for (term, expected) in [("ada", "e1"), ("HOPPER", "e2"), ("e3@example", "e3")] {
            let filter = DirectoryFilter {
                search: Some(term.to_string()),
                ..DirectoryFilter::default()
            };
            let page = directory_page(&store, &filter);
            assert_eq!(page.total_count, 1, "term {term:?}");
            assert_eq!(page.items[0].id, expected);
        }
    }

    #[test]
    fn test_blank_search_matches_everything() {
        let store = sample_store();
        let filter = DirectoryFilter {
            search: Some("   ".to_string()),
            ..DirectoryFilter::default()
        };
        assert_eq!(directory_page(&store, &filter).total_count, 4);
    }

    #[test]
    fn test_pagination_and_total_count() {
        let store = sample_store();
        let filter = DirectoryFilter {
            page: 2,
            page_size: 3,
            ..DirectoryFilter::default()
        };
        let page = directory_page(&store, &filter);
        assert_eq!(page.total_count, 4);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].last_name, "Turing");
    }

    #[test]
    fn test_non_positive_paging_falls_back_to_defaults() {
        let store = sample_store();
        let filter = DirectoryFilter {
            page: 0,
            page_size: -5,
            ..DirectoryFilter::default()
        };
        let page = directory_page(&store, &filter);
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 10);
        assert_eq!(page.items.len(), 4);
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let store = sample_store();
        let filter = DirectoryFilter {
            page: 9,
            page_size: 10,
            ..DirectoryFilter::default()
        };
        let page = directory_page(&store, &filter);
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 4);
    }
}

#[cfg(test)]
mod props {
    use super::*;
    use crate::model::Employee;
    use proptest::prelude::*;

    fn arb_store() -> impl Strategy<Value = Store> {
        proptest::collection::vec(("[a-z]{1,6}", "[a-z]{1,6}"), 0..20).prop_map(|names| {
            let mut store = Store::new();
            for (i, (first, last)) in names.into_iter().enumerate() {
                store.insert_employee(Employee::new(
                    format!("e{i}"),
                    format!("EMP{i:03}"),
                    first,
                    last,
                    format!("e{i}@example.com"),
                ));
            }
            store
        })
    }

    proptest! {
        #[test]
        fn same_filter_same_snapshot_same_page(store in arb_store(), page in 0i32..4, page_size in -1i32..6) {
            let filter = DirectoryFilter { page, page_size, ..DirectoryFilter::default() };
            let a = directory_page(&store, &filter);
            let b = directory_page(&store, &filter);
            prop_assert_eq!(a.items, b.items);
            prop_assert_eq!(a.total_count, b.total_count);
        }

        #[test]
        fn pages_partition_the_filtered_set(store in arb_store()) {
            let mut collected = Vec::new();
            let mut page = 1;
            loop {
                let filter = DirectoryFilter { page, page_size: 3, ..DirectoryFilter::default() };
                let result = directory_page(&store, &filter);
                if result.items.is_empty() {
                    break;
                }
                collected.extend(result.items.into_iter().map(|v| v.id));
                page += 1;
            }
            let full = directory_page(&store, &DirectoryFilter { page_size: 1000, ..DirectoryFilter::default() });
            let all: Vec<String> = full.items.into_iter().map(|v| v.id).collect();
            prop_assert_eq!(collected, all);
        }
    }
}
