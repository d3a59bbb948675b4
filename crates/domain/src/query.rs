//! Generic filter + sort engine shared by every list-backed page.
//!
//! Each page holds an immutable [`TableQuery`] value (search text, optional
//! categorical filter, sort column, direction) and re-runs [`run`] whenever
//! one of those parameters changes. The engine itself is pure: it never
//! mutates the record set and an empty result is a valid outcome.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Sort order applied to the active sort column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

/// A uniformly-shaped record the engine can filter and sort.
///
/// `SortKey` is a closed enumeration of the entity's sortable columns, so an
/// unrecognized key is unrepresentable rather than a runtime error.
pub trait TableRecord: Clone {
    type SortKey: Copy;
    type Category: PartialEq;

    /// Case-insensitive substring test over the entity's designated text
    /// fields. `needle` arrives lowercased and non-empty.
    fn matches_search(&self, needle: &str) -> bool;

    /// Exact match against the entity's designated categorical field.
    fn matches_category(&self, category: &Self::Category) -> bool;

    fn compare_by(&self, other: &Self, key: Self::SortKey) -> Ordering;
}

/// The full set of query parameters a page holds for its table.
/// `category: None` is the "all" sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableQuery<K, C> {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub category: Option<C>,
    pub sort: K,
    pub direction: SortDirection,
}

/// Runs the two-pass query: retain records where the search text matches any
/// searchable field and the categorical filter matches exactly, then
/// stable-sort the survivors by the requested column.
///
/// Blank or whitespace-only search text matches everything. Descending order
/// reverses the comparator, which preserves stability for equal keys.
pub fn run<R>(records: &[R], query: &TableQuery<R::SortKey, R::Category>) -> Vec<R>
where
    R: TableRecord,
{
    let needle = query.search.trim().to_lowercase();

    let mut rows: Vec<R> = records
        .iter()
        .filter(|record| {
            let matches_search = needle.is_empty() || record.matches_search(&needle);
            let matches_category = query
                .category
                .as_ref()
                .is_none_or(|category| record.matches_category(category));
            matches_search && matches_category
        })
        .cloned()
        .collect();

    rows.sort_by(|a, b| {
        let ordering = a.compare_by(b, query.sort);
        match query.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    tracing::debug!(total = records.len(), retained = rows.len(), "table query executed");
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::events::EventSortKey;
    use crate::dto::invoices::InvoiceSortKey;
    use crate::dto::teams::{TeamQuery, TeamSortKey};
    use crate::fixtures;
    use crate::models::InvoiceStatus;

    fn sample_teams() -> Vec<crate::models::Team> {
        vec![
            fixtures::team("t1", "Robotics United", "Jefferson High", "Maya Chen"),
            fixtures::team("t2", "Falcons", "Westside Prep", "Liam Ortiz"),
            fixtures::team("t3", "Circuit Breakers", "Eastview Academy", "Rohan Patel"),
        ]
    }

    #[test]
    fn test_blank_query_is_length_preserving_permutation() {
        let teams = sample_teams();
        let query = TableQuery {
            search: String::new(),
            category: None,
            sort: TeamSortKey::Name,
            direction: SortDirection::Ascending,
        };

        let result = run(&teams, &query);

        assert_eq!(result.len(), teams.len());
        let mut expected: Vec<&str> = teams.iter().map(|t| t.name.as_str()).collect();
        expected.sort();
        let got: Vec<&str> = result.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(got, expected);
    }

    #[test]
    fn test_whitespace_search_matches_everything() {
        let teams = sample_teams();
        let query = TableQuery {
            search: "   ".to_string(),
            category: None,
            sort: TeamSortKey::Name,
            direction: SortDirection::Ascending,
        };

        assert_eq!(run(&teams, &query).len(), teams.len());
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let teams = sample_teams();
        let query = TableQuery {
            search: "Ro".to_string(),
            category: None,
            sort: TeamSortKey::Name,
            direction: SortDirection::Ascending,
        };

        let result = run(&teams, &query);

        // "Robotics United" by name, "Rohan Patel" by captain; "Falcons" drops out.
        let names: Vec<&str> = result.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Circuit Breakers", "Robotics United"]);
    }

    #[test]
    fn test_filtering_is_monotonic() {
        let teams = sample_teams();
        let query = TableQuery {
            search: "united".to_string(),
            category: None,
            sort: TeamSortKey::Name,
            direction: SortDirection::Ascending,
        };

        assert!(run(&teams, &query).len() <= teams.len());
    }

    #[test]
    fn test_category_filter_is_exact_match() {
        let invoices = vec![
            fixtures::invoice("i1", "INV-001", 100, InvoiceStatus::Paid),
            fixtures::invoice("i2", "INV-002", 200, InvoiceStatus::Pending),
            fixtures::invoice("i3", "INV-003", 300, InvoiceStatus::Paid),
        ];
        let query = TableQuery {
            search: String::new(),
            category: Some(InvoiceStatus::Paid),
            sort: InvoiceSortKey::InvoiceNumber,
            direction: SortDirection::Ascending,
        };

        let result = run(&invoices, &query);

        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|inv| inv.status == InvoiceStatus::Paid));
    }

    #[test]
    fn test_date_sort_ascending_is_chronological() {
        let events = vec![
            fixtures::event("e1", "March Open", "2025-03-01"),
            fixtures::event("e2", "November Cup", "2024-11-15"),
            fixtures::event("e3", "January Games", "2025-01-20"),
        ];
        let query = TableQuery {
            search: String::new(),
            category: None,
            sort: EventSortKey::StartDate,
            direction: SortDirection::Ascending,
        };

        let result = run(&events, &query);

        let ids: Vec<&str> = result.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["e2", "e3", "e1"]);
    }

    #[test]
    fn test_descending_reverses_order() {
        let events = vec![
            fixtures::event("e1", "March Open", "2025-03-01"),
            fixtures::event("e2", "November Cup", "2024-11-15"),
        ];
        let query = TableQuery {
            search: String::new(),
            category: None,
            sort: EventSortKey::StartDate,
            direction: SortDirection::Descending,
        };

        let result = run(&events, &query);

        assert_eq!(result[0].id, "e1");
        assert_eq!(result[1].id, "e2");
    }

    #[test]
    fn test_missing_paid_date_sorts_first_ascending() {
        let mut paid = fixtures::invoice("i1", "INV-001", 100, InvoiceStatus::Paid);
        paid.paid_date = Some("2025-02-01".parse().unwrap());
        let unpaid = fixtures::invoice("i2", "INV-002", 200, InvoiceStatus::Pending);
        let query = TableQuery {
            search: String::new(),
            category: None,
            sort: InvoiceSortKey::PaidDate,
            direction: SortDirection::Ascending,
        };

        let result = run(&[paid, unpaid], &query);

        assert_eq!(result[0].id, "i2");
        assert_eq!(result[1].id, "i1");
    }

    #[test]
    fn test_query_is_idempotent() {
        let teams = sample_teams();
        let query = TeamQuery::default();

        let first = run(&teams, &query);
        let second = run(&teams, &query);

        let first_ids: Vec<&str> = first.iter().map(|t| t.id.as_str()).collect();
        let second_ids: Vec<&str> = second.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(first_ids, second_ids);
    }

    #[test]
    fn test_no_match_yields_empty_result() {
        let teams = sample_teams();
        let query = TableQuery {
            search: "zzz-no-such-team".to_string(),
            category: None,
            sort: TeamSortKey::Name,
            direction: SortDirection::Ascending,
        };

        assert!(run(&teams, &query).is_empty());
    }

    #[test]
    fn test_stable_sort_keeps_input_order_for_equal_keys() {
        let events = vec![
            fixtures::event("e1", "Same Day A", "2025-03-01"),
            fixtures::event("e2", "Same Day B", "2025-03-01"),
        ];
        let query = TableQuery {
            search: String::new(),
            category: None,
            sort: EventSortKey::StartDate,
            direction: SortDirection::Ascending,
        };

        let result = run(&events, &query);

        assert_eq!(result[0].id, "e1");
        assert_eq!(result[1].id, "e2");
    }
}
