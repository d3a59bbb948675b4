use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::{Invoice, InvoiceStatus};
use crate::query::{SortDirection, TableQuery, TableRecord};

/// Sortable columns of the billing table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InvoiceSortKey {
    InvoiceNumber,
    TeamName,
    Amount,
    Status,
    #[default]
    IssuedDate,
    DueDate,
    PaidDate,
}

/// Query state of the billing page.
pub type InvoiceQuery = TableQuery<InvoiceSortKey, InvoiceStatus>;

impl Default for InvoiceQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: None,
            sort: InvoiceSortKey::IssuedDate,
            direction: SortDirection::Descending,
        }
    }
}

impl TableRecord for Invoice {
    type SortKey = InvoiceSortKey;
    type Category = InvoiceStatus;

    fn matches_search(&self, needle: &str) -> bool {
        self.team_name.to_lowercase().contains(needle)
            || self.invoice_number.to_lowercase().contains(needle)
            || self.event_name.to_lowercase().contains(needle)
    }

    fn matches_category(&self, category: &InvoiceStatus) -> bool {
        self.status == *category
    }

    fn compare_by(&self, other: &Self, key: InvoiceSortKey) -> Ordering {
        match key {
            InvoiceSortKey::InvoiceNumber => self.invoice_number.cmp(&other.invoice_number),
            InvoiceSortKey::TeamName => self.team_name.cmp(&other.team_name),
            InvoiceSortKey::Amount => self.amount.cmp(&other.amount),
            InvoiceSortKey::Status => self.status.as_str().cmp(other.status.as_str()),
            InvoiceSortKey::IssuedDate => self.issued_date.cmp(&other.issued_date),
            InvoiceSortKey::DueDate => self.due_date.cmp(&other.due_date),
            // Unpaid invoices have no date and order first ascending.
            InvoiceSortKey::PaidDate => self.paid_date.cmp(&other.paid_date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::query;

    #[test]
    fn test_default_query_matches_billing_page_initial_state() {
        let query = InvoiceQuery::default();
        assert_eq!(query.sort, InvoiceSortKey::IssuedDate);
        assert_eq!(query.direction, SortDirection::Descending);
    }

    #[test]
    fn test_search_covers_invoice_number_and_event_name() {
        let invoice = fixtures::invoice("i1", "INV-0042", 250, InvoiceStatus::Sent);

        assert!(invoice.matches_search("inv-0042"));
        assert!(invoice.matches_search("spring robotics"));
        assert!(invoice.matches_search("united"));
        assert!(!invoice.matches_search("winter"));
    }

    #[test]
    fn test_amount_sorts_numerically_not_lexically() {
        let nine = fixtures::invoice("i1", "INV-001", 9, InvoiceStatus::Paid);
        let eighty = fixtures::invoice("i2", "INV-002", 80, InvoiceStatus::Paid);

        let result = query::run(
            &[eighty, nine],
            &TableQuery {
                search: String::new(),
                category: None,
                sort: InvoiceSortKey::Amount,
                direction: SortDirection::Ascending,
            },
        );

        assert_eq!(result[0].id, "i1");
        assert_eq!(result[1].id, "i2");
    }
}
