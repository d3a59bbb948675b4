use domain::Dataset;
use domain::dto::invoices::InvoiceQuery;
use domain::models::{Invoice, InvoiceStatus};
use domain::query;
use domain::services::summary::{self, BillingSummary};
use serde::Serialize;

use crate::formatters::{format_currency, format_date};
use crate::labels::{StatusBadge, invoice_status_badge};

/// One row of the billing table, ready to render.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRow {
    pub amount_display: String,
    pub issued_display: String,
    pub due_display: String,
    /// Absent unless the invoice has actually been paid.
    pub paid_display: Option<String>,
    pub status_badge: StatusBadge,
    pub overdue: bool,
    pub invoice: Invoice,
}

/// The billing page: headline cards plus the filtered, sorted table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingView {
    pub summary: BillingSummary,
    pub total_invoiced_display: String,
    pub collected_display: String,
    pub outstanding_display: String,
    pub rows: Vec<InvoiceRow>,
}

/// Builds the billing page. The headline cards always reflect the FULL
/// invoice set; only the table rows follow the page's query parameters.
pub fn billing_view(dataset: &Dataset, query_params: &InvoiceQuery) -> BillingView {
    let summary = summary::billing_summary(&dataset.invoices);

    let rows: Vec<InvoiceRow> = query::run(&dataset.invoices, query_params)
        .into_iter()
        .map(|invoice| InvoiceRow {
            amount_display: format_currency(invoice.amount),
            issued_display: format_date(invoice.issued_date),
            due_display: format_date(invoice.due_date),
            paid_display: invoice.paid_date.map(format_date),
            status_badge: invoice_status_badge(invoice.status),
            overdue: invoice.status == InvoiceStatus::Overdue,
            invoice,
        })
        .collect();

    tracing::debug!(rows = rows.len(), invoices = dataset.invoices.len(), "billing view assembled");

    BillingView {
        total_invoiced_display: format_currency(summary.total_invoiced),
        collected_display: format_currency(summary.collected),
        outstanding_display: format_currency(summary.outstanding),
        summary,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::support;
    use domain::query::TableQuery;
    use rust_decimal::Decimal;

    #[test]
    fn test_headline_cards_cover_full_invoice_set() {
        let dataset = support::sample_dataset();

        let view = billing_view(&dataset, &InvoiceQuery::default());

        assert_eq!(view.summary.total_invoiced, Decimal::from(930));
        assert_eq!(view.summary.collected, Decimal::from(250));
        assert_eq!(view.summary.outstanding, Decimal::from(500));
        assert_eq!(view.total_invoiced_display, "$930.00");
        assert_eq!(view.collected_display, "$250.00");
        assert_eq!(view.outstanding_display, "$500.00");
    }

    #[test]
    fn test_default_query_orders_newest_issued_first() {
        let dataset = support::sample_dataset();

        let view = billing_view(&dataset, &InvoiceQuery::default());

        let numbers: Vec<&str> = view
            .rows
            .iter()
            .map(|row| row.invoice.invoice_number.as_str())
            .collect();
        assert_eq!(
            numbers,
            vec!["INV-2025-003", "INV-2025-002", "INV-2025-001", "INV-2024-044"]
        );
    }

    #[test]
    fn test_filtering_rows_leaves_headline_cards_unchanged() {
        let dataset = support::sample_dataset();
        let query = TableQuery {
            category: Some(InvoiceStatus::Paid),
            ..InvoiceQuery::default()
        };

        let view = billing_view(&dataset, &query);

        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.summary.invoice_count, 4);
    }

    #[test]
    fn test_overdue_rows_are_flagged() {
        let dataset = support::sample_dataset();

        let view = billing_view(&dataset, &InvoiceQuery::default());
        let overdue = view
            .rows
            .iter()
            .find(|row| row.invoice.id == "i2")
            .unwrap();
        let paid = view.rows.iter().find(|row| row.invoice.id == "i1").unwrap();

        assert!(overdue.overdue);
        assert!(overdue.paid_display.is_none());
        assert!(!paid.overdue);
        assert_eq!(paid.paid_display.as_deref(), Some("Feb 1, 2025"));
    }
}
