use rust_decimal::Decimal;
use serde::Serialize;

use crate::dataset::Dataset;
use crate::models::{CompetitionEvent, Invoice, InvoiceStatus, TeamStatus};

/// Billing headline figures, always computed over the full invoice set.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingSummary {
    pub total_invoiced: Decimal,
    pub collected: Decimal,
    pub outstanding: Decimal,
    pub invoice_count: usize,
    pub paid_count: usize,
    pub unpaid_count: usize,
}

/// Sums invoice amounts into the three billing buckets.
///
/// Draft, sent and cancelled invoices count toward the total but are neither
/// collected nor outstanding, so `collected + outstanding` can be strictly
/// less than `total_invoiced`. That gap is intended business semantics.
pub fn billing_summary(invoices: &[Invoice]) -> BillingSummary {
    let mut summary = BillingSummary {
        total_invoiced: Decimal::ZERO,
        collected: Decimal::ZERO,
        outstanding: Decimal::ZERO,
        invoice_count: invoices.len(),
        paid_count: 0,
        unpaid_count: 0,
    };

    for invoice in invoices {
        summary.total_invoiced += invoice.amount;
        match invoice.status {
            InvoiceStatus::Paid => {
                summary.collected += invoice.amount;
                summary.paid_count += 1;
            }
            InvoiceStatus::Pending | InvoiceStatus::Overdue => {
                summary.outstanding += invoice.amount;
                summary.unpaid_count += 1;
            }
            InvoiceStatus::Draft | InvoiceStatus::Sent | InvoiceStatus::Cancelled => {}
        }
    }

    summary
}

/// Invoice count per status, in declaration order, zero counts included.
pub fn invoice_counts_by_status(invoices: &[Invoice]) -> Vec<(InvoiceStatus, usize)> {
    InvoiceStatus::ALL
        .into_iter()
        .map(|status| {
            let count = invoices.iter().filter(|inv| inv.status == status).count();
            (status, count)
        })
        .collect()
}

/// Event count and revenue per category, in first-appearance order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryBreakdown {
    pub category: String,
    pub count: usize,
    pub revenue: Decimal,
}

pub fn events_by_category(events: &[CompetitionEvent]) -> Vec<CategoryBreakdown> {
    let mut breakdown: Vec<CategoryBreakdown> = Vec::new();

    for event in events {
        match breakdown
            .iter_mut()
            .find(|bucket| bucket.category == event.category)
        {
            Some(bucket) => {
                bucket.count += 1;
                bucket.revenue += event.total_revenue;
            }
            None => breakdown.push(CategoryBreakdown {
                category: event.category.clone(),
                count: 1,
                revenue: event.total_revenue,
            }),
        }
    }

    breakdown
}

/// Headline figures for the overview page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewStats {
    pub total_events: usize,
    pub active_teams: usize,
    pub total_revenue: Decimal,
    pub avg_score: Decimal,
}

/// Computes the overview stat cards from the full snapshot. Active teams are
/// those currently checked in or competing; the average score is the mean of
/// every score entry's total, rounded to one decimal place.
pub fn overview_stats(dataset: &Dataset) -> OverviewStats {
    let active_teams = dataset
        .teams
        .iter()
        .filter(|team| matches!(team.status, TeamStatus::CheckedIn | TeamStatus::Competing))
        .count();

    let total_revenue = dataset
        .events
        .iter()
        .map(|event| event.total_revenue)
        .sum();

    let avg_score = if dataset.scores.is_empty() {
        Decimal::ZERO
    } else {
        let total: Decimal = dataset.scores.iter().map(|score| score.total_score).sum();
        (total / Decimal::from(dataset.scores.len())).round_dp(1)
    };

    OverviewStats {
        total_events: dataset.events.len(),
        active_teams,
        total_revenue,
        avg_score,
    }
}
