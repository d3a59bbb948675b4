use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A billing invoice for a team's event registration.
///
/// `team_name` and `event_name` are denormalized onto the invoice at issue
/// time so the billing table renders without any cross-entity lookup.
/// `paid_date` is populated only once the invoice reaches the paid status.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub invoice_number: String,
    pub team_id: String,
    pub team_name: String,
    pub event_id: String,
    pub event_name: String,
    pub amount: Decimal,
    pub status: InvoiceStatus,
    pub issued_date: NaiveDate,
    pub due_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
    pub payment_method: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Draft,
    Sent,
    Paid,
    Pending,
    Overdue,
    Cancelled,
}

impl InvoiceStatus {
    pub const ALL: [InvoiceStatus; 6] = [
        Self::Draft,
        Self::Sent,
        Self::Paid,
        Self::Pending,
        Self::Overdue,
        Self::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Sent => "sent",
            Self::Paid => "paid",
            Self::Pending => "pending",
            Self::Overdue => "overdue",
            Self::Cancelled => "cancelled",
        }
    }
}
