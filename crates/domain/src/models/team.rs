use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A registered team. `event_id` is a foreign key into the event record set;
/// a dangling reference is rendered as the raw id, not treated as an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    pub organization: String,
    pub event_id: String,
    pub captain_name: String,
    pub captain_email: String,
    pub member_count: u32,
    pub status: TeamStatus,
    pub registration_date: NaiveDate,
    pub payment_status: PaymentStatus,
    pub total_score: Option<Decimal>,
    pub rank: Option<u32>,
    pub division: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TeamStatus {
    Registered,
    CheckedIn,
    Competing,
    Eliminated,
    Placed,
}

impl TeamStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Registered => "registered",
            Self::CheckedIn => "checked-in",
            Self::Competing => "competing",
            Self::Eliminated => "eliminated",
            Self::Placed => "placed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Overdue,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Pending => "pending",
            Self::Overdue => "overdue",
            Self::Refunded => "refunded",
        }
    }
}
