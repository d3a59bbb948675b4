//! Status-to-badge lookup tables. Pure presentation data: the rendering
//! layer maps each [`Tone`] to its color tokens.
//!
//! The input enums are closed, so there is no unknown-status fallback here;
//! malformed values are rejected when the snapshot is deserialized.

use domain::models::{
    EventStatus, InvoiceStatus, JudgeRole, PaymentStatus, RegistrationStatus, TeamStatus,
};
use serde::Serialize;

/// Visual emphasis of a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Neutral,
    Accent,
    Success,
    Warning,
    Danger,
}

/// Render-ready descriptor for a status value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBadge {
    pub label: &'static str,
    pub tone: Tone,
}

pub fn event_status_badge(status: EventStatus) -> StatusBadge {
    match status {
        EventStatus::Upcoming => StatusBadge { label: "Upcoming", tone: Tone::Accent },
        EventStatus::Active => StatusBadge { label: "Active", tone: Tone::Success },
        EventStatus::Completed => StatusBadge { label: "Completed", tone: Tone::Neutral },
        EventStatus::Cancelled => StatusBadge { label: "Cancelled", tone: Tone::Danger },
    }
}

pub fn registration_badge(status: RegistrationStatus) -> StatusBadge {
    match status {
        RegistrationStatus::Open => StatusBadge { label: "Open", tone: Tone::Success },
        RegistrationStatus::Closed => StatusBadge { label: "Closed", tone: Tone::Neutral },
        RegistrationStatus::Waitlist => StatusBadge { label: "Waitlist", tone: Tone::Warning },
    }
}

pub fn team_status_badge(status: TeamStatus) -> StatusBadge {
    match status {
        TeamStatus::Registered => StatusBadge { label: "Registered", tone: Tone::Accent },
        TeamStatus::CheckedIn => StatusBadge { label: "Checked In", tone: Tone::Success },
        TeamStatus::Competing => StatusBadge { label: "Competing", tone: Tone::Success },
        TeamStatus::Eliminated => StatusBadge { label: "Eliminated", tone: Tone::Danger },
        TeamStatus::Placed => StatusBadge { label: "Placed", tone: Tone::Warning },
    }
}

pub fn payment_badge(status: PaymentStatus) -> StatusBadge {
    match status {
        PaymentStatus::Paid => StatusBadge { label: "Paid", tone: Tone::Success },
        PaymentStatus::Pending => StatusBadge { label: "Pending", tone: Tone::Warning },
        PaymentStatus::Overdue => StatusBadge { label: "Overdue", tone: Tone::Danger },
        PaymentStatus::Refunded => StatusBadge { label: "Refunded", tone: Tone::Neutral },
    }
}

pub fn invoice_status_badge(status: InvoiceStatus) -> StatusBadge {
    match status {
        InvoiceStatus::Paid => StatusBadge { label: "Paid", tone: Tone::Success },
        InvoiceStatus::Pending => StatusBadge { label: "Pending", tone: Tone::Warning },
        InvoiceStatus::Overdue => StatusBadge { label: "Overdue", tone: Tone::Danger },
        InvoiceStatus::Draft => StatusBadge { label: "Draft", tone: Tone::Neutral },
        InvoiceStatus::Sent => StatusBadge { label: "Sent", tone: Tone::Accent },
        InvoiceStatus::Cancelled => StatusBadge { label: "Cancelled", tone: Tone::Neutral },
    }
}

pub fn judge_role_badge(role: JudgeRole) -> StatusBadge {
    match role {
        JudgeRole::HeadJudge => StatusBadge { label: "Head Judge", tone: Tone::Accent },
        JudgeRole::PanelJudge => StatusBadge { label: "Panel Judge", tone: Tone::Neutral },
        JudgeRole::FieldJudge => StatusBadge { label: "Field Judge", tone: Tone::Neutral },
    }
}
