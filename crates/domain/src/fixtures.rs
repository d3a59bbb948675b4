//! Record builders shared by the unit tests. Each returns a fully-populated
//! value with unremarkable defaults; tests overwrite the fields they care
//! about.

use rust_decimal::Decimal;

use crate::models::{
    CompetitionEvent, EventStatus, Invoice, InvoiceStatus, PaymentStatus, RegistrationStatus,
    ScoreEntry, Team, TeamStatus,
};

pub fn event(id: &str, name: &str, start_date: &str) -> CompetitionEvent {
    CompetitionEvent {
        id: id.to_string(),
        name: name.to_string(),
        category: "Robotics".to_string(),
        start_date: start_date.parse().unwrap(),
        end_date: start_date.parse().unwrap(),
        location: "Denver, CO".to_string(),
        status: EventStatus::Upcoming,
        registration_status: RegistrationStatus::Open,
        max_teams: 16,
        registered_teams: 8,
        entry_fee: Decimal::from(250),
        total_revenue: Decimal::from(2000),
        judge_count: 3,
    }
}

pub fn team(id: &str, name: &str, organization: &str, captain_name: &str) -> Team {
    Team {
        id: id.to_string(),
        name: name.to_string(),
        organization: organization.to_string(),
        event_id: "e1".to_string(),
        captain_name: captain_name.to_string(),
        captain_email: "captain@example.org".to_string(),
        member_count: 5,
        status: TeamStatus::Registered,
        registration_date: "2025-01-10".parse().unwrap(),
        payment_status: PaymentStatus::Paid,
        total_score: None,
        rank: None,
        division: "Open".to_string(),
    }
}

pub fn invoice(id: &str, invoice_number: &str, amount: u32, status: InvoiceStatus) -> Invoice {
    Invoice {
        id: id.to_string(),
        invoice_number: invoice_number.to_string(),
        team_id: "t1".to_string(),
        team_name: "Robotics United".to_string(),
        event_id: "e1".to_string(),
        event_name: "Spring Robotics Open".to_string(),
        amount: Decimal::from(amount),
        status,
        issued_date: "2025-01-15".parse().unwrap(),
        due_date: "2025-02-15".parse().unwrap(),
        paid_date: None,
        payment_method: None,
        description: "Event registration fee".to_string(),
    }
}

pub fn score(id: &str, team_id: &str, event_id: &str, total: &str) -> ScoreEntry {
    ScoreEntry {
        id: id.to_string(),
        team_id: team_id.to_string(),
        team_name: format!("Team {team_id}"),
        event_id: event_id.to_string(),
        judge_id: "j1".to_string(),
        judge_name: "Dana Reyes".to_string(),
        round: "Qualifier".to_string(),
        technical_score: Decimal::from(30),
        presentation_score: Decimal::from(28),
        innovation_score: Decimal::from(27),
        total_score: total.parse().unwrap(),
        timestamp: "2025-03-01T10:30:00".parse().unwrap(),
        notes: String::new(),
    }
}
