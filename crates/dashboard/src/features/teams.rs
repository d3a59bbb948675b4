use domain::Dataset;
use domain::dto::teams::TeamQuery;
use domain::models::Team;
use domain::query;
use serde::Serialize;

use crate::formatters::format_date;
use crate::labels::{StatusBadge, payment_badge, team_status_badge};

/// One row of the teams table, with the event reference already resolved.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRow {
    /// Event display name; the raw id when the reference dangles.
    pub event_name: String,
    pub registered_display: String,
    pub status_badge: StatusBadge,
    pub payment_badge: StatusBadge,
    pub team: Team,
}

pub fn team_rows(dataset: &Dataset, query_params: &TeamQuery) -> Vec<TeamRow> {
    query::run(&dataset.teams, query_params)
        .into_iter()
        .map(|team| TeamRow {
            event_name: dataset.event_name(&team.event_id).to_string(),
            registered_display: format_date(team.registration_date),
            status_badge: team_status_badge(team.status),
            payment_badge: payment_badge(team.payment_status),
            team,
        })
        .collect()
}
