use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{CompetitionEvent, Invoice, Judge, ScoreEntry, Team};

/// Immutable snapshot of every record set available to the dashboard.
///
/// Loaded once and queried in place; there is no write path. Cross-entity
/// relationships are string foreign keys resolved at lookup time, and a
/// dangling reference is not an error; callers fall back to the raw id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    #[serde(default)]
    pub events: Vec<CompetitionEvent>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub judges: Vec<Judge>,
    #[serde(default)]
    pub scores: Vec<ScoreEntry>,
    #[serde(default)]
    pub invoices: Vec<Invoice>,
}

impl Dataset {
    /// Loads a snapshot from its JSON form. Unknown status values or
    /// malformed dates are rejected here, at the boundary, rather than
    /// tolerated downstream.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let dataset: Self = serde_json::from_str(raw)?;
        tracing::info!(
            events = dataset.events.len(),
            teams = dataset.teams.len(),
            judges = dataset.judges.len(),
            scores = dataset.scores.len(),
            invoices = dataset.invoices.len(),
            "dataset snapshot loaded"
        );
        Ok(dataset)
    }

    pub fn event(&self, event_id: &str) -> Option<&CompetitionEvent> {
        self.events.iter().find(|event| event.id == event_id)
    }

    /// Resolves an event id to its display name, falling back to the raw id
    /// when the reference does not match any loaded event.
    pub fn event_name<'a>(&'a self, event_id: &'a str) -> &'a str {
        self.event(event_id)
            .map(|event| event.name.as_str())
            .unwrap_or(event_id)
    }

    /// Events with at least one recorded score, in snapshot order. Drives
    /// the leaderboard's event selector.
    pub fn scored_events(&self) -> Vec<&CompetitionEvent> {
        self.events
            .iter()
            .filter(|event| self.scores.iter().any(|score| score.event_id == event.id))
            .collect()
    }
}
