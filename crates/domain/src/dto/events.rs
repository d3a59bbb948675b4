use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::{CompetitionEvent, EventStatus};
use crate::query::{SortDirection, TableQuery, TableRecord};

/// Sortable columns of the events table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventSortKey {
    Name,
    #[default]
    StartDate,
    Status,
    TotalRevenue,
    RegisteredTeams,
}

/// Query state of the events page.
pub type EventQuery = TableQuery<EventSortKey, EventStatus>;

impl Default for EventQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: None,
            sort: EventSortKey::StartDate,
            direction: SortDirection::Ascending,
        }
    }
}

impl TableRecord for CompetitionEvent {
    type SortKey = EventSortKey;
    type Category = EventStatus;

    fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
            || self.location.to_lowercase().contains(needle)
    }

    fn matches_category(&self, category: &EventStatus) -> bool {
        self.status == *category
    }

    fn compare_by(&self, other: &Self, key: EventSortKey) -> Ordering {
        match key {
            EventSortKey::Name => self.name.cmp(&other.name),
            EventSortKey::StartDate => self.start_date.cmp(&other.start_date),
            EventSortKey::Status => self.status.as_str().cmp(other.status.as_str()),
            EventSortKey::TotalRevenue => self.total_revenue.cmp(&other.total_revenue),
            EventSortKey::RegisteredTeams => self.registered_teams.cmp(&other.registered_teams),
        }
    }
}
