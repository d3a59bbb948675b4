use domain::Dataset;
use domain::models::{CompetitionEvent, EventStatus};
use domain::services::summary::{self, CategoryBreakdown, OverviewStats};
use serde::Serialize;

use crate::formatters::format_currency;

/// The overview page shows at most this many events in its side list.
pub const EVENT_LIST_LIMIT: usize = 8;

/// One headline stat card.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverviewView {
    pub stats: OverviewStats,
    pub cards: Vec<StatCard>,
    pub categories: Vec<CategoryBreakdown>,
}

pub fn overview_view(dataset: &Dataset) -> OverviewView {
    let stats = summary::overview_stats(dataset);

    let cards = vec![
        StatCard {
            label: "Total Events",
            value: stats.total_events.to_string(),
        },
        StatCard {
            label: "Active Teams",
            value: stats.active_teams.to_string(),
        },
        StatCard {
            label: "Total Revenue",
            value: format_currency(stats.total_revenue),
        },
        StatCard {
            label: "Avg Score",
            value: format!("{:.1}", stats.avg_score),
        },
    ];

    OverviewView {
        cards,
        categories: summary::events_by_category(&dataset.events),
        stats,
    }
}

/// Events for the overview side list, optionally narrowed to one status.
pub fn overview_events<'a>(
    dataset: &'a Dataset,
    status: Option<EventStatus>,
) -> Vec<&'a CompetitionEvent> {
    dataset
        .events
        .iter()
        .filter(|event| status.is_none_or(|wanted| event.status == wanted))
        .take(EVENT_LIST_LIMIT)
        .collect()
}
