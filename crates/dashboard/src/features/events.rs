use domain::Dataset;
use domain::dto::events::EventQuery;
use domain::models::CompetitionEvent;
use domain::query;
use serde::Serialize;

use crate::formatters::{format_currency, format_date};
use crate::labels::{StatusBadge, event_status_badge, registration_badge};

/// One row of the events table, ready to render.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRow {
    pub start_display: String,
    pub capacity_display: String,
    pub entry_fee_display: String,
    pub revenue_display: String,
    pub status_badge: StatusBadge,
    pub registration_badge: StatusBadge,
    pub event: CompetitionEvent,
}

/// Applies the page query and decorates each surviving event for display.
pub fn event_rows(dataset: &Dataset, query_params: &EventQuery) -> Vec<EventRow> {
    query::run(&dataset.events, query_params)
        .into_iter()
        .map(|event| EventRow {
            start_display: format_date(event.start_date),
            capacity_display: format!("{}/{}", event.registered_teams, event.max_teams),
            entry_fee_display: format_currency(event.entry_fee),
            revenue_display: format_currency(event.total_revenue),
            status_badge: event_status_badge(event.status),
            registration_badge: registration_badge(event.registration_status),
            event,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::support;
    use domain::query::{SortDirection, TableQuery};
    use domain::dto::events::EventSortKey;

    #[test]
    fn test_default_query_orders_by_start_date_ascending() {
        let dataset = support::sample_dataset();

        let rows = event_rows(&dataset, &EventQuery::default());

        let ids: Vec<&str> = rows.iter().map(|row| row.event.id.as_str()).collect();
        assert_eq!(ids, vec!["e2", "e1", "e3"]);
    }

    #[test]
    fn test_row_displays_capacity_and_money() {
        let dataset = support::sample_dataset();

        let rows = event_rows(&dataset, &EventQuery::default());
        let spring = rows.iter().find(|row| row.event.id == "e1").unwrap();

        assert_eq!(spring.capacity_display, "12/16");
        assert_eq!(spring.entry_fee_display, "$250.00");
        assert_eq!(spring.revenue_display, "$3,000.00");
        assert_eq!(spring.start_display, "Mar 1, 2025");
    }

    #[test]
    fn test_search_narrows_by_category() {
        let dataset = support::sample_dataset();
        let query = TableQuery {
            search: "drone".to_string(),
            ..EventQuery::default()
        };

        let rows = event_rows(&dataset, &query);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].event.id, "e2");
    }

    #[test]
    fn test_revenue_sort_descending() {
        let dataset = support::sample_dataset();
        let query = TableQuery {
            sort: EventSortKey::TotalRevenue,
            direction: SortDirection::Descending,
            ..EventQuery::default()
        };

        let rows = event_rows(&dataset, &query);

        let ids: Vec<&str> = rows.iter().map(|row| row.event.id.as_str()).collect();
        assert_eq!(ids, vec!["e2", "e1", "e3"]);
    }
}
