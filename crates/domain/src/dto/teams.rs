use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::{PaymentStatus, Team};
use crate::query::{SortDirection, TableQuery, TableRecord};

/// Sortable columns of the teams table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TeamSortKey {
    Name,
    Organization,
    #[default]
    RegistrationDate,
    MemberCount,
}

/// Query state of the teams page. The categorical filter is the team's
/// payment status, not its competition status.
pub type TeamQuery = TableQuery<TeamSortKey, PaymentStatus>;

impl Default for TeamQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: None,
            sort: TeamSortKey::RegistrationDate,
            direction: SortDirection::Descending,
        }
    }
}

impl TableRecord for Team {
    type SortKey = TeamSortKey;
    type Category = PaymentStatus;

    fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.organization.to_lowercase().contains(needle)
            || self.captain_name.to_lowercase().contains(needle)
    }

    fn matches_category(&self, category: &PaymentStatus) -> bool {
        self.payment_status == *category
    }

    fn compare_by(&self, other: &Self, key: TeamSortKey) -> Ordering {
        match key {
            TeamSortKey::Name => self.name.cmp(&other.name),
            TeamSortKey::Organization => self.organization.cmp(&other.organization),
            TeamSortKey::RegistrationDate => self.registration_date.cmp(&other.registration_date),
            TeamSortKey::MemberCount => self.member_count.cmp(&other.member_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::query;

    #[test]
    fn test_default_query_matches_teams_page_initial_state() {
        let query = TeamQuery::default();
        assert_eq!(query.sort, TeamSortKey::RegistrationDate);
        assert_eq!(query.direction, SortDirection::Descending);
        assert!(query.category.is_none());
    }

    #[test]
    fn test_payment_filter_selects_exactly() {
        let mut overdue = fixtures::team("t1", "Falcons", "Westside Prep", "Liam Ortiz");
        overdue.payment_status = PaymentStatus::Overdue;
        let paid = fixtures::team("t2", "Robotics United", "Jefferson High", "Maya Chen");

        let result = query::run(
            &[overdue, paid],
            &TableQuery {
                search: String::new(),
                category: Some(PaymentStatus::Overdue),
                sort: TeamSortKey::Name,
                direction: SortDirection::Ascending,
            },
        );

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "t1");
    }

    #[test]
    fn test_member_count_sorts_numerically() {
        let mut small = fixtures::team("t1", "Falcons", "Westside Prep", "Liam Ortiz");
        small.member_count = 4;
        let mut large = fixtures::team("t2", "Robotics United", "Jefferson High", "Maya Chen");
        large.member_count = 11;

        let result = query::run(
            &[large, small],
            &TableQuery {
                search: String::new(),
                category: None,
                sort: TeamSortKey::MemberCount,
                direction: SortDirection::Ascending,
            },
        );

        assert_eq!(result[0].member_count, 4);
        assert_eq!(result[1].member_count, 11);
    }
}
