use domain::Dataset;
use domain::models::ScoreEntry;
use domain::services::leaderboard;
use serde::Serialize;

/// Ranks broken out as podium cards at the top of the page.
pub const PODIUM_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

pub fn medal_for_rank(rank: u32) -> Option<Medal> {
    match rank {
        1 => Some(Medal::Gold),
        2 => Some(Medal::Silver),
        3 => Some(Medal::Bronze),
        _ => None,
    }
}

/// One ranked leaderboard row: a team's best entry for the event.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardRow {
    pub rank: u32,
    pub medal: Option<Medal>,
    /// Total score rendered with one decimal place, e.g. `92.5`.
    pub total_display: String,
    pub entry: ScoreEntry,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardView {
    /// Event display name; the raw id when the reference dangles.
    pub event_name: String,
    pub category: Option<String>,
    pub ranked_teams: usize,
    /// Top three rows, present only once at least three teams are ranked.
    pub podium: Vec<LeaderboardRow>,
    pub rows: Vec<LeaderboardRow>,
}

/// Assembles the leaderboard page for one event: every team's single best
/// entry, ranked descending by total score.
pub fn leaderboard_view(dataset: &Dataset, event_id: &str) -> LeaderboardView {
    let rows: Vec<LeaderboardRow> = leaderboard::rank_for_event(&dataset.scores, event_id)
        .into_iter()
        .map(|ranked| LeaderboardRow {
            rank: ranked.rank,
            medal: medal_for_rank(ranked.rank),
            total_display: format!("{:.1}", ranked.entry.total_score),
            entry: ranked.entry,
        })
        .collect();

    let podium = if rows.len() >= PODIUM_SIZE {
        rows[..PODIUM_SIZE].to_vec()
    } else {
        Vec::new()
    };

    tracing::debug!(event_id, ranked = rows.len(), "leaderboard view assembled");

    LeaderboardView {
        event_name: dataset.event_name(event_id).to_string(),
        category: dataset.event(event_id).map(|event| event.category.clone()),
        ranked_teams: rows.len(),
        podium,
        rows,
    }
}
