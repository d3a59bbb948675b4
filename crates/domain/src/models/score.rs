use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single judge's scoring of a team in one round.
///
/// Several entries can exist for the same (team, event) pair across judges
/// and rounds; the leaderboard keeps only the best one per team.
/// `total_score` is precomputed upstream, not derived here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEntry {
    pub id: String,
    pub team_id: String,
    pub team_name: String,
    pub event_id: String,
    pub judge_id: String,
    pub judge_name: String,
    pub round: String,
    pub technical_score: Decimal,
    pub presentation_score: Decimal,
    pub innovation_score: Decimal,
    pub total_score: Decimal,
    pub timestamp: NaiveDateTime,
    pub notes: String,
}
