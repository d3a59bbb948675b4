use std::collections::HashMap;

use serde::Serialize;

use crate::models::ScoreEntry;

/// One team's best score entry for an event, with its 1-based position.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry {
    pub rank: u32,
    pub entry: ScoreEntry,
}

/// Ranks the teams of an event by their single best score entry.
///
/// Entries are filtered to `event_id`, then reduced to one per `team_id`:
/// the entry with the highest `total_score`, where an exact tie keeps the
/// entry seen first in input order. The survivors are sorted descending by
/// total score with a stable sort, so teams tied across each other also keep
/// first-appearance order, and ranks are assigned from 1.
pub fn rank_for_event(scores: &[ScoreEntry], event_id: &str) -> Vec<RankedEntry> {
    let mut best: Vec<ScoreEntry> = Vec::new();
    let mut slot_by_team: HashMap<&str, usize> = HashMap::new();

    for entry in scores.iter().filter(|score| score.event_id == event_id) {
        match slot_by_team.get(entry.team_id.as_str()) {
            Some(&slot) => {
                if entry.total_score > best[slot].total_score {
                    best[slot] = entry.clone();
                }
            }
            None => {
                slot_by_team.insert(entry.team_id.as_str(), best.len());
                best.push(entry.clone());
            }
        }
    }

    best.sort_by(|a, b| b.total_score.cmp(&a.total_score));

    tracing::debug!(event_id, teams = best.len(), "leaderboard computed");

    best.into_iter()
        .enumerate()
        .map(|(index, entry)| RankedEntry {
            rank: index as u32 + 1,
            entry,
        })
        .collect()
}
