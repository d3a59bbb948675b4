use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Read-only reference data about a judge and their event assignments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Judge {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: JudgeRole,
    pub assigned_events: Vec<String>,
    pub scored_teams: u32,
    pub avg_rating: Decimal,
    pub specialization: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JudgeRole {
    HeadJudge,
    PanelJudge,
    FieldJudge,
}

impl JudgeRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HeadJudge => "head-judge",
            Self::PanelJudge => "panel-judge",
            Self::FieldJudge => "field-judge",
        }
    }
}
