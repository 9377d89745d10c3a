use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Risk label derived from the latest screening scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Moderate => "moderate",
            RiskLevel::High => "high",
        }
    }
}

/// A student who has completed at least one screening.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Student {
    pub id: Uuid,
    pub name: String,
    pub profession: String,
    pub phq9_score: Option<u32>,
    pub gad7_score: Option<u32>,
    pub risk_level: RiskLevel,
    pub last_assessment: Option<jiff::Timestamp>,
    #[serde(default)]
    pub sessions_booked: u32,
    pub created_at: jiff::Timestamp,
}
