use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Answers keyed by question id. Each answer is an ordinal 0–3.
pub type AnswerSet = BTreeMap<String, u8>;

/// Severity classification, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Minimal,
    Mild,
    Moderate,
    ModeratelySevere,
    Severe,
}

impl Severity {
    /// Display label, e.g. `"Moderately Severe"`.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Minimal => "Minimal",
            Severity::Mild => "Mild",
            Severity::Moderate => "Moderate",
            Severity::ModeratelySevere => "Moderately Severe",
            Severity::Severe => "Severe",
        }
    }
}

/// A selectable answer, shared by every question of an instrument.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerOption {
    pub value: u8,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: String,
    pub text: String,
}

/// How common a band is in the general population. Illustrative figures
/// shown alongside a result.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Prevalence {
    pub percentage: u8,
    pub rarity: String,
}

/// One row of a severity threshold table. `min` is inclusive; a band ends
/// where the next band's `min` begins.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeverityBand {
    pub severity: Severity,
    pub min: u32,
    pub prevalence: Prevalence,
}

pub(crate) fn band(severity: Severity, min: u32, percentage: u8, rarity: &str) -> SeverityBand {
    SeverityBand {
        severity,
        min,
        prevalence: Prevalence {
            percentage,
            rarity: rarity.to_string(),
        },
    }
}

/// Outcome of scoring a complete answer set.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScoreResult {
    pub instrument_id: String,
    pub total: u32,
    pub max: u32,
    pub severity: Severity,
    pub label: String,
    pub prevalence: Prevalence,
}
