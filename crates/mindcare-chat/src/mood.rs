//! Keyword-based mood triage of a single user message.

use serde::{Deserialize, Serialize};

/// Substrings that suggest emotional distress. Matched case-insensitively,
/// so stems like `depress` also catch `depressed` and `depressing`.
pub const EMOTIONAL_KEYWORDS: &[&str] = &[
    "depress",
    "depression",
    "anxious",
    "anxiety",
    "stress",
    "tension",
    "dukhi",
    "udasi",
    "lonely",
    "panic",
    "fikr",
    "parishan",
];

/// Messages at least this many characters long that contain a keyword are
/// treated as a real concern rather than a passing remark.
pub const CONCERN_LENGTH_THRESHOLD: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mood {
    NoConcern,
    MildConcern,
    Concern,
}

/// Classify a message. Pure and total. Length is measured in Unicode
/// scalar values, so an emoji counts once.
pub fn analyze_mood(text: &str) -> Mood {
    let lowered = text.to_lowercase();
    if !EMOTIONAL_KEYWORDS.iter().any(|kw| lowered.contains(kw)) {
        return Mood::NoConcern;
    }

    if text.chars().count() < CONCERN_LENGTH_THRESHOLD {
        Mood::MildConcern
    } else {
        Mood::Concern
    }
}
