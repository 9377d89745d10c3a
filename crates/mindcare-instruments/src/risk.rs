//! Student risk classification from the latest screening scores.

use mindcare_core::models::student::RiskLevel;

pub const HIGH_RISK_CUTOFF: u32 = 15;
pub const MODERATE_RISK_CUTOFF: u32 = 10;

pub const GHQ_HIGH_RISK_CUTOFF: u32 = 24;
pub const GHQ_MODERATE_RISK_CUTOFF: u32 = 16;

/// General-health figure derived from the two screenings:
/// `floor((phq9 + gad7) * 1.2)`.
pub fn derived_ghq(phq9: u32, gad7: u32) -> u32 {
    (phq9 + gad7) * 6 / 5
}

/// Classify risk from the most recent PHQ-9 and GAD-7 totals and the GHQ
/// figure derived from them. A missing score counts as zero.
pub fn classify_risk(phq9: Option<u32>, gad7: Option<u32>) -> RiskLevel {
    let (phq9, gad7) = (phq9.unwrap_or(0), gad7.unwrap_or(0));
    let worst = phq9.max(gad7);
    let ghq = derived_ghq(phq9, gad7);

    if worst >= HIGH_RISK_CUTOFF || ghq >= GHQ_HIGH_RISK_CUTOFF {
        RiskLevel::High
    } else if worst >= MODERATE_RISK_CUTOFF || ghq >= GHQ_MODERATE_RISK_CUTOFF {
        RiskLevel::Moderate
    } else {
        RiskLevel::Low
    }
}
