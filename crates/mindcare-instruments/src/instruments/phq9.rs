use std::sync::LazyLock;

use crate::Instrument;
use crate::scoring::{Question, Severity, SeverityBand, band};

/// PHQ-9: Patient Health Questionnaire, depression module.
/// 9 items rated 0–3. Total 0–27.
pub struct Phq9;

impl Instrument for Phq9 {
    fn id(&self) -> &str {
        "phq9"
    }

    fn name(&self) -> &str {
        "PHQ-9"
    }

    fn description(&self) -> &str {
        "9-question assessment to evaluate depression symptoms over the past two weeks."
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            super::questions(&[
                ("phq1", "Little interest or pleasure in doing things"),
                ("phq2", "Feeling down, depressed, or hopeless"),
                ("phq3", "Trouble falling or staying asleep, or sleeping too much"),
                ("phq4", "Feeling tired or having little energy"),
                ("phq5", "Poor appetite or overeating"),
                (
                    "phq6",
                    "Feeling bad about yourself, or that you are a failure or have let yourself or your family down",
                ),
                (
                    "phq7",
                    "Trouble concentrating on things, such as reading or watching television",
                ),
                (
                    "phq8",
                    "Moving or speaking so slowly that other people could have noticed, or the opposite: being fidgety or restless",
                ),
                (
                    "phq9",
                    "Thoughts that you would be better off dead, or thoughts of hurting yourself in some way",
                ),
            ])
        });
        &QUESTIONS
    }

    fn bands(&self) -> &[SeverityBand] {
        static BANDS: LazyLock<Vec<SeverityBand>> = LazyLock::new(|| {
            vec![
                band(Severity::Minimal, 0, 65, "Common"),
                band(Severity::Mild, 5, 20, "1 in 5"),
                band(Severity::Moderate, 10, 10, "1 in 10"),
                band(Severity::ModeratelySevere, 15, 4, "1 in 25"),
                band(Severity::Severe, 20, 1, "1 in 100"),
            ]
        });
        &BANDS
    }
}
