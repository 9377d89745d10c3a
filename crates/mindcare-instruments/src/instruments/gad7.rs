use std::sync::LazyLock;

use crate::Instrument;
use crate::scoring::{Question, Severity, SeverityBand, band};

/// GAD-7: Generalized Anxiety Disorder scale.
/// 7 items rated 0–3. Total 0–21. No "moderately severe" band.
pub struct Gad7;

impl Instrument for Gad7 {
    fn id(&self) -> &str {
        "gad7"
    }

    fn name(&self) -> &str {
        "GAD-7"
    }

    fn description(&self) -> &str {
        "7-question assessment to evaluate anxiety symptoms over the past two weeks."
    }

    fn questions(&self) -> &[Question] {
        static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
            super::questions(&[
                ("gad1", "Feeling nervous, anxious, or on edge"),
                ("gad2", "Not being able to stop or control worrying"),
                ("gad3", "Worrying too much about different things"),
                ("gad4", "Trouble relaxing"),
                ("gad5", "Being so restless that it is hard to sit still"),
                ("gad6", "Becoming easily annoyed or irritable"),
                ("gad7", "Feeling afraid as if something awful might happen"),
            ])
        });
        &QUESTIONS
    }

    fn bands(&self) -> &[SeverityBand] {
        static BANDS: LazyLock<Vec<SeverityBand>> = LazyLock::new(|| {
            vec![
                band(Severity::Minimal, 0, 70, "Common"),
                band(Severity::Mild, 5, 18, "1 in 6"),
                band(Severity::Moderate, 10, 8, "1 in 12"),
                band(Severity::Severe, 15, 4, "1 in 25"),
            ]
        });
        &BANDS
    }
}
