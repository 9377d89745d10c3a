//! mindcare-instruments
//!
//! Self-assessment questionnaire definitions. Pure data, no I/O.
//! Defines the questions, answer options, and severity thresholds of each
//! supported instrument, plus the student risk classification derived from
//! their scores.

pub mod error;
pub mod instruments;
pub mod risk;
pub mod scoring;

use error::InstrumentError;
use scoring::{AnswerOption, AnswerSet, Question, ScoreResult, SeverityBand};

/// Trait implemented by each questionnaire.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "phq9", "gad7").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "PHQ-9").
    fn name(&self) -> &str;

    fn description(&self) -> &str;

    /// Questions in presentation order.
    fn questions(&self) -> &[Question];

    /// Answer options offered for every question.
    fn options(&self) -> &[AnswerOption] {
        instruments::frequency_options()
    }

    /// Severity threshold table, ascending by `min`, first row at 0.
    fn bands(&self) -> &[SeverityBand];

    fn max_answer(&self) -> u8 {
        self.options().iter().map(|o| o.value).max().unwrap_or(0)
    }

    fn max_score(&self) -> u32 {
        self.questions().len() as u32 * u32::from(self.max_answer())
    }

    /// Check that every question is answered, with a valid option, and that
    /// nothing else was submitted.
    fn validate_answers(&self, answers: &AnswerSet) -> Result<(), InstrumentError> {
        let questions = self.questions();
        let max = self.max_answer();

        for (question_id, &value) in answers {
            if !questions.iter().any(|q| &q.id == question_id) {
                return Err(InstrumentError::UnknownQuestion {
                    instrument_id: self.id().to_string(),
                    question_id: question_id.clone(),
                });
            }
            if value > max {
                return Err(InstrumentError::AnswerOutOfRange {
                    question_id: question_id.clone(),
                    value,
                    min: 0,
                    max,
                });
            }
        }

        let missing: Vec<String> = questions
            .iter()
            .filter(|q| !answers.contains_key(&q.id))
            .map(|q| q.id.clone())
            .collect();
        if !missing.is_empty() {
            return Err(InstrumentError::Incomplete {
                instrument_id: self.id().to_string(),
                missing,
            });
        }

        Ok(())
    }

    /// Band for a total: walk the table from the highest cutoff down and take
    /// the first band whose minimum does not exceed the score.
    fn band_for(&self, total: u32) -> &SeverityBand {
        let bands = self.bands();
        bands
            .iter()
            .rev()
            .find(|b| b.min <= total)
            .unwrap_or(&bands[0])
    }

    /// Score a complete answer set.
    fn score(&self, answers: &AnswerSet) -> Result<ScoreResult, InstrumentError> {
        self.validate_answers(answers)?;

        let total: u32 = answers.values().map(|&v| u32::from(v)).sum();
        let band = self.band_for(total);

        Ok(ScoreResult {
            instrument_id: self.id().to_string(),
            total,
            max: self.max_score(),
            severity: band.severity,
            label: band.severity.label().to_string(),
            prevalence: band.prevalence.clone(),
        })
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::phq9::Phq9),
        Box::new(instruments::gad7::Gad7),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

/// Look up an instrument and score `answers` against it.
pub fn score(instrument_id: &str, answers: &AnswerSet) -> Result<ScoreResult, InstrumentError> {
    let instrument = get_instrument(instrument_id)
        .ok_or_else(|| InstrumentError::UnknownInstrument(instrument_id.to_string()))?;
    instrument.score(answers)
}
