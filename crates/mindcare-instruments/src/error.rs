use thiserror::Error;

#[derive(Debug, Error)]
pub enum InstrumentError {
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("unknown question '{question_id}' for instrument '{instrument_id}'")]
    UnknownQuestion {
        instrument_id: String,
        question_id: String,
    },

    #[error("answer {value} to '{question_id}' is outside range [{min}, {max}]")]
    AnswerOutOfRange {
        question_id: String,
        value: u8,
        min: u8,
        max: u8,
    },

    #[error("{instrument_id} is not yet scorable, unanswered: {}", missing.join(", "))]
    Incomplete {
        instrument_id: String,
        missing: Vec<String>,
    },
}
