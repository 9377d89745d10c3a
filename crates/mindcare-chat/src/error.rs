use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("no API key configured for the completion provider")]
    MissingApiKey,

    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("completion provider returned {status}: {body}")]
    Provider { status: u16, body: String },

    #[error("response parsing failed: {0}")]
    ResponseParse(String),
}
