use scorebook::ScoringError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReplayError>;

#[derive(Error, Debug)]
pub enum ReplayError {
    #[error("Failed to read fixture: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Scoring error: {0}")]
    ScoringError(#[from] ScoringError),

    #[error("Event {index} ({kind}) rejected: {source}")]
    EventRejected {
        index: usize,
        kind: &'static str,
        source: ScoringError,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),
}
