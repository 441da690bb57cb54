use thiserror::Error;
use validator::ValidationErrors;

use crate::services::reconciliation::Discrepancy;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Nothing to undo: {0}")]
    NoOp(String),

    #[error("Invalid match state: {0}")]
    InvalidState(String),

    #[error("Version conflict: expected {expected}, found {found}")]
    Conflict { expected: u64, found: u64 },

    #[error("Reconciliation failed for innings {innings}: {}", format_discrepancies(.discrepancies))]
    Reconciliation {
        innings: u8,
        discrepancies: Vec<Discrepancy>,
    },
}

pub type Result<T> = std::result::Result<T, ScoringError>;

impl ScoringError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ScoringError::Validation(_))
    }

    pub fn is_no_op(&self) -> bool {
        matches!(self, ScoringError::NoOp(_))
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, ScoringError::Conflict { .. })
    }
}

impl From<ValidationErrors> for ScoringError {
    fn from(errors: ValidationErrors) -> Self {
        let mut field_errors: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    format!(
                        "{}: {}",
                        field,
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    )
                })
            })
            .collect();
        field_errors.sort();

        if field_errors.is_empty() {
            Self::Validation(errors.to_string())
        } else {
            Self::Validation(field_errors.join("; "))
        }
    }
}

fn format_discrepancies(discrepancies: &[Discrepancy]) -> String {
    discrepancies
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
