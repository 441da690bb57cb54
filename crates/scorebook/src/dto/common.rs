use uuid::Uuid;

use crate::error::{Result, ScoringError};

/// Identifiers arrive as strings from scoring clients; blanks are the common failure.
pub(crate) fn validate_identifier(value: &str) -> std::result::Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        let mut error = validator::ValidationError::new("required");
        error.message = Some("Identifier must not be empty".into());
        return Err(error);
    }

    match Uuid::parse_str(value.trim()) {
        Ok(id) if !id.is_nil() => Ok(()),
        _ => {
            let mut error = validator::ValidationError::new("invalid_identifier");
            error.message = Some("Identifier must be a valid UUID".into());
            Err(error)
        }
    }
}

/// Like [`validate_identifier`], but a blank value means "not given".
pub(crate) fn validate_optional_identifier(
    value: &str,
) -> std::result::Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Ok(());
    }
    validate_identifier(value)
}

pub(crate) fn parse_identifier(field: &str, value: &str) -> Result<Uuid> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ScoringError::Validation(format!("{}: Identifier must not be empty", field)));
    }
    Uuid::parse_str(trimmed)
        .map_err(|_| ScoringError::Validation(format!("{}: Identifier must be a valid UUID", field)))
}

pub(crate) fn parse_optional_identifier(field: &str, value: Option<&str>) -> Result<Option<Uuid>> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => parse_identifier(field, v).map(Some),
        None => Ok(None),
    }
}
