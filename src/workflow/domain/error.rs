//! Validation errors for workflow forms.

use super::schema::FieldName;
use thiserror::Error;

/// Errors returned while validating form payloads.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkflowDomainError {
    /// A required field is empty.
    #[error("{0} is required")]
    MissingField(FieldName),

    /// A field that must hold an amount does not parse as one.
    #[error("{field} must be an amount, got '{value}'")]
    InvalidAmount {
        /// Offending field.
        field: FieldName,
        /// Submitted text.
        value: String,
    },

    /// The approval decision is neither approve nor reject.
    #[error("unknown approval decision '{0}'")]
    UnknownDecision(String),
}

pub(crate) fn require(field: FieldName, value: &str) -> Result<(), WorkflowDomainError> {
    if value.trim().is_empty() {
        return Err(WorkflowDomainError::MissingField(field));
    }
    Ok(())
}

pub(crate) fn require_amount(field: FieldName, value: &str) -> Result<(), WorkflowDomainError> {
    require(field, value)?;
    if super::amount::parse_amount(value).is_none() {
        return Err(WorkflowDomainError::InvalidAmount {
            field,
            value: value.to_owned(),
        });
    }
    Ok(())
}
