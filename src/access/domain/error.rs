//! Error types for access domain values.

use thiserror::Error;

/// Errors returned while constructing access values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccessDomainError {
    /// The username is empty after trimming.
    #[error("username must not be empty")]
    EmptyUsername,

    /// The page slug is not known.
    #[error("unknown page '{0}'")]
    UnknownPage(String),
}
