//! Configuration error types.

use thiserror::Error;

/// Errors raised while loading or validating [`super::ConsoleConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Figment extraction or merge error.
    #[error("configuration error: {0}")]
    Figment(Box<figment::Error>),

    /// A required configuration section is not configured.
    #[error("configuration section '{section}' is not configured (missing required fields)")]
    NotConfigured {
        /// Section name as it appears in the TOML file.
        section: String,
    },

    /// A configuration field has an invalid value.
    #[error("invalid configuration value for '{field}': {reason}")]
    InvalidValue {
        /// Dotted field path.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

impl ConfigError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.to_owned(),
            reason: reason.into(),
        }
    }
}
