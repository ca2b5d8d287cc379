//! Authenticator port.

use crate::access::domain::Identity;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Result type for authenticator operations.
pub type AuthenticationResult<T> = Result<T, AuthenticationError>;

/// Login credentials as entered by the operator.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Creates credentials.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the username, trimmed.
    #[must_use]
    pub fn username(&self) -> &str {
        self.username.trim()
    }

    /// Returns the password, trimmed.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.trim()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// External credential check returning a resolved identity.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Resolves credentials into an identity.
    ///
    /// # Errors
    ///
    /// Returns [`AuthenticationError::InvalidCredentials`] when no operator
    /// matches, or [`AuthenticationError::Unavailable`] when the
    /// authenticator cannot be reached.
    async fn authenticate(&self, credentials: &Credentials) -> AuthenticationResult<Identity>;
}

/// Errors returned by authenticators.
#[derive(Debug, Clone, Error)]
pub enum AuthenticationError {
    /// No operator matches the credentials.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The authenticator could not be reached.
    #[error("authenticator unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl AuthenticationError {
    /// Wraps an infrastructure error.
    #[must_use]
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
