//! Fixed operator table for tests and local runs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::access::{
    domain::Identity,
    ports::{AuthenticationError, AuthenticationResult, Authenticator, Credentials},
};

/// Authenticator over an in-memory operator table.
#[derive(Debug, Clone, Default)]
pub struct StaticAuthenticator {
    operators: Arc<RwLock<HashMap<String, (String, Identity)>>>,
}

impl StaticAuthenticator {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an operator.
    ///
    /// # Errors
    ///
    /// Returns [`AuthenticationError::Unavailable`] when lock acquisition
    /// fails.
    pub fn register(&self, identity: Identity, password: impl Into<String>) -> AuthenticationResult<()> {
        let mut operators = self
            .operators
            .write()
            .map_err(|err| AuthenticationError::unavailable(std::io::Error::other(err.to_string())))?;
        operators.insert(identity.username().to_owned(), (password.into(), identity));
        Ok(())
    }
}

#[async_trait]
impl Authenticator for StaticAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> AuthenticationResult<Identity> {
        let operators = self
            .operators
            .read()
            .map_err(|err| AuthenticationError::unavailable(std::io::Error::other(err.to_string())))?;
        match operators.get(credentials.username()) {
            Some((password, identity)) if password.as_str() == credentials.password() => {
                Ok(identity.clone())
            }
            _ => Err(AuthenticationError::InvalidCredentials),
        }
    }
}
