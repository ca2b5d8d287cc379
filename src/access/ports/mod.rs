//! Port contracts for the external authenticator.

pub mod authenticator;

pub use authenticator::{AuthenticationError, AuthenticationResult, Authenticator, Credentials};
