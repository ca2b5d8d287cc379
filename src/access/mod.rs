//! Access boundary for console operators.
//!
//! Credentials are checked by an external authenticator which returns a
//! resolved [`domain::Identity`]. This module only uses that identity to
//! filter records by ownership and to gate pages.

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
