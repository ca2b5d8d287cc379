//! Boundary to the spreadsheet-backed HTTP API.
//!
//! Every durable fact about repairs, services and payments lives in remote
//! sheets. This module defines the cell-level vocabulary used to talk to them
//! and the gateway port the workflow services depend on:
//!
//! - Domain values in [`domain`]
//! - The gateway contract in [`ports`]
//! - HTTP and in-memory implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
