//! Repair desk: typed core of a machine-repair operations console.
//!
//! Every durable fact lives in a spreadsheet served over HTTP. This crate
//! maps sheet rows to typed records, derives each record's workflow stage
//! from field presence, computes the figures the console shows, and applies
//! stage transitions as concurrent per-cell writes with a per-operation
//! report.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: HTTP and in-memory implementations of ports
//!
//! # Modules
//!
//! - [`sheet`]: Cell vocabulary and the spreadsheet gateway
//! - [`workflow`]: Schemas, stage classification, amounts and transitions
//! - [`access`]: Resolved identities, ownership filtering and page access
//! - [`config`]: Layered configuration loaded once at startup

pub mod access;
pub mod config;
pub mod sheet;
pub mod workflow;
