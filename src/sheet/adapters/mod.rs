//! Adapter implementations for the sheet gateway port.

pub mod http;
pub mod memory;
