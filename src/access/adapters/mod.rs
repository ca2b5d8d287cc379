//! Adapter implementations for the authenticator port.

pub mod memory;
