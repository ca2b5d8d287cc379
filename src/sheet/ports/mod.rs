//! Port contracts for the spreadsheet API.
//!
//! Ports define infrastructure-agnostic interfaces used by workflow services.

pub mod gateway;

pub use gateway::{SheetGateway, SheetGatewayError, SheetGatewayResult};
