//! Step definitions for stage transition scenarios.

mod given;
mod then;
mod when;
pub mod world;
