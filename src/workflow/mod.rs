//! Repair and service workflows over the remote sheets.
//!
//! Records are rebuilt from scratch on every read and classified per stage
//! purely by which gating fields are populated. Stage transitions are
//! planned as per-cell writes addressed by row position and applied
//! concurrently:
//!
//! - Schemas, records, stages, forms and amounts in [`domain`]
//! - Reads, transitions and the console facade in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
