//! Ordered pipelines and explicit stage derivation.

use super::layouts::{REPAIR_SYSTEM, SERVICE, repair, service};
use super::record::TaskRecord;
use super::schema::SheetSchema;
use super::stage::{StageGate, StageStatus};
use super::stamp::StampFormat;
use std::fmt;

/// A stage of an ordered pipeline.
pub trait PipelineStage: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Stages in pipeline order.
    const ORDER: &'static [Self];

    /// Schema of the sheet holding this pipeline.
    fn schema() -> &'static SheetSchema;

    /// Fields gating this stage.
    fn gate(self) -> StageGate;

    /// Layout of the completion stamp written by this stage.
    fn stamp_format(self) -> StampFormat;

    /// Stable lower-case label.
    fn label(self) -> &'static str;
}

/// Stages of the repair pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RepairStage {
    /// Machine sent to the vendor.
    Dispatch,
    /// Machine and bill checked on return.
    Verification,
    /// Machine received into store.
    Storage,
    /// Vendor paid.
    Payment,
}

impl PipelineStage for RepairStage {
    const ORDER: &'static [Self] = &[
        Self::Dispatch,
        Self::Verification,
        Self::Storage,
        Self::Payment,
    ];

    fn schema() -> &'static SheetSchema {
        &REPAIR_SYSTEM
    }

    fn gate(self) -> StageGate {
        match self {
            Self::Dispatch => StageGate::planned(repair::DISPATCH_PLANNED, repair::DISPATCH_ACTUAL),
            Self::Verification => {
                StageGate::planned(repair::VERIFICATION_PLANNED, repair::VERIFICATION_ACTUAL)
            }
            Self::Storage => StageGate::planned(repair::STORAGE_PLANNED, repair::STORAGE_ACTUAL),
            Self::Payment => StageGate::planned(repair::PAYMENT_PLANNED, repair::PAYMENT_ACTUAL),
        }
    }

    fn stamp_format(self) -> StampFormat {
        match self {
            Self::Dispatch => StampFormat::DateTime,
            Self::Verification | Self::Storage | Self::Payment => StampFormat::Date,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Dispatch => "dispatch",
            Self::Verification => "verification",
            Self::Storage => "storage",
            Self::Payment => "payment",
        }
    }
}

/// Stages of the service ticket pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceStage {
    /// External parts sourced.
    ExternalParts,
    /// Payment approved or rejected.
    PaymentApproval,
    /// Entry booked in the accounts.
    TallyEntry,
}

impl PipelineStage for ServiceStage {
    const ORDER: &'static [Self] = &[Self::ExternalParts, Self::PaymentApproval, Self::TallyEntry];

    fn schema() -> &'static SheetSchema {
        &SERVICE
    }

    fn gate(self) -> StageGate {
        match self {
            Self::ExternalParts => StageGate::completion_only(service::PARTS_ACTUAL),
            Self::PaymentApproval => {
                StageGate::planned(service::APPROVAL_PLANNED, service::APPROVAL_ACTUAL)
            }
            Self::TallyEntry => StageGate::planned(service::TALLY_PLANNED, service::TALLY_ACTUAL),
        }
    }

    fn stamp_format(self) -> StampFormat {
        StampFormat::CompactDateTime
    }

    fn label(self) -> &'static str {
        match self {
            Self::ExternalParts => "external_parts",
            Self::PaymentApproval => "payment_approval",
            Self::TallyEntry => "tally_entry",
        }
    }
}

/// Where a record stands in its pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress<S> {
    /// The earliest stage not yet completed.
    At {
        /// Stage.
        stage: S,
        /// Status of the record for that stage.
        status: StageStatus,
    },
    /// Every stage is completed.
    Finished,
}

impl<S: PipelineStage> Progress<S> {
    /// Returns the current stage, if any.
    #[must_use]
    pub const fn stage(&self) -> Option<S> {
        match self {
            Self::At { stage, .. } => Some(*stage),
            Self::Finished => None,
        }
    }
}

/// Derives a record's position in the pipeline `S` from field presence.
///
/// Source data that violates pipeline order is not re-validated: the first
/// stage that is not completed wins.
#[must_use]
pub fn derive_progress<S: PipelineStage>(record: &TaskRecord) -> Progress<S> {
    S::ORDER
        .iter()
        .map(|stage| (*stage, stage.gate().status_of(record)))
        .find(|(_, status)| *status != StageStatus::Completed)
        .map_or(Progress::Finished, |(stage, status)| Progress::At {
            stage,
            status,
        })
}
