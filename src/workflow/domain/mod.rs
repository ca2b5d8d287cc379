//! Domain model for repair and service workflows.
//!
//! Sheets are described by explicit versioned schemas. Records are mapped
//! from positional rows, classified per stage by field presence, and mutated
//! through planned per-cell writes.

pub mod amount;
mod error;
mod forms;
pub mod layouts;
mod payments;
mod pipeline;
mod record;
mod report;
mod schema;
mod sequence;
mod stage;
mod stamp;
mod update;

pub use amount::{amount_due, amount_or_zero, format_amount, parse_amount};
pub use error::WorkflowDomainError;
pub use forms::{
    ADVANCE_PAYMENT_TYPE, ApprovalDecision, ApprovalForm, DispatchForm, ExternalPartsForm,
    IndentForm, PaymentForm, RepairIndentForm, ServiceIndentForm, StorageForm, TallyForm,
    Transition, UNMATCHED_BILL, VerificationForm,
};
pub use layouts::{PAYMENT_LEDGER, REPAIR_SYSTEM, SERVICE, schema_for};
pub use payments::PaymentLedger;
pub use pipeline::{PipelineStage, Progress, RepairStage, ServiceStage, derive_progress};
pub use record::{RowMapper, TaskRecord};
pub use report::{
    RankedEntry, RepairDashboard, RollupEntry, TOP_VENDOR_COUNT, UNKNOWN_LABEL, UnknownPolicy,
    rollup, top_n,
};
pub use schema::{ColumnSpec, FieldName, SchemaError, SheetKind, SheetSchema};
pub use sequence::SequenceAllocator;
pub use stage::{StageGate, StagePartition, StageStatus};
pub use stamp::StampFormat;
pub use update::{
    CellWrite, OperationOutcome, SheetOperation, TransitionPlan, WriteReport, row_from_fields,
};
