//! Applying stage transitions as concurrent per-cell writes.
//!
//! A transition is planned first and applied second. Planning checks the
//! stage gate, uploads the attachment and computes every cell value.
//! Applying issues all operations of the plan concurrently and reports one
//! outcome per operation. Nothing is rolled back: a partial failure is
//! returned with its report so the caller can [`TransitionExecutor::retry`]
//! the failed subset.

use super::reader::BoardError;
use super::settings::DeskSettings;
use crate::sheet::domain::{CellAddress, FileUpload, RowData, RowPosition, UploadedFileUrl};
use crate::sheet::ports::{SheetGateway, SheetGatewayError, SheetGatewayResult};
use crate::workflow::domain::{
    CellWrite, OperationOutcome, PipelineStage, SchemaError, SheetKind, SheetOperation,
    StageStatus, StampFormat, TaskRecord, Transition, TransitionPlan, WorkflowDomainError,
    WriteReport,
};
use futures::future::join_all;
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors returned by transitions.
#[derive(Debug, Error)]
pub enum TransitionError {
    /// The form failed validation.
    #[error(transparent)]
    Validation(#[from] WorkflowDomainError),

    /// A field has no column in its schema.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// The record has not reached the stage.
    #[error("row {row} has not reached the {stage} stage")]
    StageNotReached {
        /// Stage label.
        stage: &'static str,
        /// Row of the record.
        row: RowPosition,
    },

    /// The attachment could not be uploaded; nothing was written.
    #[error("attachment upload failed: {0}")]
    Upload(SheetGatewayError),

    /// A row insert outside a transition plan failed.
    #[error("insert failed: {0}")]
    Insert(SheetGatewayError),

    /// Some operations were not acknowledged.
    #[error("{0}")]
    Incomplete(Box<WriteReport>),

    /// A read needed by the transition failed.
    #[error(transparent)]
    Board(#[from] BoardError),
}

impl TransitionError {
    /// Returns the write report of a partial failure.
    #[must_use]
    pub fn report(&self) -> Option<&WriteReport> {
        match self {
            Self::Incomplete(report) => Some(report.as_ref()),
            _ => None,
        }
    }

    /// Consumes the error, returning the write report of a partial failure.
    #[must_use]
    pub fn into_report(self) -> Option<WriteReport> {
        match self {
            Self::Incomplete(report) => Some(*report),
            _ => None,
        }
    }
}

/// Result type for transitions.
pub type TransitionResult<T> = Result<T, TransitionError>;

/// A transition whose every operation succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedTransition {
    /// Record patched with every written value.
    pub record: TaskRecord,
    /// Ledger entry inserted alongside, if any.
    pub ledger_entry: Option<TaskRecord>,
    /// Per-operation report.
    pub report: WriteReport,
}

impl From<WriteReport> for AppliedTransition {
    fn from(report: WriteReport) -> Self {
        Self {
            record: report.plan().record().clone(),
            ledger_entry: report.plan().ledger_entry().cloned(),
            report,
        }
    }
}

/// Plans and applies transitions against a sheet gateway.
#[derive(Clone)]
pub struct TransitionExecutor<G, C>
where
    G: SheetGateway,
    C: Clock + Send + Sync,
{
    gateway: Arc<G>,
    clock: Arc<C>,
    settings: Arc<DeskSettings>,
}

impl<G, C> TransitionExecutor<G, C>
where
    G: SheetGateway,
    C: Clock + Send + Sync,
{
    /// Creates an executor.
    #[must_use]
    pub const fn new(gateway: Arc<G>, clock: Arc<C>, settings: Arc<DeskSettings>) -> Self {
        Self {
            gateway,
            clock,
            settings,
        }
    }

    /// Plans and applies `form` against `record`.
    ///
    /// # Errors
    ///
    /// See [`Self::prepare`] and [`Self::apply`].
    pub async fn execute<T: Transition>(
        &self,
        record: &TaskRecord,
        form: &T,
    ) -> TransitionResult<AppliedTransition> {
        let plan = self.prepare(record, form).await?;
        self.apply(plan).await
    }

    /// Checks the gate, uploads the attachment and plans every write.
    ///
    /// The completion stamp reuses the record's existing value when the
    /// stage is already completed, so a repeated submission writes the same
    /// cells with the same values.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::Validation`] for an invalid form,
    /// [`TransitionError::StageNotReached`] when the gate is not triggered,
    /// and [`TransitionError::Upload`] when the attachment cannot be stored.
    pub async fn prepare<T: Transition>(
        &self,
        record: &TaskRecord,
        form: &T,
    ) -> TransitionResult<TransitionPlan> {
        form.validate()?;
        let stage = form.stage();
        let gate = stage.gate();
        if gate.status_of(record) == StageStatus::NotReached {
            return Err(TransitionError::StageNotReached {
                stage: stage.label(),
                row: record.position(),
            });
        }

        let attachment_url = self.resolve_attachment(record, form).await?;
        let stamp = if record.has(gate.completion()) {
            record.get(gate.completion()).to_owned()
        } else {
            self.stamp(stage.stamp_format())
        };

        let schema = <T::Stage as PipelineStage>::schema();
        let sheet = schema.kind();
        let mut plan = TransitionPlan::new(stage.label(), record.clone());
        plan.push_write(
            sheet,
            CellWrite {
                field: gate.completion(),
                column: schema.column_of(gate.completion())?,
                value: stamp,
            },
        );
        for (field, value) in form.field_values(record, &attachment_url) {
            plan.push_write(
                sheet,
                CellWrite {
                    field,
                    column: schema.column_of(field)?,
                    value,
                },
            );
        }
        Ok(plan)
    }

    /// Issues every operation of `plan` concurrently.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::Incomplete`] when any operation failed.
    pub async fn apply(&self, plan: TransitionPlan) -> TransitionResult<AppliedTransition> {
        let outcomes = join_all(plan.operations().iter().map(|op| self.run(op))).await;
        Self::finish(WriteReport::new(plan, outcomes))
    }

    /// Re-issues only the failed operations of `report`.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::Incomplete`] when any operation still
    /// fails.
    pub async fn retry(&self, report: WriteReport) -> TransitionResult<AppliedTransition> {
        let failed: Vec<(usize, SheetOperation)> = report
            .failed()
            .into_iter()
            .map(|(index, operation)| (index, operation.clone()))
            .collect();
        debug!(stage = report.plan().stage(), operations = failed.len(), "retrying");
        let retried = join_all(
            failed
                .iter()
                .map(|(index, operation)| async move { (*index, self.run(operation).await) }),
        )
        .await;
        Self::finish(report.with_retried(retried))
    }

    /// Stores a file in the configured folder.
    ///
    /// # Errors
    ///
    /// Returns [`SheetGatewayError`] when the upload fails or times out.
    pub async fn upload(&self, file: &FileUpload) -> SheetGatewayResult<UploadedFileUrl> {
        self.settings
            .bounded(
                "upload",
                self.gateway.upload_file(file, self.settings.folder()),
            )
            .await
    }

    /// Appends one row outside any plan.
    ///
    /// # Errors
    ///
    /// Returns [`SheetGatewayError`] when the insert fails or times out.
    pub async fn insert(&self, kind: SheetKind, row: &RowData) -> SheetGatewayResult<()> {
        self.settings
            .bounded(
                "insert",
                self.gateway.insert_row(self.settings.sheet(kind), row),
            )
            .await
    }

    /// Formats the current instant for a stamp.
    #[must_use]
    pub fn stamp(&self, format: StampFormat) -> String {
        format.render(self.clock.utc(), self.settings.offset())
    }

    async fn resolve_attachment<T: Transition>(
        &self,
        record: &TaskRecord,
        form: &T,
    ) -> TransitionResult<String> {
        let Some(field) = form.attachment_field() else {
            return Ok(String::new());
        };
        let existing = record.get(field).trim();
        match form.attachment() {
            Some(_) if !existing.is_empty() => {
                debug!(row = %record.position(), field = %field, "reusing stored attachment");
                Ok(existing.to_owned())
            }
            Some(file) => {
                let url = self.upload(file).await.map_err(TransitionError::Upload)?;
                Ok(url.as_str().to_owned())
            }
            None => Ok(existing.to_owned()),
        }
    }

    async fn run(&self, operation: &SheetOperation) -> OperationOutcome {
        let sheet = self.settings.sheet(operation.sheet());
        let result = match operation {
            SheetOperation::UpdateCell { row, write, .. } => {
                self.settings
                    .bounded(
                        "updateCell",
                        self.gateway.update_cell(
                            sheet,
                            CellAddress::new(*row, write.column),
                            &write.value,
                        ),
                    )
                    .await
            }
            SheetOperation::InsertRow { row, .. } => {
                self.settings
                    .bounded("insert", self.gateway.insert_row(sheet, row))
                    .await
            }
        };
        match result {
            Ok(()) => OperationOutcome::Succeeded,
            Err(err) => {
                warn!(operation = %operation, error = %err, "sheet operation failed");
                OperationOutcome::Failed {
                    message: err.to_string(),
                    timed_out: err.is_timeout(),
                }
            }
        }
    }

    fn finish(report: WriteReport) -> TransitionResult<AppliedTransition> {
        if !report.is_complete() {
            return Err(TransitionError::Incomplete(Box::new(report)));
        }
        info!(
            stage = report.plan().stage(),
            row = %report.plan().record().position(),
            operations = report.plan().operations().len(),
            "transition applied"
        );
        Ok(AppliedTransition::from(report))
    }
}
