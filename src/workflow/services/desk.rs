//! Console-facing facade over reads and transitions.

use super::executor::{AppliedTransition, TransitionError, TransitionExecutor, TransitionResult};
use super::reader::{BoardResult, SheetReader};
use super::settings::DeskSettings;
use crate::access::domain::Identity;
use crate::sheet::domain::RowData;
use crate::sheet::ports::SheetGateway;
use crate::workflow::domain::{
    IndentForm, PAYMENT_LEDGER, PaymentForm, PaymentLedger, PipelineStage, REPAIR_SYSTEM,
    RepairDashboard, SchemaError, SequenceAllocator, SheetKind, StagePartition, StampFormat,
    TaskRecord, Transition, WriteReport, layouts::repair, row_from_fields, schema_for,
};
use mockable::Clock;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

/// A completed transition together with the refreshed board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// The applied transition.
    pub applied: AppliedTransition,
    /// The stage board read back after the writes, or `None` when the
    /// re-read failed. The writes have landed either way.
    pub board: Option<StagePartition>,
}

/// Entry point for the console's workflows.
#[derive(Clone)]
pub struct StageDesk<G, C>
where
    G: SheetGateway,
    C: Clock + Send + Sync,
{
    reader: SheetReader<G>,
    executor: TransitionExecutor<G, C>,
    settings: Arc<DeskSettings>,
}

impl<G, C> StageDesk<G, C>
where
    G: SheetGateway,
    C: Clock + Send + Sync,
{
    /// Creates a desk sharing one gateway between reads and writes.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] when a shipped schema is inconsistent.
    pub fn new(
        gateway: Arc<G>,
        clock: Arc<C>,
        settings: Arc<DeskSettings>,
    ) -> Result<Self, SchemaError> {
        let reader = SheetReader::new(Arc::clone(&gateway), Arc::clone(&settings))?;
        let executor = TransitionExecutor::new(gateway, clock, Arc::clone(&settings));
        Ok(Self {
            reader,
            executor,
            settings,
        })
    }

    /// Returns the reader.
    #[must_use]
    pub const fn reader(&self) -> &SheetReader<G> {
        &self.reader
    }

    /// Returns the executor.
    #[must_use]
    pub const fn executor(&self) -> &TransitionExecutor<G, C> {
        &self.executor
    }

    /// Fetches the pending and history buckets for `stage`.
    ///
    /// # Errors
    ///
    /// Returns [`super::BoardError`] when the sheet cannot be read.
    pub async fn board<S: PipelineStage>(&self, stage: S) -> BoardResult<StagePartition> {
        self.reader.board(stage).await
    }

    /// Fetches the board for `stage` restricted to what `identity` may see.
    ///
    /// # Errors
    ///
    /// Returns [`super::BoardError`] when the sheet cannot be read.
    pub async fn visible_board<S: PipelineStage>(
        &self,
        identity: &Identity,
        stage: S,
    ) -> BoardResult<StagePartition> {
        let board = self.reader.board(stage).await?;
        Ok(board.visible_to(identity, S::schema(), self.settings.admin_role()))
    }

    /// Applies `form` to `record`, then re-reads the stage board.
    ///
    /// A failed re-read does not fail the call: the completion carries no
    /// board and the caller keeps the patched record.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError`] when the transition fails.
    pub async fn complete<T: Transition>(
        &self,
        record: &TaskRecord,
        form: &T,
    ) -> TransitionResult<Completion> {
        let applied = self.executor.execute(record, form).await?;
        self.refreshed(applied, form.stage()).await
    }

    /// Re-sends the failed operations of `report`, then re-reads the board of
    /// `stage`.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::Incomplete`] when operations still fail.
    pub async fn retry<S: PipelineStage>(
        &self,
        report: WriteReport,
        stage: S,
    ) -> TransitionResult<Completion> {
        let applied = self.executor.retry(report).await?;
        self.refreshed(applied, stage).await
    }

    /// Reads the payment ledger.
    ///
    /// # Errors
    ///
    /// Returns [`super::BoardError`] when the ledger cannot be read.
    pub async fn payment_ledger(&self) -> BoardResult<PaymentLedger> {
        let records = self.reader.fetch(&PAYMENT_LEDGER).await?;
        Ok(PaymentLedger::from_records(records))
    }

    /// Pays a repair and records the payment in the ledger.
    ///
    /// The ledger is re-read first and replaces `ledger`. When it already
    /// holds an entry for the ticket, no row is inserted; otherwise the next
    /// payment number is allocated and the insert runs concurrently with the
    /// record's cell writes. On success the new entry is appended to
    /// `ledger` without another read.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError`] when the ledger cannot be read or any
    /// operation fails.
    pub async fn submit_payment(
        &self,
        record: &TaskRecord,
        form: &PaymentForm,
        ledger: &mut PaymentLedger,
    ) -> TransitionResult<AppliedTransition> {
        let mut plan = self.executor.prepare(record, form).await?;
        *ledger = self.payment_ledger().await?;
        if ledger.entry_for_task(record.get(repair::TASK_NO)).is_none() {
            let payment_no = SequenceAllocator::payment_numbers().next(ledger.payment_numbers());
            let timestamp = self.executor.stamp(StampFormat::DateTime);
            let values = form.ledger_values(record, &payment_no, &timestamp);
            let row = row_from_fields(&PAYMENT_LEDGER, &values)?;
            let entry = ledger.pending_entry(&values);
            plan.push_insert(SheetKind::PaymentLedger, row, entry);
        }
        let applied = self.executor.apply(plan).await?;
        Self::record_payment(&applied, ledger);
        Ok(applied)
    }

    /// Re-sends the failed operations of a payment and appends the ledger
    /// entry once everything landed.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::Incomplete`] when operations still fail.
    pub async fn retry_payment(
        &self,
        report: WriteReport,
        ledger: &mut PaymentLedger,
    ) -> TransitionResult<AppliedTransition> {
        let applied = self.executor.retry(report).await?;
        Self::record_payment(&applied, ledger);
        Ok(applied)
    }

    /// Uploads the form's attachments, then appends the new row.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::Upload`] when an attachment cannot be
    /// stored, in which case nothing is inserted, and
    /// [`TransitionError::Insert`] when the row is not acknowledged.
    pub async fn submit_indent<F: IndentForm>(&self, form: &F) -> TransitionResult<RowData> {
        form.validate()?;
        let mut urls = BTreeMap::new();
        for (field, file) in form.attachments() {
            let url = self
                .executor
                .upload(file)
                .await
                .map_err(TransitionError::Upload)?;
            urls.insert(field, url.as_str().to_owned());
        }
        let timestamp = self.executor.stamp(StampFormat::DateTime);
        let values = form.field_values(&timestamp, &urls);
        let row = row_from_fields(schema_for(form.sheet()), &values)?;
        self.executor
            .insert(form.sheet(), &row)
            .await
            .map_err(TransitionError::Insert)?;
        info!(sheet = %form.sheet(), "indent submitted");
        Ok(row)
    }

    /// Reads the repair sheet and computes the dashboard figures.
    ///
    /// # Errors
    ///
    /// Returns [`super::BoardError`] when the sheet cannot be read.
    pub async fn dashboard(&self) -> BoardResult<RepairDashboard> {
        let records = self.reader.fetch(&REPAIR_SYSTEM).await?;
        Ok(RepairDashboard::from_records(&records))
    }

    /// Reads every sheet once and checks its layout.
    ///
    /// # Errors
    ///
    /// Returns the first [`super::BoardError`] encountered.
    pub async fn verify_layouts(&self) -> BoardResult<()> {
        self.reader.verify_layouts().await
    }

    async fn refreshed<S: PipelineStage>(
        &self,
        applied: AppliedTransition,
        stage: S,
    ) -> TransitionResult<Completion> {
        let board = match self.reader.board(stage).await {
            Ok(board) => Some(board),
            Err(err) => {
                warn!(
                    stage = stage.label(),
                    row = %applied.record.position(),
                    error = %err,
                    "board refresh failed after applied transition"
                );
                None
            }
        };
        Ok(Completion { applied, board })
    }

    fn record_payment(applied: &AppliedTransition, ledger: &mut PaymentLedger) {
        if let Some(entry) = &applied.ledger_entry {
            ledger.append(entry.clone());
        }
    }
}
