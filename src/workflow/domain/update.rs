//! Planned sheet operations and their per-operation outcomes.

use super::record::TaskRecord;
use super::schema::{FieldName, SchemaError, SheetKind, SheetSchema};
use crate::sheet::domain::{CellAddress, ColumnIndex, RowData, RowPosition};
use std::fmt;

/// One value destined for one column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellWrite {
    /// Field written.
    pub field: FieldName,
    /// Column of the field.
    pub column: ColumnIndex,
    /// Full replacement value.
    pub value: String,
}

/// A single remote mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetOperation {
    /// Overwrite one cell of an existing row.
    UpdateCell {
        /// Target sheet.
        sheet: SheetKind,
        /// Target row.
        row: RowPosition,
        /// Column and value.
        write: CellWrite,
    },
    /// Append one row.
    InsertRow {
        /// Target sheet.
        sheet: SheetKind,
        /// Row values.
        row: RowData,
    },
}

impl SheetOperation {
    /// Returns the target sheet.
    #[must_use]
    pub const fn sheet(&self) -> SheetKind {
        match self {
            Self::UpdateCell { sheet, .. } | Self::InsertRow { sheet, .. } => *sheet,
        }
    }

    /// Returns the address of a cell update.
    #[must_use]
    pub const fn address(&self) -> Option<CellAddress> {
        match self {
            Self::UpdateCell { row, write, .. } => Some(CellAddress::new(*row, write.column)),
            Self::InsertRow { .. } => None,
        }
    }
}

impl fmt::Display for SheetOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UpdateCell { sheet, row, write } => {
                write!(f, "update {} of {sheet} row {row}", write.field)
            }
            Self::InsertRow { sheet, .. } => write!(f, "insert into {sheet}"),
        }
    }
}

/// Result of one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationOutcome {
    /// Acknowledged by the endpoint.
    Succeeded,
    /// Not acknowledged.
    Failed {
        /// Failure message.
        message: String,
        /// Whether the call hit the timeout bound.
        timed_out: bool,
    },
}

impl OperationOutcome {
    /// Returns `true` for success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

/// Everything one transition will write, plus the optimistic result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionPlan {
    stage: &'static str,
    record: TaskRecord,
    operations: Vec<SheetOperation>,
    ledger_entry: Option<TaskRecord>,
}

impl TransitionPlan {
    /// Starts a plan for `record` at `stage`.
    #[must_use]
    pub const fn new(stage: &'static str, record: TaskRecord) -> Self {
        Self {
            stage,
            record,
            operations: Vec::new(),
            ledger_entry: None,
        }
    }

    /// Adds a cell write on the record's own row and patches the record.
    pub fn push_write(&mut self, sheet: SheetKind, write: CellWrite) {
        self.record.set(write.field, write.value.as_str());
        self.operations.push(SheetOperation::UpdateCell {
            sheet,
            row: self.record.position(),
            write,
        });
    }

    /// Adds a row insert whose optimistic result is `entry`.
    pub fn push_insert(&mut self, sheet: SheetKind, row: RowData, entry: TaskRecord) {
        self.operations.push(SheetOperation::InsertRow { sheet, row });
        self.ledger_entry = Some(entry);
    }

    /// Returns the stage label.
    #[must_use]
    pub const fn stage(&self) -> &'static str {
        self.stage
    }

    /// Returns the record as it will look once every write lands.
    #[must_use]
    pub const fn record(&self) -> &TaskRecord {
        &self.record
    }

    /// Returns the planned operations.
    #[must_use]
    pub fn operations(&self) -> &[SheetOperation] {
        &self.operations
    }

    /// Returns the optimistic ledger entry, if the plan inserts one.
    #[must_use]
    pub const fn ledger_entry(&self) -> Option<&TaskRecord> {
        self.ledger_entry.as_ref()
    }
}

/// Outcome of every operation of a plan, in plan order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    plan: TransitionPlan,
    outcomes: Vec<OperationOutcome>,
}

impl WriteReport {
    /// Pairs a plan with its outcomes.
    #[must_use]
    pub const fn new(plan: TransitionPlan, outcomes: Vec<OperationOutcome>) -> Self {
        Self { plan, outcomes }
    }

    /// Returns the plan.
    #[must_use]
    pub const fn plan(&self) -> &TransitionPlan {
        &self.plan
    }

    /// Iterates over operations with their outcomes.
    pub fn entries(&self) -> impl Iterator<Item = (&SheetOperation, &OperationOutcome)> {
        self.plan.operations.iter().zip(self.outcomes.iter())
    }

    /// Returns `true` when every operation succeeded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.outcomes.len() == self.plan.operations.len()
            && self.outcomes.iter().all(OperationOutcome::is_success)
    }

    /// Returns the failed operations with their plan index.
    #[must_use]
    pub fn failed(&self) -> Vec<(usize, &SheetOperation)> {
        self.entries()
            .enumerate()
            .filter(|(_, (_, outcome))| !outcome.is_success())
            .map(|(index, (operation, _))| (index, operation))
            .collect()
    }

    /// Returns the message of the first failed operation.
    #[must_use]
    pub fn first_failure(&self) -> Option<(&SheetOperation, &str)> {
        self.entries().find_map(|(operation, outcome)| match outcome {
            OperationOutcome::Failed { message, .. } => Some((operation, message.as_str())),
            OperationOutcome::Succeeded => None,
        })
    }

    /// Returns `true` when any failure was a timeout.
    #[must_use]
    pub fn timed_out(&self) -> bool {
        self.outcomes
            .iter()
            .any(|outcome| matches!(outcome, OperationOutcome::Failed { timed_out: true, .. }))
    }

    /// Replaces the outcomes at the given plan indices.
    #[must_use]
    pub fn with_retried(mut self, retried: Vec<(usize, OperationOutcome)>) -> Self {
        for (index, outcome) in retried {
            if let Some(slot) = self.outcomes.get_mut(index) {
                *slot = outcome;
            }
        }
        self
    }

    /// Consumes the report, returning its plan.
    #[must_use]
    pub fn into_plan(self) -> TransitionPlan {
        self.plan
    }
}

impl fmt::Display for WriteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let failed = self.failed().len();
        match self.first_failure() {
            Some((operation, message)) => write!(
                f,
                "{} transition failed: {operation}: {message} ({failed} of {} operations failed)",
                self.plan.stage,
                self.outcomes.len()
            ),
            None => write!(f, "{} transition applied", self.plan.stage),
        }
    }
}

/// Lays `values` out on a row of `schema`, filling gaps with `""`.
///
/// The row is as wide as the right-most field given.
///
/// # Errors
///
/// Returns [`SchemaError::UnknownField`] when a field has no column.
pub fn row_from_fields(
    schema: &SheetSchema,
    values: &[(FieldName, String)],
) -> Result<RowData, SchemaError> {
    let mut placed: Vec<(usize, &str)> = Vec::with_capacity(values.len());
    for (field, value) in values {
        placed.push((schema.column_of(*field)?.value(), value.as_str()));
    }
    let width = placed
        .iter()
        .map(|(column, _)| column.saturating_add(1))
        .max()
        .unwrap_or_default();
    let mut cells = vec![String::new(); width];
    for (column, value) in placed {
        if let Some(cell) = cells.get_mut(column) {
            value.clone_into(cell);
        }
    }
    Ok(RowData::new(cells))
}
