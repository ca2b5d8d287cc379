//! The repair payment ledger as read by the console.

use super::forms::UNMATCHED_BILL;
use super::layouts::{PAYMENT_LEDGER, ledger};
use super::record::TaskRecord;
use super::schema::FieldName;
use crate::sheet::domain::RowPosition;

/// Non-blank entries of the payment ledger sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentLedger {
    entries: Vec<TaskRecord>,
    next_position: Option<RowPosition>,
}

impl PaymentLedger {
    /// Builds a ledger from a fresh read, dropping blank rows.
    #[must_use]
    pub fn from_records(records: Vec<TaskRecord>) -> Self {
        let next_position = records
            .last()
            .map(|record| record.position().next());
        Self {
            entries: records.into_iter().filter(|record| !record.is_blank()).collect(),
            next_position,
        }
    }

    /// Returns the entries in sheet order.
    #[must_use]
    pub fn entries(&self) -> &[TaskRecord] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the ledger has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over allocated payment numbers.
    pub fn payment_numbers(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.get(ledger::PAYMENT_NO))
    }

    /// Finds the entry recorded for a repair ticket.
    ///
    /// A blank ticket number never matches.
    #[must_use]
    pub fn entry_for_task(&self, task_no: &str) -> Option<&TaskRecord> {
        let wanted = task_no.trim();
        if wanted.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .find(|entry| entry.get(ledger::REPAIR_TASK_NO).trim() == wanted)
    }

    /// Position the next appended row will occupy.
    #[must_use]
    pub fn next_position(&self) -> RowPosition {
        self.next_position
            .unwrap_or_else(|| RowPosition::of_data_row(PAYMENT_LEDGER.header_rows(), 0))
    }

    /// Builds the entry a new row with `values` will become once inserted.
    ///
    /// The bill match flag starts unmatched.
    #[must_use]
    pub fn pending_entry(&self, values: &[(FieldName, String)]) -> TaskRecord {
        values
            .iter()
            .fold(TaskRecord::new(self.next_position()), |entry, (field, value)| {
                entry.with_field(*field, value.as_str())
            })
            .with_field(ledger::BILL_MATCH, UNMATCHED_BILL)
    }

    /// Appends an entry without re-reading the sheet.
    pub fn append(&mut self, entry: TaskRecord) {
        self.next_position = Some(entry.position().next());
        self.entries.push(entry);
    }
}
