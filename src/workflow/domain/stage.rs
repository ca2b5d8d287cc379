//! Presence-based stage gates and the pending/history partition.

use super::record::TaskRecord;
use super::schema::{FieldName, SheetSchema};
use crate::access::domain::Identity;

/// Position of a record relative to one stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageStatus {
    /// The stage's trigger is not set yet.
    NotReached,
    /// Triggered and awaiting completion.
    Pending,
    /// Both trigger and completion are set.
    Completed,
}

/// The pair of fields deciding a record's status for one stage.
///
/// Only these two fields are consulted; no third field influences the
/// result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageGate {
    trigger: Option<FieldName>,
    completion: FieldName,
}

impl StageGate {
    /// A gate triggered by `trigger` and completed by `completion`.
    #[must_use]
    pub const fn planned(trigger: FieldName, completion: FieldName) -> Self {
        Self {
            trigger: Some(trigger),
            completion,
        }
    }

    /// A gate that is pending for every non-blank record until `completion`
    /// is set.
    #[must_use]
    pub const fn completion_only(completion: FieldName) -> Self {
        Self {
            trigger: None,
            completion,
        }
    }

    /// Returns the trigger field, if any.
    #[must_use]
    pub const fn trigger(&self) -> Option<FieldName> {
        self.trigger
    }

    /// Returns the completion field.
    #[must_use]
    pub const fn completion(&self) -> FieldName {
        self.completion
    }

    /// Classifies one record.
    #[must_use]
    pub fn status_of(&self, record: &TaskRecord) -> StageStatus {
        if record.is_blank() {
            return StageStatus::NotReached;
        }
        let triggered = self.trigger.is_none_or(|field| record.has(field));
        match (triggered, record.has(self.completion)) {
            (true, false) => StageStatus::Pending,
            (true, true) => StageStatus::Completed,
            (false, _) => StageStatus::NotReached,
        }
    }

    /// Splits records into pending and history, dropping not-reached ones.
    #[must_use]
    pub fn partition(&self, records: &[TaskRecord]) -> StagePartition {
        let mut partition = StagePartition::default();
        for record in records {
            match self.status_of(record) {
                StageStatus::Pending => partition.pending.push(record.clone()),
                StageStatus::Completed => partition.history.push(record.clone()),
                StageStatus::NotReached => {}
            }
        }
        partition
    }
}

/// Records awaiting a stage and records that completed it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StagePartition {
    /// Triggered, not yet completed.
    pub pending: Vec<TaskRecord>,
    /// Completed.
    pub history: Vec<TaskRecord>,
}

impl StagePartition {
    /// Keeps the records of both buckets that satisfy `predicate`.
    #[must_use]
    pub fn filtered(&self, predicate: impl Fn(&TaskRecord) -> bool) -> Self {
        Self {
            pending: self.pending.iter().filter(|r| predicate(r)).cloned().collect(),
            history: self.history.iter().filter(|r| predicate(r)).cloned().collect(),
        }
    }

    /// Case-insensitive free-text search over the schema's search fields.
    #[must_use]
    pub fn search(&self, term: &str, schema: &SheetSchema) -> Self {
        self.filtered(|record| record.matches(term, schema.search_fields()))
    }

    /// Keeps only the records `identity` may see on this sheet.
    #[must_use]
    pub fn visible_to(&self, identity: &Identity, schema: &SheetSchema, admin_role: &str) -> Self {
        self.filtered(|record| identity.sees(record, schema.owner_field(), admin_role))
    }

    /// Finds a pending record by its row position value.
    #[must_use]
    pub fn pending_at(&self, position: usize) -> Option<&TaskRecord> {
        self.pending
            .iter()
            .find(|record| record.position().value() == position)
    }

    /// Total number of records in both buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len().saturating_add(self.history.len())
    }

    /// Returns `true` when both buckets are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.history.is_empty()
    }
}
