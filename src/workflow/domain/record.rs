//! Task records and the positional row mapper.

use super::schema::{FieldName, SheetSchema};
use crate::sheet::domain::{RawRow, RowPosition};
use std::collections::BTreeMap;

/// One mapped data row.
///
/// Records are rebuilt from scratch on every fetch. The row position is the
/// only handle writes are addressed by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRecord {
    position: RowPosition,
    fields: BTreeMap<FieldName, String>,
}

impl TaskRecord {
    /// Creates an empty record at `position`.
    #[must_use]
    pub const fn new(position: RowPosition) -> Self {
        Self {
            position,
            fields: BTreeMap::new(),
        }
    }

    /// Sets a field, returning the updated record.
    #[must_use]
    pub fn with_field(mut self, field: FieldName, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Overwrites a field.
    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        self.fields.insert(field, value.into());
    }

    /// Returns the record's absolute row position.
    #[must_use]
    pub const fn position(&self) -> RowPosition {
        self.position
    }

    /// Returns a field's text, or `""` when the field is absent.
    #[must_use]
    pub fn get(&self, field: FieldName) -> &str {
        self.fields.get(&field).map_or("", String::as_str)
    }

    /// Returns `true` when the field holds non-whitespace text.
    #[must_use]
    pub fn has(&self, field: FieldName) -> bool {
        !self.get(field).trim().is_empty()
    }

    /// Returns `true` when every field is empty.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.fields.values().all(|value| value.trim().is_empty())
    }

    /// Returns the first non-empty value among `fields`, or `""`.
    #[must_use]
    pub fn first_present(&self, fields: &[FieldName]) -> &str {
        fields
            .iter()
            .map(|field| self.get(*field))
            .find(|value| !value.trim().is_empty())
            .unwrap_or("")
    }

    /// Case-insensitive substring match over `fields`.
    ///
    /// An empty term matches every record.
    #[must_use]
    pub fn matches(&self, term: &str, fields: &[FieldName]) -> bool {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        fields
            .iter()
            .any(|field| self.get(*field).to_lowercase().contains(&needle))
    }

    /// Iterates over the populated fields in name order.
    pub fn fields(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.fields
            .iter()
            .map(|(field, value)| (*field, value.as_str()))
    }
}

/// Maps full sheet reads into records using one schema.
#[derive(Debug, Clone, Copy)]
pub struct RowMapper<'a> {
    schema: &'a SheetSchema,
}

impl<'a> RowMapper<'a> {
    /// Creates a mapper for `schema`.
    #[must_use]
    pub const fn new(schema: &'a SheetSchema) -> Self {
        Self { schema }
    }

    /// Skips the header block and maps every remaining row.
    ///
    /// The data row at index `i` maps to position `header_rows + 1 + i`.
    /// Missing cells map to `""`; no other validation happens here.
    #[must_use]
    pub fn map(&self, rows: &[RawRow]) -> Vec<TaskRecord> {
        rows.iter()
            .skip(self.schema.header_rows())
            .enumerate()
            .map(|(index, row)| {
                self.map_row(RowPosition::of_data_row(self.schema.header_rows(), index), row)
            })
            .collect()
    }

    /// Maps one row at a known position.
    #[must_use]
    pub fn map_row(&self, position: RowPosition, row: &RawRow) -> TaskRecord {
        let fields = self
            .schema
            .columns()
            .iter()
            .map(|spec| (spec.field, row.text_at(spec.column)))
            .collect();
        TaskRecord { position, fields }
    }
}
