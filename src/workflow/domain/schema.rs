//! Versioned positional schemas for the backing sheets.

use crate::sheet::domain::{ColumnIndex, RawRow};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Name of a record field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldName(&'static str);

impl FieldName {
    /// Creates a field name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the field name as `str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// The backing sheets known to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SheetKind {
    /// Repair pipeline rows.
    RepairSystem,
    /// Service ticket rows.
    Service,
    /// Repair payment ledger rows.
    PaymentLedger,
}

impl SheetKind {
    /// Every sheet kind.
    pub const ALL: [Self; 3] = [Self::RepairSystem, Self::Service, Self::PaymentLedger];

    /// Returns a stable identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RepairSystem => "repair_system",
            Self::Service => "service",
            Self::PaymentLedger => "payment_ledger",
        }
    }
}

impl fmt::Display for SheetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Binding of one field to one 0-based column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    /// Field name.
    pub field: FieldName,
    /// 0-based column index.
    pub column: ColumnIndex,
}

impl ColumnSpec {
    /// Binds `field` to the 0-based `column`.
    #[must_use]
    pub const fn new(field: FieldName, column: usize) -> Self {
        Self {
            field,
            column: ColumnIndex::new(column),
        }
    }
}

/// Explicit mapping table from field names to columns of one sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetSchema {
    kind: SheetKind,
    version: u32,
    header_rows: usize,
    columns: &'static [ColumnSpec],
    search_fields: &'static [FieldName],
    owner_field: Option<FieldName>,
}

impl SheetSchema {
    /// Creates a schema.
    #[must_use]
    pub const fn new(
        kind: SheetKind,
        version: u32,
        header_rows: usize,
        columns: &'static [ColumnSpec],
    ) -> Self {
        Self {
            kind,
            version,
            header_rows,
            columns,
            search_fields: &[],
            owner_field: None,
        }
    }

    /// Sets the fields matched by free-text search.
    #[must_use]
    pub const fn with_search_fields(mut self, fields: &'static [FieldName]) -> Self {
        self.search_fields = fields;
        self
    }

    /// Sets the field naming the requester that owns a record.
    #[must_use]
    pub const fn with_owner_field(mut self, field: FieldName) -> Self {
        self.owner_field = Some(field);
        self
    }

    /// Returns the sheet this schema describes.
    #[must_use]
    pub const fn kind(&self) -> SheetKind {
        self.kind
    }

    /// Returns the layout version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns the number of leading header and meta rows.
    #[must_use]
    pub const fn header_rows(&self) -> usize {
        self.header_rows
    }

    /// Returns the column bindings.
    #[must_use]
    pub const fn columns(&self) -> &'static [ColumnSpec] {
        self.columns
    }

    /// Returns the fields matched by free-text search.
    #[must_use]
    pub const fn search_fields(&self) -> &'static [FieldName] {
        self.search_fields
    }

    /// Returns the ownership field, if records have an owner.
    #[must_use]
    pub const fn owner_field(&self) -> Option<FieldName> {
        self.owner_field
    }

    /// Returns the smallest row width that holds every bound column.
    #[must_use]
    pub fn required_width(&self) -> usize {
        self.columns
            .iter()
            .map(|spec| spec.column.value().saturating_add(1))
            .max()
            .unwrap_or_default()
    }

    /// Resolves the column bound to `field`.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnknownField`] when the schema has no binding
    /// for `field`.
    pub fn column_of(&self, field: FieldName) -> Result<ColumnIndex, SchemaError> {
        self.columns
            .iter()
            .find(|spec| spec.field == field)
            .map(|spec| spec.column)
            .ok_or(SchemaError::UnknownField {
                sheet: self.kind,
                field,
            })
    }

    /// Checks the mapping table itself.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] when a field or column is bound twice, or a
    /// search or owner field has no binding.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let mut fields = HashSet::new();
        let mut columns = HashSet::new();
        for spec in self.columns {
            if !fields.insert(spec.field) {
                return Err(SchemaError::DuplicateField {
                    sheet: self.kind,
                    field: spec.field,
                });
            }
            if !columns.insert(spec.column) {
                return Err(SchemaError::DuplicateColumn {
                    sheet: self.kind,
                    column: spec.column,
                });
            }
        }
        for field in self.search_fields.iter().chain(self.owner_field.iter()) {
            self.column_of(*field)?;
        }
        Ok(())
    }

    /// Checks a full sheet read against the expected layout.
    ///
    /// The last header row must be at least as wide as the schema requires,
    /// so a column removed from the sheet fails here instead of shifting
    /// fields.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::MissingHeaderRows`] when the read is shorter
    /// than the header block and [`SchemaError::LayoutMismatch`] when the
    /// header row is too narrow.
    pub fn verify_layout(&self, rows: &[RawRow]) -> Result<(), SchemaError> {
        if self.header_rows == 0 {
            return Ok(());
        }
        let header = rows
            .get(self.header_rows.saturating_sub(1))
            .ok_or(SchemaError::MissingHeaderRows {
                sheet: self.kind,
                expected: self.header_rows,
                found: rows.len(),
            })?;
        let expected = self.required_width();
        if header.width() < expected {
            return Err(SchemaError::LayoutMismatch {
                sheet: self.kind,
                version: self.version,
                expected,
                found: header.width(),
            });
        }
        Ok(())
    }
}

/// Schema and layout errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// A field is bound to more than one column.
    #[error("{sheet} schema binds field {field} twice")]
    DuplicateField {
        /// Sheet of the schema.
        sheet: SheetKind,
        /// Duplicated field.
        field: FieldName,
    },

    /// A column is bound to more than one field.
    #[error("{sheet} schema binds column {column} twice")]
    DuplicateColumn {
        /// Sheet of the schema.
        sheet: SheetKind,
        /// Duplicated column.
        column: ColumnIndex,
    },

    /// A field has no column binding.
    #[error("{sheet} schema has no column for field {field}")]
    UnknownField {
        /// Sheet of the schema.
        sheet: SheetKind,
        /// Unbound field.
        field: FieldName,
    },

    /// The sheet has fewer rows than its header block.
    #[error("{sheet} sheet has {found} rows, expected at least {expected} header rows")]
    MissingHeaderRows {
        /// Sheet of the schema.
        sheet: SheetKind,
        /// Expected header rows.
        expected: usize,
        /// Rows actually read.
        found: usize,
    },

    /// The header row is narrower than the schema requires.
    #[error("{sheet} sheet layout v{version} needs {expected} columns, header has {found}")]
    LayoutMismatch {
        /// Sheet of the schema.
        sheet: SheetKind,
        /// Schema version.
        version: u32,
        /// Required width.
        expected: usize,
        /// Width of the header row.
        found: usize,
    },
}
