//! Addressing types for sheets, rows and columns.

use super::SheetDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Name of a sheet (tab) inside the backing workbook.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SheetName(String);

impl SheetName {
    /// Creates a validated sheet name.
    ///
    /// # Errors
    ///
    /// Returns [`SheetDomainError::EmptySheetName`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, SheetDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SheetDomainError::EmptySheetName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the sheet name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SheetName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SheetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Absolute 1-based position of a row in its sheet.
///
/// This is the only handle updates are addressed by; ticket numbers are
/// display identities and never used for writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowPosition(usize);

impl RowPosition {
    /// Creates a validated row position.
    ///
    /// # Errors
    ///
    /// Returns [`SheetDomainError::InvalidRowPosition`] when the value is
    /// zero.
    pub const fn new(value: usize) -> Result<Self, SheetDomainError> {
        if value == 0 {
            return Err(SheetDomainError::InvalidRowPosition(value));
        }
        Ok(Self(value))
    }

    /// Position of the data row at `index` once `header_rows` leading rows
    /// are skipped.
    #[must_use]
    pub const fn of_data_row(header_rows: usize, index: usize) -> Self {
        Self(header_rows.saturating_add(index).saturating_add(1))
    }

    /// Returns the underlying 1-based value.
    #[must_use]
    pub const fn value(self) -> usize {
        self.0
    }

    /// Position of the row directly below.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Returns the 0-based index of this row in a full sheet read.
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0.saturating_sub(1)
    }
}

impl fmt::Display for RowPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 0-based column index as used by the row mapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnIndex(usize);

impl ColumnIndex {
    /// Creates a 0-based column index.
    #[must_use]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    /// Returns the 0-based value.
    #[must_use]
    pub const fn value(self) -> usize {
        self.0
    }

    /// Converts the index into the numbering the deployment's update
    /// endpoint expects.
    #[must_use]
    pub const fn in_base(self, base: ColumnBase) -> usize {
        match base {
            ColumnBase::Zero => self.0,
            ColumnBase::One => self.0.saturating_add(1),
        }
    }
}

impl fmt::Display for ColumnIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Column numbering convention of the remote update endpoint.
///
/// Read-side indices are always 0-based; this only affects how an update
/// addresses its column on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnBase {
    /// Columns are numbered from 0.
    Zero,
    /// Columns are numbered from 1 (`A` = 1).
    #[default]
    One,
}

/// Target of a single-cell write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellAddress {
    /// Absolute row position.
    pub row: RowPosition,
    /// 0-based column index.
    pub column: ColumnIndex,
}

impl CellAddress {
    /// Creates a cell address.
    #[must_use]
    pub const fn new(row: RowPosition, column: ColumnIndex) -> Self {
        Self { row, column }
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {} column {}", self.row, self.column)
    }
}

/// Identifier of the remote folder that stores uploaded files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FolderId(String);

impl FolderId {
    /// Wraps a folder identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().trim().to_owned())
    }

    /// Returns the folder identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FolderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
