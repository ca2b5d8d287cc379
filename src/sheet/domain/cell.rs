//! Cell and row values.

use super::ColumnIndex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::FpCategory;

/// A single cell as returned by the spreadsheet API.
///
/// The API serialises whatever the sheet holds, so a cell may be a string,
/// a number, a checkbox boolean, or `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// A null or missing cell.
    #[default]
    Empty,
    /// A checkbox cell.
    Bool(bool),
    /// A numeric cell.
    Number(serde_json::Number),
    /// A text cell.
    Text(String),
}

impl CellValue {
    /// Creates a text cell.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Renders the cell as text.
    ///
    /// Empty cells, unchecked checkboxes and numeric zero render as `""`,
    /// the same as a missing cell.
    #[must_use]
    pub fn as_text(&self) -> String {
        if self.is_unset() {
            return String::new();
        }
        match self {
            Self::Empty => String::new(),
            Self::Bool(value) => value.to_string(),
            Self::Number(value) => value.to_string(),
            Self::Text(value) => value.clone(),
        }
    }

    /// Returns `true` when the cell carries no visible content.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(value) => value.trim().is_empty(),
            Self::Empty | Self::Bool(_) | Self::Number(_) => self.is_unset(),
        }
    }

    fn is_unset(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Bool(value) => !value,
            Self::Number(value) => value
                .as_f64()
                .is_some_and(|number| number.classify() == FpCategory::Zero),
            Self::Text(value) => value.is_empty(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

/// One positional row read from a sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRow(Vec<CellValue>);

impl RawRow {
    /// Wraps positional cells.
    #[must_use]
    pub const fn new(cells: Vec<CellValue>) -> Self {
        Self(cells)
    }

    /// Builds a row of text cells.
    #[must_use]
    pub fn from_texts<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(values.into_iter().map(CellValue::text).collect())
    }

    /// Returns the cell at `column`, if the row is wide enough.
    #[must_use]
    pub fn cell(&self, column: ColumnIndex) -> Option<&CellValue> {
        self.0.get(column.value())
    }

    /// Returns the cell text at `column`, or `""` past the end of the row.
    #[must_use]
    pub fn text_at(&self, column: ColumnIndex) -> String {
        self.cell(column).map(CellValue::as_text).unwrap_or_default()
    }

    /// Returns the number of cells present.
    #[must_use]
    pub fn width(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when every cell is blank.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.iter().all(CellValue::is_blank)
    }

    /// Overwrites the cell at `column`, padding the row with empty cells.
    pub fn set(&mut self, column: ColumnIndex, value: CellValue) {
        let index = column.value();
        if self.0.len() <= index {
            self.0.resize(index.saturating_add(1), CellValue::Empty);
        }
        if let Some(slot) = self.0.get_mut(index) {
            *slot = value;
        }
    }

    /// Returns the cells as a slice.
    #[must_use]
    pub fn cells(&self) -> &[CellValue] {
        &self.0
    }
}

/// Ordered cell values for a row insert.
///
/// Column alignment is the caller's responsibility; the first value lands in
/// the sheet's first column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RowData(Vec<String>);

impl RowData {
    /// Wraps ordered insert values.
    #[must_use]
    pub const fn new(values: Vec<String>) -> Self {
        Self(values)
    }

    /// Returns the values as a slice.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.0
    }

    /// Returns the number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no values are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Converts the values into a raw row of text cells.
    #[must_use]
    pub fn to_raw_row(&self) -> RawRow {
        RawRow::from_texts(self.0.iter().cloned())
    }
}

impl FromIterator<String> for RowData {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
