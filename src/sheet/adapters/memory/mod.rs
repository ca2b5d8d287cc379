//! In-memory sheet gateway for workflow tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::sheet::{
    domain::{
        CellAddress, CellValue, FileUpload, FolderId, RawRow, RowData, SheetName, UploadedFileUrl,
    },
    ports::{SheetGateway, SheetGatewayError, SheetGatewayResult},
};

/// One call received by the in-memory gateway, in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayCall {
    /// A full sheet read.
    Read {
        /// Sheet read.
        sheet: SheetName,
    },
    /// A row insert.
    Insert {
        /// Sheet appended to.
        sheet: SheetName,
        /// Inserted values.
        row: RowData,
    },
    /// A single-cell write.
    Update {
        /// Sheet written.
        sheet: SheetName,
        /// Target cell.
        address: CellAddress,
        /// Written value.
        value: String,
    },
    /// A file upload.
    Upload {
        /// Uploaded file name.
        file_name: String,
    },
}

impl GatewayCall {
    /// Returns `true` for cell writes.
    #[must_use]
    pub const fn is_update(&self) -> bool {
        matches!(self, Self::Update { .. })
    }

    /// Returns `true` for uploads.
    #[must_use]
    pub const fn is_upload(&self) -> bool {
        matches!(self, Self::Upload { .. })
    }

    /// Returns `true` for inserts.
    #[must_use]
    pub const fn is_insert(&self) -> bool {
        matches!(self, Self::Insert { .. })
    }
}

/// Thread-safe in-memory workbook with fault injection.
///
/// Faults are sticky: a faulted cell, sheet or upload keeps failing until
/// [`InMemorySheetGateway::clear_faults`] is called. Faulted calls are still
/// journaled because the request was issued.
#[derive(Debug, Clone, Default)]
pub struct InMemorySheetGateway {
    state: Arc<RwLock<InMemorySheetState>>,
}

#[derive(Debug, Default)]
struct InMemorySheetState {
    sheets: HashMap<SheetName, Vec<RawRow>>,
    uploads: Vec<String>,
    journal: Vec<GatewayCall>,
    cell_faults: HashMap<(SheetName, CellAddress), String>,
    insert_faults: HashMap<SheetName, String>,
    read_faults: HashMap<SheetName, String>,
    upload_fault: Option<String>,
}

impl InMemorySheetGateway {
    /// Creates an empty workbook.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the contents of a sheet.
    ///
    /// # Errors
    ///
    /// Returns gateway errors when lock acquisition fails.
    pub fn seed_sheet(&self, sheet: &SheetName, rows: Vec<RawRow>) -> SheetGatewayResult<()> {
        let mut state = self.write_state()?;
        state.sheets.insert(sheet.clone(), rows);
        Ok(())
    }

    /// Returns a copy of a sheet's rows, or an empty list for unknown sheets.
    ///
    /// # Errors
    ///
    /// Returns gateway errors when lock acquisition fails.
    pub fn rows(&self, sheet: &SheetName) -> SheetGatewayResult<Vec<RawRow>> {
        let state = self.read_state()?;
        Ok(state.sheets.get(sheet).cloned().unwrap_or_default())
    }

    /// Returns the text of one cell, or `""` when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns gateway errors when lock acquisition fails.
    pub fn cell_text(&self, sheet: &SheetName, address: CellAddress) -> SheetGatewayResult<String> {
        let state = self.read_state()?;
        let text = state
            .sheets
            .get(sheet)
            .and_then(|rows| rows.get(address.row.as_index()))
            .map(|row| row.text_at(address.column))
            .unwrap_or_default();
        Ok(text)
    }

    /// Returns every call received so far.
    ///
    /// # Errors
    ///
    /// Returns gateway errors when lock acquisition fails.
    pub fn journal(&self) -> SheetGatewayResult<Vec<GatewayCall>> {
        Ok(self.read_state()?.journal.clone())
    }

    /// Forgets the call journal.
    ///
    /// # Errors
    ///
    /// Returns gateway errors when lock acquisition fails.
    pub fn clear_journal(&self) -> SheetGatewayResult<()> {
        self.write_state()?.journal.clear();
        Ok(())
    }

    /// Returns the names of files uploaded so far.
    ///
    /// # Errors
    ///
    /// Returns gateway errors when lock acquisition fails.
    pub fn uploads(&self) -> SheetGatewayResult<Vec<String>> {
        Ok(self.read_state()?.uploads.clone())
    }

    /// Makes writes to one cell fail with `message`.
    ///
    /// # Errors
    ///
    /// Returns gateway errors when lock acquisition fails.
    pub fn fail_cell(
        &self,
        sheet: &SheetName,
        address: CellAddress,
        message: impl Into<String>,
    ) -> SheetGatewayResult<()> {
        self.write_state()?
            .cell_faults
            .insert((sheet.clone(), address), message.into());
        Ok(())
    }

    /// Makes inserts into `sheet` fail with `message`.
    ///
    /// # Errors
    ///
    /// Returns gateway errors when lock acquisition fails.
    pub fn fail_inserts(&self, sheet: &SheetName, message: impl Into<String>) -> SheetGatewayResult<()> {
        self.write_state()?
            .insert_faults
            .insert(sheet.clone(), message.into());
        Ok(())
    }

    /// Makes reads of `sheet` fail with `message`.
    ///
    /// # Errors
    ///
    /// Returns gateway errors when lock acquisition fails.
    pub fn fail_reads(&self, sheet: &SheetName, message: impl Into<String>) -> SheetGatewayResult<()> {
        self.write_state()?
            .read_faults
            .insert(sheet.clone(), message.into());
        Ok(())
    }

    /// Makes every upload fail with `message`.
    ///
    /// # Errors
    ///
    /// Returns gateway errors when lock acquisition fails.
    pub fn fail_uploads(&self, message: impl Into<String>) -> SheetGatewayResult<()> {
        self.write_state()?.upload_fault = Some(message.into());
        Ok(())
    }

    /// Removes every injected fault.
    ///
    /// # Errors
    ///
    /// Returns gateway errors when lock acquisition fails.
    pub fn clear_faults(&self) -> SheetGatewayResult<()> {
        let mut state = self.write_state()?;
        state.cell_faults.clear();
        state.insert_faults.clear();
        state.read_faults.clear();
        state.upload_fault = None;
        Ok(())
    }

    fn read_state(&self) -> SheetGatewayResult<RwLockReadGuard<'_, InMemorySheetState>> {
        self.state.read().map_err(|err| lock_error(&err))
    }

    fn write_state(&self) -> SheetGatewayResult<RwLockWriteGuard<'_, InMemorySheetState>> {
        self.state.write().map_err(|err| lock_error(&err))
    }
}

fn lock_error(err: &impl std::fmt::Display) -> SheetGatewayError {
    SheetGatewayError::transport(std::io::Error::other(err.to_string()))
}

fn missing_sheet(sheet: &SheetName) -> SheetGatewayError {
    SheetGatewayError::rejected(format!("sheet not found: {sheet}"))
}

#[async_trait]
impl SheetGateway for InMemorySheetGateway {
    async fn read_rows(&self, sheet: &SheetName) -> SheetGatewayResult<Vec<RawRow>> {
        let mut state = self.write_state()?;
        state.journal.push(GatewayCall::Read {
            sheet: sheet.clone(),
        });
        if let Some(message) = state.read_faults.get(sheet) {
            return Err(SheetGatewayError::rejected(message.clone()));
        }
        state
            .sheets
            .get(sheet)
            .cloned()
            .ok_or_else(|| missing_sheet(sheet))
    }

    async fn insert_row(&self, sheet: &SheetName, row: &RowData) -> SheetGatewayResult<()> {
        let mut state = self.write_state()?;
        state.journal.push(GatewayCall::Insert {
            sheet: sheet.clone(),
            row: row.clone(),
        });
        if let Some(message) = state.insert_faults.get(sheet) {
            return Err(SheetGatewayError::rejected(message.clone()));
        }
        let rows = state
            .sheets
            .get_mut(sheet)
            .ok_or_else(|| missing_sheet(sheet))?;
        rows.push(row.to_raw_row());
        Ok(())
    }

    async fn update_cell(
        &self,
        sheet: &SheetName,
        address: CellAddress,
        value: &str,
    ) -> SheetGatewayResult<()> {
        let mut state = self.write_state()?;
        state.journal.push(GatewayCall::Update {
            sheet: sheet.clone(),
            address,
            value: value.to_owned(),
        });
        if let Some(message) = state.cell_faults.get(&(sheet.clone(), address)) {
            return Err(SheetGatewayError::rejected(message.clone()));
        }
        let rows = state
            .sheets
            .get_mut(sheet)
            .ok_or_else(|| missing_sheet(sheet))?;
        let index = address.row.as_index();
        if rows.len() <= index {
            rows.resize(index.saturating_add(1), RawRow::default());
        }
        if let Some(row) = rows.get_mut(index) {
            row.set(address.column, CellValue::text(value));
        }
        Ok(())
    }

    async fn upload_file(
        &self,
        file: &FileUpload,
        folder: &FolderId,
    ) -> SheetGatewayResult<UploadedFileUrl> {
        let mut state = self.write_state()?;
        state.journal.push(GatewayCall::Upload {
            file_name: file.file_name().to_owned(),
        });
        if let Some(message) = state.upload_fault.clone() {
            return Err(SheetGatewayError::rejected(message));
        }
        state.uploads.push(file.file_name().to_owned());
        let url = format!(
            "memory://{folder}/{}/{}",
            state.uploads.len(),
            file.file_name()
        );
        UploadedFileUrl::new(url).map_err(SheetGatewayError::transport)
    }
}
