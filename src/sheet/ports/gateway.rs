//! Gateway port for reading and mutating remote sheets.

use crate::sheet::domain::{
    CellAddress, FileUpload, FolderId, RawRow, RowData, SheetName, UploadedFileUrl,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for gateway operations.
pub type SheetGatewayResult<T> = Result<T, SheetGatewayError>;

/// Remote spreadsheet contract.
///
/// Every method is a suspension point. Implementations must not retry on
/// their own; retries are driven by the transition executor so that the
/// caller sees one outcome per logical operation.
#[async_trait]
pub trait SheetGateway: Send + Sync {
    /// Reads every row of a sheet, header and meta rows included.
    ///
    /// # Errors
    ///
    /// Returns [`SheetGatewayError`] when the sheet cannot be read.
    async fn read_rows(&self, sheet: &SheetName) -> SheetGatewayResult<Vec<RawRow>>;

    /// Appends one row to a sheet.
    ///
    /// # Errors
    ///
    /// Returns [`SheetGatewayError`] when the insert is not acknowledged.
    async fn insert_row(&self, sheet: &SheetName, row: &RowData) -> SheetGatewayResult<()>;

    /// Overwrites a single cell.
    ///
    /// # Errors
    ///
    /// Returns [`SheetGatewayError`] when the write is not acknowledged.
    async fn update_cell(
        &self,
        sheet: &SheetName,
        address: CellAddress,
        value: &str,
    ) -> SheetGatewayResult<()>;

    /// Stores a file out-of-band and returns its durable reference.
    ///
    /// # Errors
    ///
    /// Returns [`SheetGatewayError`] when the upload fails or the endpoint
    /// does not return a reference.
    async fn upload_file(
        &self,
        file: &FileUpload,
        folder: &FolderId,
    ) -> SheetGatewayResult<UploadedFileUrl>;
}

/// Errors returned by gateway implementations.
#[derive(Debug, Clone, Error)]
pub enum SheetGatewayError {
    /// The request could not be delivered.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),

    /// The endpoint answered with a non-success HTTP status.
    #[error("unexpected HTTP status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Truncated response body.
        body: String,
    },

    /// The endpoint answered but reported the operation as failed.
    #[error("{message}")]
    Rejected {
        /// Message reported by the endpoint.
        message: String,
    },

    /// The endpoint did not answer within the configured bound.
    #[error("{operation} timed out after {timeout_ms}ms")]
    Timeout {
        /// Operation that timed out.
        operation: String,
        /// Configured bound in milliseconds.
        timeout_ms: u64,
    },

    /// The endpoint answered with a payload that could not be decoded.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl SheetGatewayError {
    /// Wraps a transport error.
    #[must_use]
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Creates a rejection carrying the endpoint's message.
    #[must_use]
    pub fn rejected(message: impl Into<String>) -> Self {
        Self::Rejected {
            message: message.into(),
        }
    }

    /// Returns `true` for timeouts.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}
