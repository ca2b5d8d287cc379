//! Error types for sheet domain values.

use thiserror::Error;

/// Errors returned while constructing sheet domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SheetDomainError {
    /// The sheet name is empty after trimming.
    #[error("sheet name must not be empty")]
    EmptySheetName,

    /// Row positions are 1-based.
    #[error("invalid row position {0}, expected a positive integer")]
    InvalidRowPosition(usize),

    /// The uploaded file has no name.
    #[error("file name must not be empty")]
    EmptyFileName,

    /// The upload endpoint returned an empty reference.
    #[error("uploaded file URL must not be empty")]
    EmptyUploadUrl,
}
