//! File attachments stored out-of-band by the upload endpoint.

use super::SheetDomainError;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A file selected by the operator, ready to be uploaded.
#[derive(Clone, PartialEq, Eq)]
pub struct FileUpload {
    file_name: String,
    mime_type: String,
    bytes: Vec<u8>,
}

impl FileUpload {
    /// Creates an upload payload.
    ///
    /// # Errors
    ///
    /// Returns [`SheetDomainError::EmptyFileName`] when the file name is
    /// empty after trimming.
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<Self, SheetDomainError> {
        let raw_name = file_name.into();
        let trimmed = raw_name.trim();
        if trimmed.is_empty() {
            return Err(SheetDomainError::EmptyFileName);
        }
        Ok(Self {
            file_name: trimmed.to_owned(),
            mime_type: mime_type.into(),
            bytes,
        })
    }

    /// Returns the file name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the MIME type.
    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Returns the raw file contents.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the contents encoded as standard base64.
    #[must_use]
    pub fn base64_data(&self) -> String {
        STANDARD.encode(&self.bytes)
    }
}

impl fmt::Debug for FileUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileUpload")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

/// Durable reference URL returned for an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UploadedFileUrl(String);

impl UploadedFileUrl {
    /// Creates a validated upload reference.
    ///
    /// # Errors
    ///
    /// Returns [`SheetDomainError::EmptyUploadUrl`] when the value is empty
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, SheetDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SheetDomainError::EmptyUploadUrl);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the URL as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UploadedFileUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
