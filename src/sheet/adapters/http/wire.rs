//! Request and response bodies of the script endpoint.

use serde::{Deserialize, Serialize};

use crate::sheet::domain::RawRow;

pub(super) const ACTION_INSERT: &str = "insert";
pub(super) const ACTION_UPDATE_CELL: &str = "updateCell";
pub(super) const ACTION_UPLOAD_FILE: &str = "uploadFile";

#[derive(Debug, Serialize)]
pub(super) struct ReadQuery<'a> {
    pub sheet: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct InsertForm<'a> {
    pub action: &'static str,
    pub sheet_name: &'a str,
    /// JSON array encoded as a string, as the script expects.
    pub row_data: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct UpdateCellForm<'a> {
    pub action: &'static str,
    pub sheet_name: &'a str,
    pub row_index: usize,
    pub column_index: usize,
    pub value: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct UploadFileForm<'a> {
    pub action: &'static str,
    pub base64_data: String,
    pub file_name: &'a str,
    pub mime_type: &'a str,
    pub folder_id: &'a str,
}

#[derive(Debug, Deserialize)]
pub(super) struct ReadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Vec<RawRow>,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct MutationResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct UploadResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Picks the endpoint's message, falling back to a generic one.
pub(super) fn failure_message(error: Option<String>, fallback: &str) -> String {
    error
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| fallback.to_owned())
}
