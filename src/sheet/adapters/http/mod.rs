//! HTTP gateway for the deployed spreadsheet script.
//!
//! Reads are `GET {script_url}?sheet=<name>`. Mutations are form-encoded
//! `POST`s to the same URL distinguished by an `action` field. Every response
//! is a JSON envelope with a `success` flag.

mod wire;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::{ConfigError, EndpointConfig};
use crate::sheet::{
    domain::{
        CellAddress, ColumnBase, FileUpload, FolderId, RawRow, RowData, SheetName, UploadedFileUrl,
    },
    ports::{SheetGateway, SheetGatewayError, SheetGatewayResult},
};
use wire::{
    ACTION_INSERT, ACTION_UPDATE_CELL, ACTION_UPLOAD_FILE, InsertForm, MutationResponse,
    ReadQuery, ReadResponse, UpdateCellForm, UploadFileForm, UploadResponse, failure_message,
};

const MAX_ERROR_BODY_CHARS: usize = 512;

/// Gateway backed by the deployed script endpoint.
#[derive(Clone)]
pub struct AppsScriptGateway {
    client: Client,
    script_url: Url,
    timeout_ms: u64,
    column_base: ColumnBase,
}

impl std::fmt::Debug for AppsScriptGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppsScriptGateway")
            .field("script_url", &self.script_url.as_str())
            .field("timeout_ms", &self.timeout_ms)
            .field("column_base", &self.column_base)
            .finish_non_exhaustive()
    }
}

impl AppsScriptGateway {
    /// Builds a gateway from the endpoint section of the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when no script URL is set and
    /// [`ConfigError::InvalidValue`] when the URL does not parse or the HTTP
    /// client cannot be constructed.
    pub fn from_config(config: &EndpointConfig) -> Result<Self, ConfigError> {
        if !config.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "endpoint".to_owned(),
            });
        }
        let script_url = Url::parse(config.script_url.trim()).map_err(|err| {
            ConfigError::invalid("endpoint.script_url", format!("invalid URL: {err}"))
        })?;
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(format!("repair-desk/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|err| {
                ConfigError::invalid("endpoint", format!("failed to create HTTP client: {err}"))
            })?;

        debug!(
            script_url = %script_url,
            timeout_ms = config.timeout_ms,
            column_base = ?config.column_base,
            "created sheet gateway"
        );

        Ok(Self {
            client,
            script_url,
            timeout_ms: config.timeout_ms,
            column_base: config.column_base,
        })
    }

    async fn send<T: DeserializeOwned>(
        &self,
        operation: &str,
        request: RequestBuilder,
    ) -> SheetGatewayResult<T> {
        let response = request
            .send()
            .await
            .map_err(|err| self.map_error(operation, err))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(operation, status = status.as_u16(), "sheet endpoint returned an error status");
            return Err(SheetGatewayError::Status {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }
        response.json::<T>().await.map_err(|err| {
            if err.is_decode() {
                SheetGatewayError::MalformedResponse(err.to_string())
            } else {
                self.map_error(operation, err)
            }
        })
    }

    fn map_error(&self, operation: &str, err: reqwest::Error) -> SheetGatewayError {
        if err.is_timeout() {
            SheetGatewayError::Timeout {
                operation: operation.to_owned(),
                timeout_ms: self.timeout_ms,
            }
        } else {
            SheetGatewayError::transport(err)
        }
    }

    async fn mutate<F: serde::Serialize + Sync>(
        &self,
        operation: &str,
        form: &F,
    ) -> SheetGatewayResult<()> {
        let request = self.client.post(self.script_url.clone()).form(form);
        let response: MutationResponse = self.send(operation, request).await?;
        if response.success {
            Ok(())
        } else {
            Err(SheetGatewayError::rejected(failure_message(
                response.error,
                &format!("{operation} was not acknowledged"),
            )))
        }
    }
}

#[async_trait]
impl SheetGateway for AppsScriptGateway {
    async fn read_rows(&self, sheet: &SheetName) -> SheetGatewayResult<Vec<RawRow>> {
        debug!(sheet = %sheet, "reading sheet");
        let request = self
            .client
            .get(self.script_url.clone())
            .query(&ReadQuery {
                sheet: sheet.as_str(),
            });
        let response: ReadResponse = self.send("read", request).await?;
        if !response.success {
            return Err(SheetGatewayError::rejected(failure_message(
                response.error,
                &format!("failed to read sheet {sheet}"),
            )));
        }
        debug!(sheet = %sheet, rows = response.data.len(), "sheet read");
        Ok(response.data)
    }

    async fn insert_row(&self, sheet: &SheetName, row: &RowData) -> SheetGatewayResult<()> {
        debug!(sheet = %sheet, width = row.len(), "inserting row");
        let row_data = serde_json::to_string(row.values())
            .map_err(SheetGatewayError::transport)?;
        let form = InsertForm {
            action: ACTION_INSERT,
            sheet_name: sheet.as_str(),
            row_data,
        };
        self.mutate("insert", &form).await
    }

    async fn update_cell(
        &self,
        sheet: &SheetName,
        address: CellAddress,
        value: &str,
    ) -> SheetGatewayResult<()> {
        debug!(sheet = %sheet, cell = %address, "updating cell");
        let form = UpdateCellForm {
            action: ACTION_UPDATE_CELL,
            sheet_name: sheet.as_str(),
            row_index: address.row.value(),
            column_index: address.column.in_base(self.column_base),
            value,
        };
        self.mutate("updateCell", &form).await
    }

    async fn upload_file(
        &self,
        file: &FileUpload,
        folder: &FolderId,
    ) -> SheetGatewayResult<UploadedFileUrl> {
        debug!(file_name = file.file_name(), size = file.bytes().len(), "uploading file");
        let form = UploadFileForm {
            action: ACTION_UPLOAD_FILE,
            base64_data: file.base64_data(),
            file_name: file.file_name(),
            mime_type: file.mime_type(),
            folder_id: folder.as_str(),
        };
        let request = self.client.post(self.script_url.clone()).form(&form);
        let response: UploadResponse = self.send("uploadFile", request).await?;
        if !response.success {
            return Err(SheetGatewayError::rejected(failure_message(
                response.error,
                "file upload failed",
            )));
        }
        let url = response
            .file_url
            .ok_or_else(|| SheetGatewayError::rejected("upload succeeded without a file URL"))?;
        UploadedFileUrl::new(url)
            .map_err(|_| SheetGatewayError::rejected("upload succeeded without a file URL"))
    }
}
