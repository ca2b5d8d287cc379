//! Fetching and classifying sheet contents.

use super::settings::DeskSettings;
use crate::sheet::ports::{SheetGateway, SheetGatewayError};
use crate::workflow::domain::{
    PipelineStage, RowMapper, SchemaError, SheetKind, SheetSchema, StagePartition, TaskRecord,
    schema_for,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors raised while fetching a board.
#[derive(Debug, Clone, Error)]
pub enum BoardError {
    /// The sheet could not be read.
    #[error(transparent)]
    Gateway(#[from] SheetGatewayError),
    /// The sheet does not match its schema.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Result type for reads.
pub type BoardResult<T> = Result<T, BoardError>;

/// Reads sheets and maps them to records.
///
/// Every fetch rebuilds the records from scratch.
#[derive(Clone)]
pub struct SheetReader<G>
where
    G: SheetGateway,
{
    gateway: Arc<G>,
    settings: Arc<DeskSettings>,
}

impl<G> SheetReader<G>
where
    G: SheetGateway,
{
    /// Creates a reader after validating every shipped schema.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] when a schema has duplicate fields or columns.
    pub fn new(gateway: Arc<G>, settings: Arc<DeskSettings>) -> Result<Self, SchemaError> {
        for kind in SheetKind::ALL {
            schema_for(kind).validate()?;
        }
        Ok(Self { gateway, settings })
    }

    /// Reads and maps every data row of `schema`'s sheet.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Gateway`] when the read fails and
    /// [`BoardError::Schema`] when the header row no longer fits the schema.
    pub async fn fetch(&self, schema: &SheetSchema) -> BoardResult<Vec<TaskRecord>> {
        let sheet = self.settings.sheet(schema.kind());
        let rows = self
            .settings
            .bounded("read", self.gateway.read_rows(sheet))
            .await?;
        schema.verify_layout(&rows)?;
        let records = RowMapper::new(schema).map(&rows);
        debug!(sheet = %sheet, records = records.len(), "sheet fetched");
        Ok(records)
    }

    /// Fetches the pipeline sheet and partitions it for `stage`.
    ///
    /// # Errors
    ///
    /// See [`Self::fetch`].
    pub async fn board<S: PipelineStage>(&self, stage: S) -> BoardResult<StagePartition> {
        let records = self.fetch(S::schema()).await?;
        Ok(stage.gate().partition(&records))
    }

    /// Reads every sheet once and checks its layout.
    ///
    /// # Errors
    ///
    /// Returns the first [`BoardError`] encountered.
    pub async fn verify_layouts(&self) -> BoardResult<()> {
        for kind in SheetKind::ALL {
            self.fetch(schema_for(kind)).await?;
        }
        Ok(())
    }
}
