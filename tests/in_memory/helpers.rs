//! Shared fixtures for in-memory gateway integration tests.

use mockable::DefaultClock;
use repair_desk::config::ConsoleConfig;
use repair_desk::sheet::adapters::memory::InMemorySheetGateway;
use repair_desk::sheet::domain::{FileUpload, RawRow, SheetName};
use repair_desk::workflow::domain::{
    FieldName, SheetKind, SheetSchema, row_from_fields, schema_for,
};
use repair_desk::workflow::services::{DeskSettings, StageDesk};
use rstest::fixture;
use std::sync::Arc;

/// Desk type used by the integration tests.
pub type TestDesk = StageDesk<InMemorySheetGateway, DefaultClock>;

/// Settings resolved from the default configuration.
#[fixture]
pub fn settings() -> Arc<DeskSettings> {
    Arc::new(DeskSettings::from_config(&ConsoleConfig::default()).expect("default settings"))
}

/// An in-memory workbook with every sheet holding only its header block.
#[fixture]
pub fn gateway(settings: Arc<DeskSettings>) -> Arc<InMemorySheetGateway> {
    let gateway = InMemorySheetGateway::new();
    for kind in SheetKind::ALL {
        gateway
            .seed_sheet(settings.sheet(kind), header_block(schema_for(kind)))
            .expect("seeding should succeed");
    }
    Arc::new(gateway)
}

/// Builds a desk over `gateway` with the system clock.
pub fn desk(gateway: &Arc<InMemorySheetGateway>, settings: &Arc<DeskSettings>) -> TestDesk {
    StageDesk::new(
        Arc::clone(gateway),
        Arc::new(DefaultClock),
        Arc::clone(settings),
    )
    .expect("shipped schemas are valid")
}

/// Meta rows followed by a header row as wide as the schema requires.
pub fn header_block(schema: &SheetSchema) -> Vec<RawRow> {
    let mut rows: Vec<RawRow> = (1..schema.header_rows())
        .map(|_| RawRow::from_texts(["meta"]))
        .collect();
    rows.push(RawRow::from_texts(
        (0..schema.required_width()).map(|column| format!("col {column}")),
    ));
    rows
}

/// Replaces the data rows of `kind` with one row per entry of `records`.
pub fn seed_records(
    gateway: &InMemorySheetGateway,
    sheet: &SheetName,
    kind: SheetKind,
    records: &[&[(FieldName, &str)]],
) {
    let schema = schema_for(kind);
    let mut rows = header_block(schema);
    for values in records {
        let owned: Vec<(FieldName, String)> = values
            .iter()
            .map(|(field, value)| (*field, (*value).to_owned()))
            .collect();
        rows.push(
            row_from_fields(schema, &owned)
                .expect("fields belong to the schema")
                .to_raw_row(),
        );
    }
    gateway
        .seed_sheet(sheet, rows)
        .expect("seeding should succeed");
}

/// A small PNG-typed upload.
pub fn image(name: &str) -> FileUpload {
    FileUpload::new(name, "image/png", vec![0x89, 0x50, 0x4e, 0x47]).expect("valid upload")
}
