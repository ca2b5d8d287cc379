//! Shared fixtures for workflow tests.

use crate::config::ConsoleConfig;
use crate::sheet::adapters::memory::InMemorySheetGateway;
use crate::sheet::domain::{FileUpload, RawRow, RowPosition, SheetName};
use crate::workflow::domain::{
    FieldName, SheetKind, SheetSchema, TaskRecord, row_from_fields, schema_for,
};
use crate::workflow::services::DeskSettings;
use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;
use std::sync::Arc;

/// Clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

/// 14 March 2026, 04:30 UTC; 10:00 at the default +05:30 offset.
pub fn fixed_clock() -> FixedClock {
    FixedClock(
        Utc.with_ymd_and_hms(2026, 3, 14, 4, 30, 0)
            .single()
            .expect("valid instant"),
    )
}

pub fn settings() -> Arc<DeskSettings> {
    Arc::new(DeskSettings::from_config(&ConsoleConfig::default()).expect("default settings"))
}

pub fn sheet_name(kind: SheetKind) -> SheetName {
    settings().sheet(kind).clone()
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

pub fn data_row(schema: &SheetSchema, values: &[(FieldName, &str)]) -> RawRow {
    let owned: Vec<(FieldName, String)> = values
        .iter()
        .map(|(field, value)| (*field, (*value).to_owned()))
        .collect();
    row_from_fields(schema, &owned)
        .expect("fields belong to the schema")
        .to_raw_row()
}

/// Seeds every sheet with its header block followed by `rows` for `kind`.
pub fn seeded_gateway(kind: SheetKind, rows: Vec<RawRow>) -> InMemorySheetGateway {
    let gateway = InMemorySheetGateway::new();
    for each in SheetKind::ALL {
        gateway
            .seed_sheet(&sheet_name(each), header_block(schema_for(each)))
            .expect("seeding should succeed");
    }
    let mut sheet = header_block(schema_for(kind));
    sheet.extend(rows);
    gateway
        .seed_sheet(&sheet_name(kind), sheet)
        .expect("seeding should succeed");
    gateway
}

/// A record at data row `index` of `schema` holding `values`.
pub fn record(schema: &SheetSchema, index: usize, values: &[(FieldName, &str)]) -> TaskRecord {
    values.iter().fold(
        TaskRecord::new(RowPosition::of_data_row(schema.header_rows(), index)),
        |built, (field, value)| built.with_field(*field, *value),
    )
}

pub fn image(name: &str) -> FileUpload {
    FileUpload::new(name, "image/png", vec![0x89, 0x50, 0x4e, 0x47]).expect("valid upload")
}
