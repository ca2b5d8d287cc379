//! Schema validation, layout checks and row mapping.

use super::support::{data_row, header_block};
use crate::sheet::domain::{CellValue, ColumnIndex, RawRow, RowPosition};
use crate::workflow::domain::{
    ColumnSpec, FieldName, PAYMENT_LEDGER, PipelineStage, REPAIR_SYSTEM, RepairStage, RowMapper,
    SERVICE, SchemaError, SheetKind, SheetSchema, StageStatus,
    layouts::{ledger, repair, service},
    row_from_fields,
};
use rstest::rstest;

const NAME: FieldName = FieldName::new("name");
const CODE: FieldName = FieldName::new("code");

#[rstest]
#[case::repair(&REPAIR_SYSTEM)]
#[case::service(&SERVICE)]
#[case::ledger(&PAYMENT_LEDGER)]
fn shipped_schemas_are_consistent(#[case] schema: &SheetSchema) {
    assert_eq!(schema.validate(), Ok(()));
}

#[rstest]
fn duplicate_field_is_rejected() {
    static COLUMNS: [ColumnSpec; 2] = [ColumnSpec::new(NAME, 0), ColumnSpec::new(NAME, 1)];
    let schema = SheetSchema::new(SheetKind::Service, 1, 1, &COLUMNS);

    assert_eq!(
        schema.validate(),
        Err(SchemaError::DuplicateField {
            sheet: SheetKind::Service,
            field: NAME,
        })
    );
}

#[rstest]
fn duplicate_column_is_rejected() {
    static COLUMNS: [ColumnSpec; 2] = [ColumnSpec::new(NAME, 3), ColumnSpec::new(CODE, 3)];
    let schema = SheetSchema::new(SheetKind::Service, 1, 1, &COLUMNS);

    assert_eq!(
        schema.validate(),
        Err(SchemaError::DuplicateColumn {
            sheet: SheetKind::Service,
            column: ColumnIndex::new(3),
        })
    );
}

#[rstest]
fn unbound_search_field_is_rejected() {
    static COLUMNS: [ColumnSpec; 1] = [ColumnSpec::new(NAME, 0)];
    let schema =
        SheetSchema::new(SheetKind::Service, 1, 1, &COLUMNS).with_search_fields(&[CODE]);

    assert_eq!(
        schema.validate(),
        Err(SchemaError::UnknownField {
            sheet: SheetKind::Service,
            field: CODE,
        })
    );
}

#[rstest]
fn layout_accepts_full_header() {
    assert_eq!(REPAIR_SYSTEM.verify_layout(&header_block(&REPAIR_SYSTEM)), Ok(()));
}

#[rstest]
fn narrow_header_fails_loudly() {
    let mut rows = header_block(&SERVICE);
    rows.pop();
    rows.push(RawRow::from_texts(["Timestamp", "Service No"]));

    assert_eq!(
        SERVICE.verify_layout(&rows),
        Err(SchemaError::LayoutMismatch {
            sheet: SheetKind::Service,
            version: 1,
            expected: SERVICE.required_width(),
            found: 2,
        })
    );
}

#[rstest]
fn short_read_reports_missing_header_rows() {
    let rows = vec![RawRow::from_texts(["meta"])];

    assert_eq!(
        PAYMENT_LEDGER.verify_layout(&rows),
        Err(SchemaError::MissingHeaderRows {
            sheet: SheetKind::PaymentLedger,
            expected: 5,
            found: 1,
        })
    );
}

#[rstest]
#[case::repair(&REPAIR_SYSTEM, 7)]
#[case::service(&SERVICE, 7)]
#[case::ledger(&PAYMENT_LEDGER, 6)]
fn first_data_row_position_follows_header_rows(
    #[case] schema: &SheetSchema,
    #[case] expected: usize,
) {
    let mut rows = header_block(schema);
    rows.push(RawRow::from_texts(["x"]));

    let records = RowMapper::new(schema).map(&rows);

    let positions: Vec<usize> = records.iter().map(|r| r.position().value()).collect();
    assert_eq!(positions, vec![expected]);
}

#[rstest]
fn missing_cells_map_to_empty_text() {
    let mut rows = header_block(&REPAIR_SYSTEM);
    rows.push(RawRow::from_texts(["01/03/2026", "TN-001", "SN-9"]));

    let records = RowMapper::new(&REPAIR_SYSTEM).map(&rows);
    let record = records.first().expect("one record");

    assert_eq!(record.get(repair::TASK_NO), "TN-001");
    assert_eq!(record.get(repair::AMOUNT_PAID), "");
    assert_eq!(record.get(repair::VENDOR_NAME), "");
    assert!(!record.has(repair::DISPATCH_PLANNED));
}

#[rstest]
fn mapper_reads_numeric_cells_as_text() {
    let mut rows = header_block(&SERVICE);
    rows.push(
        serde_json::from_str::<RawRow>(r#"["01/03/2026", "SV-004", null, "Lathe", true, 42]"#)
            .expect("valid row"),
    );

    let records = RowMapper::new(&SERVICE).map(&rows);
    let record = records.first().expect("one record");

    assert_eq!(record.get(service::SERVICE_NO), "SV-004");
    assert_eq!(record.get(service::SERVICE_CHECKER), "");
    assert_eq!(record.get(service::MACHINE_NAME), "Lathe");
    assert_eq!(record.get(service::WORK_DESCRIPTION), "42");
}

#[rstest]
#[case::unchecked_box(CellValue::Bool(false))]
#[case::zero(CellValue::Number(0.into()))]
fn unset_gate_cells_keep_the_stage_pending(#[case] actual: CellValue) {
    let mut row = data_row(
        &REPAIR_SYSTEM,
        &[
            (repair::TASK_NO, "TN-007"),
            (repair::DISPATCH_PLANNED, "13/03/2026"),
        ],
    );
    let column = REPAIR_SYSTEM
        .column_of(repair::DISPATCH_ACTUAL)
        .expect("dispatch column");
    row.set(column, actual);
    let mut rows = header_block(&REPAIR_SYSTEM);
    rows.push(row);

    let records = RowMapper::new(&REPAIR_SYSTEM).map(&rows);
    let record = records.first().expect("one record");

    assert_eq!(record.get(repair::DISPATCH_ACTUAL), "");
    assert_eq!(
        RepairStage::Dispatch.gate().status_of(record),
        StageStatus::Pending
    );
}

#[rstest]
fn map_row_keeps_given_position() {
    let row = data_row(&PAYMENT_LEDGER, &[(ledger::PAYMENT_NO, "PN-004")]);
    let position = RowPosition::new(42).expect("valid row");

    let record = RowMapper::new(&PAYMENT_LEDGER).map_row(position, &row);

    assert_eq!(record.position(), position);
    assert_eq!(record.get(ledger::PAYMENT_NO), "PN-004");
}

#[rstest]
fn row_from_fields_pads_gaps() {
    let row = row_from_fields(
        &PAYMENT_LEDGER,
        &[
            (ledger::PAYMENT_NO, "PN-001".to_owned()),
            (ledger::MACHINE_NAME, "Lathe".to_owned()),
        ],
    )
    .expect("fields belong to the schema");

    assert_eq!(row.values(), ["", "PN-001", "", "", "Lathe"]);
}

#[rstest]
fn row_from_fields_rejects_foreign_field() {
    let result = row_from_fields(&PAYMENT_LEDGER, &[(repair::DOER_NAME, "x".to_owned())]);

    assert_eq!(
        result,
        Err(SchemaError::UnknownField {
            sheet: SheetKind::PaymentLedger,
            field: repair::DOER_NAME,
        })
    );
}
