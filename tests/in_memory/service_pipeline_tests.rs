//! A service ticket from indent to tally against the in-memory gateway.

use super::helpers::{desk, gateway, image, settings};
use chrono::NaiveDateTime;
use repair_desk::sheet::adapters::memory::InMemorySheetGateway;
use repair_desk::sheet::domain::CellAddress;
use repair_desk::sheet::ports::SheetGateway;
use repair_desk::workflow::domain::{
    ApprovalDecision, ApprovalForm, ExternalPartsForm, FieldName, Progress, SERVICE,
    ServiceIndentForm, ServiceStage, SheetKind, StageStatus, TallyForm, TaskRecord,
    derive_progress, layouts::service,
};
use repair_desk::workflow::services::DeskSettings;
use rstest::rstest;
use std::sync::Arc;

/// Fills a planned column the way the sheet's own formulas would.
async fn plan(
    workbook: &InMemorySheetGateway,
    settings: &DeskSettings,
    record: &TaskRecord,
    field: FieldName,
) {
    let column = SERVICE.column_of(field).expect("service column");
    workbook
        .update_cell(
            settings.sheet(SheetKind::Service),
            CellAddress::new(record.position(), column),
            "14/03/2026",
        )
        .await
        .expect("planned date written");
}

fn is_compact_stamp(value: &str) -> bool {
    NaiveDateTime::parse_from_str(value, "%d/%m/%Y %H:%M:%S").is_ok()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn service_ticket_moves_from_indent_to_tally(
    settings: Arc<DeskSettings>,
    #[from(gateway)] workbook: Arc<InMemorySheetGateway>,
) {
    let desk = desk(&workbook, &settings);
    let indent = ServiceIndentForm::new("meena", "Press", "Volt Works", "Rewind motor")
        .with_amounts("12000", "240")
        .with_bill_copy(image("bill.png"));
    desk.submit_indent(&indent).await.expect("indent should land");

    let parts = desk
        .board(ServiceStage::ExternalParts)
        .await
        .expect("parts board");
    let ticket = parts.pending.first().cloned().expect("new ticket is pending");
    assert_eq!(ticket.position().value(), 7);
    assert!(ticket.get(service::BILL_COPY_IMAGE).ends_with("/bill.png"));
    assert_eq!(
        derive_progress::<ServiceStage>(&ticket),
        Progress::At {
            stage: ServiceStage::ExternalParts,
            status: StageStatus::Pending,
        }
    );

    let sourced = desk
        .complete(&ticket, &ExternalPartsForm::new("Armature", "4200"))
        .await
        .expect("parts should apply");
    assert!(is_compact_stamp(sourced.applied.record.get(service::PARTS_ACTUAL)));

    let approval = desk
        .board(ServiceStage::PaymentApproval)
        .await
        .expect("approval board");
    assert!(approval.is_empty());
    plan(&workbook, &settings, &ticket, service::APPROVAL_PLANNED).await;
    let approval = desk
        .board(ServiceStage::PaymentApproval)
        .await
        .expect("approval board");
    let awaiting = approval.pending.first().cloned().expect("ticket awaits approval");
    let approved = desk
        .complete(&awaiting, &ApprovalForm::new(ApprovalDecision::Approved))
        .await
        .expect("approval should apply");
    assert_eq!(approved.applied.record.get(service::APPROVAL_STATUS), "Approved");

    plan(&workbook, &settings, &ticket, service::TALLY_PLANNED).await;
    let tally = desk
        .board(ServiceStage::TallyEntry)
        .await
        .expect("tally board");
    let booked = desk
        .complete(
            tally.pending.first().expect("ticket awaits tally"),
            &TallyForm::new("booked"),
        )
        .await
        .expect("tally should apply");

    let finished = booked
        .board
        .as_ref()
        .and_then(|board| board.history.first()).expect("ticket in tally history");
    assert!(is_compact_stamp(finished.get(service::TALLY_ACTUAL)));
    assert_eq!(derive_progress::<ServiceStage>(finished), Progress::Finished);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn service_boards_are_shared_by_every_operator(
    settings: Arc<DeskSettings>,
    #[from(gateway)] workbook: Arc<InMemorySheetGateway>,
) {
    let desk = desk(&workbook, &settings);
    desk.submit_indent(&ServiceIndentForm::new("meena", "Press", "Volt Works", "Rewind"))
        .await
        .expect("indent should land");
    let operator = repair_desk::access::domain::Identity::new(
        "ravi",
        "user",
        [repair_desk::access::domain::Page::ExternalParts],
    )
    .expect("valid identity");

    let board = desk
        .visible_board(&operator, ServiceStage::ExternalParts)
        .await
        .expect("parts board");

    assert_eq!(board.pending.len(), 1);
}
