//! A repair walked through every stage against the in-memory gateway.

use super::helpers::{desk, gateway, image, seed_records, settings};
use chrono::{NaiveDate, NaiveDateTime};
use repair_desk::sheet::adapters::memory::InMemorySheetGateway;
use repair_desk::workflow::domain::{
    DispatchForm, PaymentForm, PaymentLedger, Progress, RepairStage, SheetKind, StageStatus,
    StorageForm, TaskRecord, VerificationForm, derive_progress, layouts::repair,
};
use repair_desk::workflow::services::DeskSettings;
use rstest::rstest;
use std::sync::Arc;

fn only(records: Vec<TaskRecord>) -> TaskRecord {
    let mut iter = records.into_iter();
    let first = iter.next().expect("one record");
    assert!(iter.next().is_none(), "expected exactly one record");
    first
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn repair_moves_from_dispatch_to_payment(
    settings: Arc<DeskSettings>,
    #[from(gateway)] workbook: Arc<InMemorySheetGateway>,
) {
    seed_records(
        &workbook,
        settings.sheet(SheetKind::RepairSystem),
        SheetKind::RepairSystem,
        &[&[
            (repair::TASK_NO, "TN-021"),
            (repair::SERIAL_NO, "SN-4"),
            (repair::MACHINE_NAME, "Lathe"),
            (repair::GIVEN_BY, "ravi"),
            (repair::DEPARTMENT, "Maintenance"),
            (repair::DISPATCH_PLANNED, "10/03/2026"),
            (repair::VERIFICATION_PLANNED, "12/03/2026"),
            (repair::STORAGE_PLANNED, "13/03/2026"),
            (repair::PAYMENT_PLANNED, "14/03/2026"),
        ]],
    );
    let desk = desk(&workbook, &settings);

    let dispatch = desk
        .board(RepairStage::Dispatch)
        .await
        .expect("dispatch board");
    let pending = only(dispatch.pending);
    assert_eq!(
        derive_progress::<RepairStage>(&pending),
        Progress::At {
            stage: RepairStage::Dispatch,
            status: StageStatus::Pending,
        }
    );
    let dispatched = desk
        .complete(
            &pending,
            &DispatchForm::new("Acme Motors", "Advance").with_advance_amount("1500"),
        )
        .await
        .expect("dispatch should apply");
    let dispatch_board = dispatched.board.expect("dispatch board refreshed");
    assert!(dispatch_board.pending.is_empty());
    let stamp = only(dispatch_board.history)
        .get(repair::DISPATCH_ACTUAL)
        .to_owned();
    assert!(NaiveDateTime::parse_from_str(&stamp, "%d/%m/%Y, %H:%M:%S").is_ok());

    let verification = desk
        .board(RepairStage::Verification)
        .await
        .expect("verification board");
    let verified = desk
        .complete(
            &only(verification.pending),
            &VerificationForm::new("B-88", "5000").with_bill_image(image("bill.png")),
        )
        .await
        .expect("verification should apply");
    let checked = only(verified.board.expect("verification board refreshed").history);
    assert_eq!(checked.get(repair::AMOUNT_DUE), "3500");
    assert!(checked.get(repair::BILL_IMAGE).ends_with("/bill.png"));
    assert!(NaiveDate::parse_from_str(checked.get(repair::VERIFICATION_ACTUAL), "%d/%m/%Y").is_ok());

    let storage = desk.board(RepairStage::Storage).await.expect("storage board");
    desk.complete(&only(storage.pending), &StorageForm::new("1", true))
        .await
        .expect("storage should apply");

    let payment = desk.board(RepairStage::Payment).await.expect("payment board");
    let awaiting = only(payment.pending);
    let mut ledger = PaymentLedger::default();
    let paid = desk
        .submit_payment(&awaiting, &PaymentForm::prefilled(&awaiting), &mut ledger)
        .await
        .expect("payment should apply");

    assert_eq!(paid.record.get(repair::AMOUNT_PAID), "3500");
    assert_eq!(paid.record.get(repair::FINAL_PAYMENT_TYPE), "Advance");
    assert_eq!(ledger.payment_numbers().collect::<Vec<_>>(), vec!["PN-001"]);

    let finished = only(
        desk.board(RepairStage::Payment)
            .await
            .expect("payment board")
            .history,
    );
    assert_eq!(derive_progress::<RepairStage>(&finished), Progress::Finished);
    let dashboard = desk.dashboard().await.expect("dashboard");
    assert_eq!(dashboard.completed, 1);
    assert_eq!(dashboard.pending, 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn blank_and_untriggered_rows_stay_off_the_boards(
    settings: Arc<DeskSettings>,
    #[from(gateway)] workbook: Arc<InMemorySheetGateway>,
) {
    seed_records(
        &workbook,
        settings.sheet(SheetKind::RepairSystem),
        SheetKind::RepairSystem,
        &[
            &[(repair::TASK_NO, "TN-001"), (repair::DISPATCH_PLANNED, "01/03/2026")],
            &[],
            &[(repair::TASK_NO, "TN-003")],
            &[(repair::TASK_NO, "TN-004"), (repair::DISPATCH_PLANNED, "02/03/2026")],
        ],
    );

    let board = desk(&workbook, &settings)
        .board(RepairStage::Dispatch)
        .await
        .expect("dispatch board");

    let positions: Vec<usize> = board
        .pending
        .iter()
        .map(|record| record.position().value())
        .collect();
    assert_eq!(positions, vec![7, 10]);
    assert!(board.history.is_empty());
}
