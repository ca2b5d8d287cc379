//! Payment number allocation across several repairs.

use super::helpers::{desk, gateway, seed_records, settings};
use repair_desk::sheet::adapters::memory::InMemorySheetGateway;
use repair_desk::workflow::domain::{
    FieldName, PaymentForm, PaymentLedger, RepairStage, SheetKind, layouts::{ledger, repair},
};
use repair_desk::workflow::services::DeskSettings;
use rstest::rstest;
use std::sync::Arc;

fn awaiting(task_no: &'static str, owner: &'static str) -> [(FieldName, &'static str); 6] {
    [
        (repair::TASK_NO, task_no),
        (repair::GIVEN_BY, owner),
        (repair::PAYMENT_TYPE, "Credit"),
        (repair::TOTAL_BILL_AMOUNT, "2000"),
        (repair::AMOUNT_DUE, "2000"),
        (repair::PAYMENT_PLANNED, "13/03/2026"),
    ]
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn consecutive_payments_take_consecutive_numbers(
    settings: Arc<DeskSettings>,
    #[from(gateway)] workbook: Arc<InMemorySheetGateway>,
) {
    let first_repair = awaiting("TN-031", "ravi");
    let second_repair = awaiting("TN-032", "meena");
    seed_records(
        &workbook,
        settings.sheet(SheetKind::RepairSystem),
        SheetKind::RepairSystem,
        &[&first_repair, &second_repair],
    );
    seed_records(
        &workbook,
        settings.sheet(SheetKind::PaymentLedger),
        SheetKind::PaymentLedger,
        &[&[(ledger::PAYMENT_NO, "PN-002"), (ledger::REPAIR_TASK_NO, "TN-009")]],
    );
    let desk = desk(&workbook, &settings);
    let board = desk.board(RepairStage::Payment).await.expect("payment board");
    let mut ledger_view = PaymentLedger::default();

    for pending in &board.pending {
        desk.submit_payment(pending, &PaymentForm::prefilled(pending), &mut ledger_view)
            .await
            .expect("payment should apply");
    }

    let stored = desk.payment_ledger().await.expect("ledger readable");
    assert_eq!(
        stored.payment_numbers().collect::<Vec<_>>(),
        vec!["PN-002", "PN-003", "PN-004"]
    );
    assert_eq!(
        ledger_view.payment_numbers().collect::<Vec<_>>(),
        vec!["PN-002", "PN-003", "PN-004"]
    );
    let positions: Vec<usize> = stored
        .entries()
        .iter()
        .map(|entry| entry.position().value())
        .collect();
    assert_eq!(positions, vec![6, 7, 8]);
    assert_eq!(
        stored
            .entry_for_task("TN-032")
            .map(|entry| entry.get(ledger::PAYMENT_NO)),
        Some("PN-004")
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn paying_twice_keeps_one_ledger_row(
    settings: Arc<DeskSettings>,
    #[from(gateway)] workbook: Arc<InMemorySheetGateway>,
) {
    let only_repair = awaiting("TN-040", "ravi");
    seed_records(
        &workbook,
        settings.sheet(SheetKind::RepairSystem),
        SheetKind::RepairSystem,
        &[&only_repair],
    );
    let desk = desk(&workbook, &settings);
    let board = desk.board(RepairStage::Payment).await.expect("payment board");
    let pending = board.pending.first().expect("repair awaits payment");
    let form = PaymentForm::new("Cheque", "2000", "1900");
    let mut ledger_view = PaymentLedger::default();

    let first = desk
        .submit_payment(pending, &form, &mut ledger_view)
        .await
        .expect("first payment should apply");
    let second = desk
        .submit_payment(&first.record, &form, &mut ledger_view)
        .await
        .expect("second payment should apply");

    assert_eq!(second.record, first.record);
    let stored = desk.payment_ledger().await.expect("ledger readable");
    assert_eq!(stored.len(), 1);
    assert_eq!(
        stored
            .entry_for_task("TN-040")
            .map(|entry| entry.get(ledger::TO_BE_PAID_AMOUNT)),
        Some("1900")
    );
}
