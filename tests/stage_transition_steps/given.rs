//! Given steps for stage transition BDD scenarios.

use super::world::{StageTransitionWorld, run_async, seed};
use eyre::WrapErr;
use repair_desk::sheet::domain::{CellAddress, RowPosition};
use repair_desk::workflow::domain::{
    FieldName, REPAIR_SYSTEM, RepairStage, SheetKind, TaskRecord, layouts::repair,
};
use rstest_bdd_macros::given;

fn seed_repair(world: &StageTransitionWorld, values: Vec<(FieldName, String)>) {
    seed(&world.gateway, &world.settings, SheetKind::RepairSystem, &[values]);
}

#[given(r#"a repair "{task_no}" awaiting dispatch"#)]
fn repair_awaiting_dispatch(
    world: &mut StageTransitionWorld,
    task_no: String,
) -> Result<(), eyre::Report> {
    seed_repair(
        world,
        vec![
            (repair::TASK_NO, task_no.clone()),
            (repair::MACHINE_NAME, "Lathe".to_owned()),
            (repair::DISPATCH_PLANNED, "13/03/2026".to_owned()),
        ],
    );
    let board = run_async(world.desk.board(RepairStage::Dispatch))
        .wrap_err("read dispatch board in scenario setup")?;
    let subject = board
        .pending
        .into_iter()
        .find(|record| record.get(repair::TASK_NO) == task_no)
        .ok_or_else(|| eyre::eyre!("repair {task_no} is not pending dispatch"))?;
    world.subject = Some(subject);
    world
        .gateway
        .clear_journal()
        .wrap_err("clear journal in scenario setup")?;
    Ok(())
}

#[given(r#"a repair "{task_no}" not yet planned for dispatch"#)]
fn repair_not_planned(world: &mut StageTransitionWorld, task_no: String) {
    seed_repair(world, vec![(repair::TASK_NO, task_no.clone())]);
    let position = RowPosition::of_data_row(REPAIR_SYSTEM.header_rows(), 0);
    world.subject = Some(TaskRecord::new(position).with_field(repair::TASK_NO, task_no));
}

#[given(r#"the vendor cell rejects writes with "{message}""#)]
fn vendor_cell_rejects(
    world: &mut StageTransitionWorld,
    message: String,
) -> Result<(), eyre::Report> {
    let subject = world
        .subject
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing subject repair in scenario world"))?;
    let column = REPAIR_SYSTEM
        .column_of(repair::VENDOR_NAME)
        .wrap_err("resolve vendor column")?;
    world
        .gateway
        .fail_cell(
            world.settings.sheet(SheetKind::RepairSystem),
            CellAddress::new(subject.position(), column),
            message,
        )
        .wrap_err("inject vendor cell fault")?;
    Ok(())
}
