//! Then steps for stage transition BDD scenarios.

use super::world::{StageTransitionWorld, run_async};
use eyre::WrapErr;
use repair_desk::workflow::{
    domain::{RepairStage, layouts::repair},
    services::TransitionError,
};
use rstest_bdd_macros::then;

#[then(r#"the repair "{task_no}" is in the dispatch history"#)]
fn repair_in_history(world: &StageTransitionWorld, task_no: String) -> Result<(), eyre::Report> {
    let board = run_async(world.desk.board(RepairStage::Dispatch))
        .wrap_err("read dispatch board")?;
    if !board.pending.is_empty() {
        return Err(eyre::eyre!("expected no pending repairs, found {}", board.pending.len()));
    }
    if !board
        .history
        .iter()
        .any(|record| record.get(repair::TASK_NO) == task_no)
    {
        return Err(eyre::eyre!("repair {task_no} is not in the dispatch history"));
    }
    Ok(())
}

#[then("the dispatch stamp is recorded")]
fn dispatch_stamp_recorded(world: &StageTransitionWorld) -> Result<(), eyre::Report> {
    let completion = match world.last_result.as_ref() {
        Some(Ok(completion)) => completion,
        other => return Err(eyre::eyre!("expected an applied transition, got {other:?}")),
    };
    let stamp = completion.applied.record.get(repair::DISPATCH_ACTUAL);
    chrono::NaiveDateTime::parse_from_str(stamp, "%d/%m/%Y, %H:%M:%S")
        .wrap_err_with(|| format!("dispatch stamp {stamp:?} is not a date and time"))?;
    Ok(())
}

#[then("the transition reports {count:usize} failed write")]
fn transition_reports_failures(
    world: &StageTransitionWorld,
    count: usize,
) -> Result<(), eyre::Report> {
    let report = world
        .last_result
        .as_ref()
        .and_then(|result| result.as_ref().err())
        .and_then(TransitionError::report)
        .ok_or_else(|| eyre::eyre!("expected a partial failure report"))?;
    let failed = report.failed().len();
    if failed != count {
        return Err(eyre::eyre!("expected {count} failed writes, found {failed}"));
    }
    Ok(())
}

#[then(r#"the failure mentions "{message}""#)]
fn failure_mentions(world: &StageTransitionWorld, message: String) -> Result<(), eyre::Report> {
    let err = world
        .last_result
        .as_ref()
        .and_then(|result| result.as_ref().err())
        .ok_or_else(|| eyre::eyre!("expected a failed transition"))?;
    if !err.to_string().contains(&message) {
        return Err(eyre::eyre!("expected {message:?} in {err}"));
    }
    Ok(())
}

#[then("only the failed write was resent")]
fn only_failed_write_resent(world: &StageTransitionWorld) -> Result<(), eyre::Report> {
    let journal = world.gateway.journal().wrap_err("read journal")?;
    let updates = journal.iter().filter(|call| call.is_update()).count();
    if updates != 1 {
        return Err(eyre::eyre!("expected one resent write, found {updates}"));
    }
    Ok(())
}

#[then("the transition is refused as not reached")]
fn transition_refused(world: &StageTransitionWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing transition result"))?;
    if !matches!(result, Err(TransitionError::StageNotReached { .. })) {
        return Err(eyre::eyre!("expected StageNotReached, got {result:?}"));
    }
    Ok(())
}

#[then("no sheet call was made")]
fn no_sheet_call(world: &StageTransitionWorld) -> Result<(), eyre::Report> {
    let journal = world.gateway.journal().wrap_err("read journal")?;
    if !journal.is_empty() {
        return Err(eyre::eyre!("expected no gateway calls, found {journal:?}"));
    }
    Ok(())
}
