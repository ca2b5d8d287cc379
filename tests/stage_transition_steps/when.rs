//! When steps for stage transition BDD scenarios.

use super::world::{StageTransitionWorld, run_async};
use eyre::WrapErr;
use repair_desk::workflow::{
    domain::{DispatchForm, RepairStage},
    services::TransitionError,
};
use rstest_bdd_macros::when;

#[when(r#"the repair is dispatched to "{vendor}""#)]
fn dispatch_repair(world: &mut StageTransitionWorld, vendor: String) -> Result<(), eyre::Report> {
    let subject = world
        .subject
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing subject repair in scenario world"))?;
    let form = DispatchForm::new(vendor, "Credit");
    let result = run_async(world.desk.complete(subject, &form));
    world.last_result = Some(result);
    Ok(())
}

#[when("the fault clears and the failed writes are retried")]
fn retry_failed_writes(world: &mut StageTransitionWorld) -> Result<(), eyre::Report> {
    let report = world
        .last_result
        .take()
        .ok_or_else(|| eyre::eyre!("missing transition result"))?
        .err()
        .and_then(TransitionError::into_report)
        .ok_or_else(|| eyre::eyre!("expected a partial failure to retry"))?;
    world.gateway.clear_faults().wrap_err("clear injected faults")?;
    world.gateway.clear_journal().wrap_err("clear journal before retry")?;
    let result = run_async(world.desk.retry(report, RepairStage::Dispatch));
    world.last_result = Some(result);
    Ok(())
}
