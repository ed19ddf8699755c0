//! Aggregate pipeline run status

use crate::core::{
    Condition, ConditionStatus, StepRunRecord, REASON_FAILED, REASON_RUNNING, REASON_SUCCEEDED,
};
use tracing::debug;

/// Reduce a snapshot to the status of the whole pipeline run
///
/// Any failed run makes the pipeline run fail. It succeeds once every step
/// has a succeeded run, and is unknown otherwise.
pub fn aggregate_condition(run_id: &str, state: &[StepRunRecord]) -> ConditionStatus {
    pipeline_condition(run_id, state).status
}

/// Like [`aggregate_condition`], with a reason and message attached
pub fn pipeline_condition(run_id: &str, state: &[StepRunRecord]) -> Condition {
    if let Some(failed) = state
        .iter()
        .find(|r| r.run_status() == Some(ConditionStatus::False))
    {
        debug!(pipeline_run = %run_id, run = %failed.run_name, "step run failed");
        return Condition::succeeded(ConditionStatus::False)
            .with_reason(REASON_FAILED)
            .with_message(format!(
                "Step run {} for step {} has failed",
                failed.run_name, failed.step.name
            ));
    }

    let succeeded = state
        .iter()
        .filter(|r| r.run_status() == Some(ConditionStatus::True))
        .count();

    if succeeded == state.len() {
        debug!(pipeline_run = %run_id, "all step runs succeeded");
        return Condition::succeeded(ConditionStatus::True)
            .with_reason(REASON_SUCCEEDED)
            .with_message("All steps have completed executing");
    }

    debug!(
        pipeline_run = %run_id,
        succeeded,
        total = state.len(),
        "pipeline run still has steps to finish"
    );
    Condition::succeeded(ConditionStatus::Unknown)
        .with_reason(REASON_RUNNING)
        .with_message(format!(
            "{} of {} steps have completed executing",
            succeeded,
            state.len()
        ))
}
