//! Next step selection - determines which step may start now

use crate::core::{ConditionStatus, StepRunRecord};
use tracing::debug;

/// Get the step that should be started next, if any
///
/// Steps run strictly one after another: a step becomes eligible only once
/// every step before it has succeeded, and nothing is eligible while a run is
/// in flight or after any run has failed.
pub fn next_step<'a>(run_id: &str, state: &'a [StepRunRecord]) -> Option<&'a StepRunRecord> {
    // Any run that has not succeeded returns early, so reaching a record
    // means every record before it has succeeded.
    for record in state {
        let Some(status) = record.run_status() else {
            debug!(pipeline_run = %run_id, step = %record.step.name, "step is ready to start");
            return Some(record);
        };

        match status {
            ConditionStatus::Unknown => {
                debug!(
                    pipeline_run = %run_id,
                    run = %record.run_name,
                    "step run still in progress, not starting more"
                );
                return None;
            }
            ConditionStatus::False => {
                debug!(
                    pipeline_run = %run_id,
                    run = %record.run_name,
                    "step run failed, not starting more"
                );
                return None;
            }
            ConditionStatus::True => {}
        }
    }

    debug!(pipeline_run = %run_id, "no steps left to start");
    None
}
