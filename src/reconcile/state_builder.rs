//! Snapshot builder - resolves the current state of a pipeline run

use crate::core::{PipelineDefinition, PipelineStep, StepRunRecord};
use crate::lookup::{LookupError, StepRunLookup, StepTemplateLookup};
use tracing::debug;

/// Deterministic name of the run for `step` within pipeline run `run_id`
pub fn run_name(run_id: &str, step: &PipelineStep) -> String {
    format!("{}-{}", run_id, step.name)
}

/// Build the ordered snapshot of a pipeline run
///
/// Every step's template must resolve; any template lookup error is returned
/// as is. A step whose run does not exist yet gets a record with no run. Any
/// other run lookup error aborts the build.
pub fn build_state<T, R>(
    templates: &T,
    runs: &R,
    pipeline: &PipelineDefinition,
    run_id: &str,
) -> Result<Vec<StepRunRecord>, LookupError>
where
    T: StepTemplateLookup + ?Sized,
    R: StepRunLookup + ?Sized,
{
    let mut state = Vec::with_capacity(pipeline.steps.len());

    for step in &pipeline.steps {
        let template = templates.get_step_template(&pipeline.namespace, &step.template_ref)?;
        let run_name = run_name(run_id, step);

        let run = match runs.get_step_run(&pipeline.namespace, &run_name) {
            Ok(run) => Some(run),
            Err(err) if err.is_not_found() => {
                debug!(step = %step.name, run = %run_name, "step run not created yet");
                None
            }
            Err(err) => return Err(err),
        };

        state.push(StepRunRecord {
            template,
            step: step.clone(),
            run_name,
            run,
        });
    }

    Ok(state)
}
