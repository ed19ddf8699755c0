//! One observation of a pipeline run

use crate::core::{Condition, ConditionStatus, PipelineDefinition, StepRunRecord};
use crate::lookup::{LookupError, StepRunLookup, StepTemplateLookup};
use crate::reconcile::{scheduler::next_step, state_builder::build_state, status::pipeline_condition};
use serde::Serialize;

/// Snapshot of a pipeline run together with the decisions drawn from it
#[derive(Debug, Clone, Serialize)]
pub struct Observation {
    /// Pipeline run identifier
    pub run_id: String,

    /// Ordered step records
    pub state: Vec<StepRunRecord>,

    /// Aggregate condition of the pipeline run
    pub condition: Condition,
}

impl Observation {
    /// The step to start next, if any
    pub fn next_step(&self) -> Option<&StepRunRecord> {
        next_step(&self.run_id, &self.state)
    }

    pub fn status(&self) -> ConditionStatus {
        self.condition.status
    }

    /// Whether the pipeline run has reached a final status
    pub fn is_done(&self) -> bool {
        self.condition.status != ConditionStatus::Unknown
    }
}

/// Build the snapshot of a pipeline run and evaluate it
pub fn observe<T, R>(
    templates: &T,
    runs: &R,
    pipeline: &PipelineDefinition,
    run_id: &str,
) -> Result<Observation, LookupError>
where
    T: StepTemplateLookup + ?Sized,
    R: StepRunLookup + ?Sized,
{
    let state = build_state(templates, runs, pipeline, run_id)?;
    let condition = pipeline_condition(run_id, &state);

    Ok(Observation {
        run_id: run_id.to_string(),
        state,
        condition,
    })
}
