//! Test utility functions for pipelinerun scenarios

use pipelinerun::core::{
    ConditionStatus, PipelineDefinition, PipelineResource, ResourceType, StepRun, StepRunSpec,
    StepTemplate,
};
use pipelinerun::lookup::{InMemoryCatalog, LookupError, ObjectKind, StepRunLookup, StepTemplateLookup};
use pipelinerun::reconcile::{observe, run_name, Observation};
use std::cell::Cell;

pub const NAMESPACE: &str = "ci";
pub const RUN_ID: &str = "nightly";

/// Builds a catalog for a linear pipeline whose steps all use one template
pub struct PipelineRunFixture {
    pipeline: PipelineDefinition,
    catalog: InMemoryCatalog,
}

impl PipelineRunFixture {
    pub fn new(steps: &[&str]) -> Self {
        let pipeline = steps.iter().fold(
            PipelineDefinition::new("build", NAMESPACE),
            |pipeline, step| pipeline.with_step(*step, "task"),
        );
        let catalog = InMemoryCatalog::new()
            .with_pipeline(pipeline.clone())
            .with_template(StepTemplate::new("task", NAMESPACE));

        Self { pipeline, catalog }
    }

    /// Record a run for `step` with the given status
    pub fn with_run(mut self, step: &str, status: ConditionStatus) -> Self {
        let step = self
            .pipeline
            .step(step)
            .unwrap_or_else(|| panic!("no step named {}", step))
            .clone();
        let run = StepRun::new(run_name(RUN_ID, &step), StepRunSpec::new(NAMESPACE, "task"))
            .with_status(status);
        self.catalog = self.catalog.with_run(run);
        self
    }

    /// Record a run for `step` that has not reported any condition yet
    pub fn with_fresh_run(mut self, step: &str) -> Self {
        let step = self.pipeline.step(step).expect("step exists").clone();
        let run = StepRun::new(run_name(RUN_ID, &step), StepRunSpec::new(NAMESPACE, "task"));
        self.catalog = self.catalog.with_run(run);
        self
    }

    pub fn pipeline(&self) -> &PipelineDefinition {
        &self.pipeline
    }

    pub fn catalog(&self) -> &InMemoryCatalog {
        &self.catalog
    }

    pub fn observe(&self) -> Observation {
        observe(&self.catalog, &self.catalog, &self.pipeline, RUN_ID).expect("observation succeeds")
    }
}

/// Step template lookup that fails transiently a set number of times
pub struct FlakyTemplates {
    failures_left: Cell<usize>,
}

impl FlakyTemplates {
    pub fn new(failures: usize) -> Self {
        Self {
            failures_left: Cell::new(failures),
        }
    }
}

impl StepTemplateLookup for FlakyTemplates {
    fn get_step_template(&self, namespace: &str, name: &str) -> Result<StepTemplate, LookupError> {
        let left = self.failures_left.get();
        if left > 0 {
            self.failures_left.set(left - 1);
            return Err(LookupError::unavailable(ObjectKind::StepTemplate, name, "etcd leader changed"));
        }
        Ok(StepTemplate::new(name, namespace))
    }
}

/// Step run lookup where nothing has been created
pub struct NoRuns;

impl StepRunLookup for NoRuns {
    fn get_step_run(&self, _namespace: &str, name: &str) -> Result<StepRun, LookupError> {
        Err(LookupError::not_found(ObjectKind::StepRun, name))
    }
}

pub fn git(name: &str) -> PipelineResource {
    PipelineResource::new(name, ResourceType::Git)
}

pub fn image(name: &str) -> PipelineResource {
    PipelineResource::new(name, ResourceType::Image)
}

/// Assert which step an observation would start next
pub fn assert_next_step(observation: &Observation, expected: Option<&str>) {
    let actual = observation.next_step().map(|r| r.step.name.as_str());
    assert_eq!(actual, expected, "unexpected next step for {:?}", observation.state);
}

/// Assert the aggregate status of an observation
pub fn assert_status(observation: &Observation, expected: ConditionStatus) {
    assert_eq!(
        observation.status(),
        expected,
        "unexpected status, condition was {:?}",
        observation.condition
    );
}
