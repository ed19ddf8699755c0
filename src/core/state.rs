//! Run state models

use crate::core::{
    condition::{Condition, ConditionStatus, ConditionType},
    pipeline::{default_namespace, PipelineStep},
    step::{StepRunSpec, StepTemplate},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Observed status of a step run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRunStatus {
    /// Conditions reported by whoever executes the run
    #[serde(default)]
    pub conditions: Vec<Condition>,

    /// When the run started
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,

    /// When the run finished
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<DateTime<Utc>>,
}

impl StepRunStatus {
    /// Get the condition of the given type, if reported
    pub fn condition(&self, condition_type: ConditionType) -> Option<&Condition> {
        self.conditions
            .iter()
            .find(|c| c.condition_type == condition_type)
    }
}

/// A run object: one execution attempt of a step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepRun {
    /// Run name
    pub name: String,

    /// Namespace the run lives in
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// What the run executes
    pub spec: StepRunSpec,

    /// Observed status
    #[serde(default)]
    pub status: StepRunStatus,
}

impl StepRun {
    /// Create a run with no conditions reported yet
    pub fn new(name: impl Into<String>, spec: StepRunSpec) -> Self {
        Self {
            name: name.into(),
            namespace: spec.namespace.clone(),
            spec,
            status: StepRunStatus::default(),
        }
    }

    /// Replace the `Succeeded` condition with one of the given status
    pub fn with_status(mut self, status: ConditionStatus) -> Self {
        self.status
            .conditions
            .retain(|c| c.condition_type != ConditionType::Succeeded);
        self.status.conditions.push(Condition::succeeded(status));
        self
    }

    /// Status of the `Succeeded` condition
    ///
    /// A run that has not reported the condition yet is still in flight.
    pub fn succeeded_status(&self) -> ConditionStatus {
        self.status
            .condition(ConditionType::Succeeded)
            .map(|c| c.status)
            .unwrap_or(ConditionStatus::Unknown)
    }
}

/// One entry of a pipeline run snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRunRecord {
    /// The resolved template of the step
    pub template: StepTemplate,

    /// The pipeline step this record describes
    pub step: PipelineStep,

    /// Deterministic name of the step's run
    pub run_name: String,

    /// The run object, `None` if the step has not started
    pub run: Option<StepRun>,
}

impl StepRunRecord {
    /// Status of the record's run, `None` if not started
    pub fn run_status(&self) -> Option<ConditionStatus> {
        self.run.as_ref().map(StepRun::succeeded_status)
    }

    pub fn is_started(&self) -> bool {
        self.run.is_some()
    }
}
