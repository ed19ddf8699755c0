//! Pipeline domain model

use serde::{Deserialize, Serialize};

/// One step of a pipeline: a name plus the template it runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineStep {
    /// Step name, unique within the pipeline
    pub name: String,

    /// Name of the step template to run
    pub template_ref: String,
}

impl PipelineStep {
    pub fn new(name: impl Into<String>, template_ref: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            template_ref: template_ref.into(),
        }
    }
}

/// A pipeline definition
///
/// Steps execute strictly in the order they are listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineDefinition {
    /// Pipeline name
    pub name: String,

    /// Namespace the pipeline and its templates and runs live in
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Ordered steps
    #[serde(default)]
    pub steps: Vec<PipelineStep>,
}

pub(crate) fn default_namespace() -> String {
    "default".to_string()
}

impl PipelineDefinition {
    /// Create an empty pipeline in the given namespace
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            steps: Vec::new(),
        }
    }

    /// Append a step
    pub fn with_step(mut self, name: impl Into<String>, template_ref: impl Into<String>) -> Self {
        self.steps.push(PipelineStep::new(name, template_ref));
        self
    }

    /// Get a step by name
    pub fn step(&self, name: &str) -> Option<&PipelineStep> {
        self.steps.iter().find(|s| s.name == name)
    }
}
