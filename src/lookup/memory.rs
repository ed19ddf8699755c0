//! In-memory catalog implementing every lookup

use crate::core::{PipelineDefinition, PipelineResource, StepRun, StepTemplate};
use crate::lookup::{LookupError, ObjectKind, ResourceLookup, StepRunLookup, StepTemplateLookup};
use std::collections::HashMap;

type Key = (String, String);

fn key(namespace: &str, name: &str) -> Key {
    (namespace.to_string(), name.to_string())
}

/// Immutable catalog of pipelines, templates, runs and resources
///
/// Used for tests and by the CLI, which loads it from a YAML snapshot.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    pipelines: HashMap<Key, PipelineDefinition>,
    templates: HashMap<Key, StepTemplate>,
    runs: HashMap<Key, StepRun>,
    resources: HashMap<String, PipelineResource>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pipeline(mut self, pipeline: PipelineDefinition) -> Self {
        self.pipelines
            .insert(key(&pipeline.namespace, &pipeline.name), pipeline);
        self
    }

    pub fn with_template(mut self, template: StepTemplate) -> Self {
        self.templates
            .insert(key(&template.namespace, &template.name), template);
        self
    }

    pub fn with_run(mut self, run: StepRun) -> Self {
        self.runs.insert(key(&run.namespace, &run.name), run);
        self
    }

    pub fn with_resource(mut self, resource: PipelineResource) -> Self {
        self.resources.insert(resource.name.clone(), resource);
        self
    }

    /// Get a pipeline definition
    pub fn pipeline(&self, namespace: &str, name: &str) -> Option<&PipelineDefinition> {
        self.pipelines.get(&key(namespace, name))
    }

    /// Find a pipeline by name in any namespace
    ///
    /// Returns `None` when no pipeline or more than one pipeline has the name.
    pub fn find_pipeline(&self, name: &str) -> Option<&PipelineDefinition> {
        let mut matches = self.pipelines.values().filter(|p| p.name == name);
        let found = matches.next()?;
        match matches.next() {
            Some(_) => None,
            None => Some(found),
        }
    }

    pub fn pipeline_count(&self) -> usize {
        self.pipelines.len()
    }

    pub fn template_count(&self) -> usize {
        self.templates.len()
    }

    pub fn run_count(&self) -> usize {
        self.runs.len()
    }

    pub fn resource_count(&self) -> usize {
        self.resources.len()
    }
}

impl StepTemplateLookup for InMemoryCatalog {
    fn get_step_template(&self, namespace: &str, name: &str) -> Result<StepTemplate, LookupError> {
        self.templates
            .get(&key(namespace, name))
            .cloned()
            .ok_or_else(|| LookupError::not_found(ObjectKind::StepTemplate, name))
    }
}

impl StepRunLookup for InMemoryCatalog {
    fn get_step_run(&self, namespace: &str, name: &str) -> Result<StepRun, LookupError> {
        self.runs
            .get(&key(namespace, name))
            .cloned()
            .ok_or_else(|| LookupError::not_found(ObjectKind::StepRun, name))
    }
}

impl ResourceLookup for InMemoryCatalog {
    fn get_resource(&self, name: &str) -> Result<PipelineResource, LookupError> {
        self.resources
            .get(name)
            .cloned()
            .ok_or_else(|| LookupError::not_found(ObjectKind::Resource, name))
    }
}
