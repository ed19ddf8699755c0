//! Catalog snapshot configuration from YAML

use crate::core::{PipelineDefinition, PipelineResource, StepRun, StepTemplate};
use crate::lookup::InMemoryCatalog;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// A snapshot of everything the decision core can look up, as stored in YAML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Pipeline definitions
    #[serde(default)]
    pub pipelines: Vec<PipelineDefinition>,

    /// Step templates
    #[serde(default)]
    pub templates: Vec<StepTemplate>,

    /// Step runs observed so far
    #[serde(default)]
    pub runs: Vec<StepRun>,

    /// Pipeline resources
    #[serde(default)]
    pub resources: Vec<PipelineResource>,
}

impl CatalogConfig {
    /// Load a catalog from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        Self::from_yaml(&content)
    }

    /// Parse a catalog from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: CatalogConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Default catalog location under the user's local data directory
    pub fn default_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("pipelinerun")
            .join("catalog.yaml")
    }

    /// Validate the catalog
    ///
    /// Only checks that names are unique; templates and bindings are not
    /// checked against each other.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for pipeline in &self.pipelines {
            if !seen.insert((&pipeline.namespace, &pipeline.name)) {
                anyhow::bail!("Duplicate pipeline: {}/{}", pipeline.namespace, pipeline.name);
            }

            let mut step_names = HashSet::new();
            for step in &pipeline.steps {
                if !step_names.insert(&step.name) {
                    anyhow::bail!(
                        "Pipeline '{}' has duplicate step name '{}'",
                        pipeline.name,
                        step.name
                    );
                }
            }
        }

        let mut seen = HashSet::new();
        for template in &self.templates {
            if !seen.insert((&template.namespace, &template.name)) {
                anyhow::bail!("Duplicate step template: {}/{}", template.namespace, template.name);
            }
        }

        let mut seen = HashSet::new();
        for run in &self.runs {
            if !seen.insert((&run.namespace, &run.name)) {
                anyhow::bail!("Duplicate step run: {}/{}", run.namespace, run.name);
            }
        }

        let mut seen = HashSet::new();
        for resource in &self.resources {
            if !seen.insert(&resource.name) {
                anyhow::bail!("Duplicate resource: {}", resource.name);
            }
        }

        Ok(())
    }

    /// Build the in-memory catalog the lookups are served from
    pub fn into_catalog(self) -> InMemoryCatalog {
        let catalog = self
            .pipelines
            .into_iter()
            .fold(InMemoryCatalog::new(), InMemoryCatalog::with_pipeline);
        let catalog = self
            .templates
            .into_iter()
            .fold(catalog, InMemoryCatalog::with_template);
        let catalog = self.runs.into_iter().fold(catalog, InMemoryCatalog::with_run);
        self.resources
            .into_iter()
            .fold(catalog, InMemoryCatalog::with_resource)
    }
}
