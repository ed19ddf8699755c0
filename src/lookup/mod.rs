//! Lookup capabilities consumed by the decision core
//!
//! Each kind of object the core needs is fetched through its own one-method
//! trait. Implementations are passed in explicitly; closures with the matching
//! signature implement the traits directly.

pub mod error;
pub mod memory;

pub use error::{LookupError, ObjectKind};
pub use memory::InMemoryCatalog;

use crate::core::{PipelineResource, StepRun, StepTemplate};

/// Fetches step templates by namespace and name
pub trait StepTemplateLookup {
    fn get_step_template(&self, namespace: &str, name: &str) -> Result<StepTemplate, LookupError>;
}

/// Fetches step runs by namespace and name
///
/// `LookupError::NotFound` means the run has not been created yet.
pub trait StepRunLookup {
    fn get_step_run(&self, namespace: &str, name: &str) -> Result<StepRun, LookupError>;
}

/// Fetches pipeline resources by name
pub trait ResourceLookup {
    fn get_resource(&self, name: &str) -> Result<PipelineResource, LookupError>;
}

impl<F> StepTemplateLookup for F
where
    F: Fn(&str, &str) -> Result<StepTemplate, LookupError>,
{
    fn get_step_template(&self, namespace: &str, name: &str) -> Result<StepTemplate, LookupError> {
        self(namespace, name)
    }
}

impl<F> StepRunLookup for F
where
    F: Fn(&str, &str) -> Result<StepRun, LookupError>,
{
    fn get_step_run(&self, namespace: &str, name: &str) -> Result<StepRun, LookupError> {
        self(namespace, name)
    }
}

impl<F> ResourceLookup for F
where
    F: Fn(&str) -> Result<PipelineResource, LookupError>,
{
    fn get_resource(&self, name: &str) -> Result<PipelineResource, LookupError> {
        self(name)
    }
}
