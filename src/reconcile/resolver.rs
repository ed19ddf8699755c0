//! Step run resolution - binds declared resources to concrete objects

use crate::core::{PipelineResource, ResourceBinding, StepRunSpec, StepTemplate};
use crate::lookup::{LookupError, ResourceLookup, StepTemplateLookup};
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// A step run spec with its template and resources looked up
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedStepRun {
    pub template: StepTemplate,

    /// Input binding name to resource
    pub inputs: BTreeMap<String, PipelineResource>,

    /// Output binding name to resource
    pub outputs: BTreeMap<String, PipelineResource>,
}

/// Error resolving a step run
///
/// Each variant keeps the lookup error it was caused by.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("couldn't retrieve referenced step template \"{template}\"")]
    Template {
        template: String,
        #[source]
        source: LookupError,
    },

    #[error("couldn't retrieve input resource \"{resource}\" for binding \"{binding}\"")]
    Input {
        binding: String,
        resource: String,
        #[source]
        source: LookupError,
    },

    #[error("couldn't retrieve output resource \"{resource}\" for binding \"{binding}\"")]
    Output {
        binding: String,
        resource: String,
        #[source]
        source: LookupError,
    },
}

impl ResolveError {
    /// The underlying lookup error
    pub fn lookup_error(&self) -> &LookupError {
        match self {
            ResolveError::Template { source, .. }
            | ResolveError::Input { source, .. }
            | ResolveError::Output { source, .. } => source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.lookup_error().is_not_found()
    }
}

/// Resolve the template and all resource bindings of a step run spec
///
/// Any lookup failure aborts the whole resolution.
pub fn resolve_step_run<T, R>(
    spec: &StepRunSpec,
    templates: &T,
    resources: &R,
) -> Result<ResolvedStepRun, ResolveError>
where
    T: StepTemplateLookup + ?Sized,
    R: ResourceLookup + ?Sized,
{
    let template = templates
        .get_step_template(&spec.namespace, &spec.template_ref)
        .map_err(|source| ResolveError::Template {
            template: spec.template_ref.clone(),
            source,
        })?;

    let inputs = resolve_bindings(&spec.inputs, resources, |binding, source| ResolveError::Input {
        binding: binding.name.clone(),
        resource: binding.resource_ref.clone(),
        source,
    })?;

    let outputs = resolve_bindings(&spec.outputs, resources, |binding, source| ResolveError::Output {
        binding: binding.name.clone(),
        resource: binding.resource_ref.clone(),
        source,
    })?;

    Ok(ResolvedStepRun {
        template,
        inputs,
        outputs,
    })
}

fn resolve_bindings<R, E>(
    bindings: &[ResourceBinding],
    resources: &R,
    wrap: E,
) -> Result<BTreeMap<String, PipelineResource>, ResolveError>
where
    R: ResourceLookup + ?Sized,
    E: Fn(&ResourceBinding, LookupError) -> ResolveError,
{
    bindings
        .iter()
        .map(|binding| {
            resources
                .get_resource(&binding.resource_ref)
                .map(|resource| (binding.name.clone(), resource))
                .map_err(|source| wrap(binding, source))
        })
        .collect()
}
