//! pipelinerun - decision core for sequential pipeline runs

pub mod cli;
pub mod core;
pub mod lookup;
pub mod reconcile;

// Re-export commonly used types
pub use core::{ConditionStatus, PipelineDefinition, StepRun, StepRunRecord, StepRunSpec, StepTemplate};
pub use lookup::{InMemoryCatalog, LookupError, ResourceLookup, StepRunLookup, StepTemplateLookup};
pub use reconcile::{aggregate_condition, build_state, next_step, resolve_step_run, ResolveError, ResolvedStepRun};
