//! Reconciliation decisions for a pipeline run
//!
//! Everything here is a pure function of its inputs: a pipeline definition,
//! the lookups it is handed and a run identifier. Nothing is created, stored
//! or executed.

pub mod observation;
pub mod resolver;
pub mod scheduler;
pub mod state_builder;
pub mod status;

pub use observation::{observe, Observation};
pub use resolver::{resolve_step_run, ResolveError, ResolvedStepRun};
pub use scheduler::next_step;
pub use state_builder::{build_state, run_name};
pub use status::{aggregate_condition, pipeline_condition};
