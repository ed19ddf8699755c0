//! Scenario-based tests for pipelinerun

mod helpers;

mod catalog_snapshot;
mod failure_handling;
mod resource_resolution;
