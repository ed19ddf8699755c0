//! Test: failures in step runs and in lookups

use crate::helpers::*;
use pipelinerun::cli::commands::status_exit_code;
use pipelinerun::core::ConditionStatus;
use pipelinerun::lookup::{LookupError, ObjectKind};
use pipelinerun::reconcile::{build_state, observe};

/// A failed step blocks the pipeline and fails it
#[test]
fn test_failed_step_fails_pipeline() {
    let observation = PipelineRunFixture::new(&["checkout", "compile", "publish"])
        .with_run("checkout", ConditionStatus::True)
        .with_run("compile", ConditionStatus::False)
        .observe();

    assert_next_step(&observation, None);
    assert_status(&observation, ConditionStatus::False);
    assert!(observation.is_done());
    assert_eq!(status_exit_code(observation.status()), 1);
    assert_eq!(observation.condition.reason.as_deref(), Some("Failed"));
    assert_eq!(
        observation.condition.message.as_deref(),
        Some("Step run nightly-compile for step compile has failed")
    );
}

/// Failure wins over runs still in flight and steps not started
#[test]
fn test_failure_dominates_other_states() {
    let observation = PipelineRunFixture::new(&["lint", "test", "bench"])
        .with_run("lint", ConditionStatus::Unknown)
        .with_run("bench", ConditionStatus::False)
        .observe();

    assert_status(&observation, ConditionStatus::False);
    assert_next_step(&observation, None);
}

/// A missing template aborts the observation with a not-found error
#[test]
fn test_missing_template_is_not_found() {
    let fixture = PipelineRunFixture::new(&["checkout"]);
    let pipeline = fixture.pipeline().clone().with_step("deploy", "helm-upgrade");

    let err = observe(fixture.catalog(), fixture.catalog(), &pipeline, RUN_ID).unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err, LookupError::not_found(ObjectKind::StepTemplate, "helm-upgrade"));
}

/// Transient template failures are returned as is, so the caller can retry
#[test]
fn test_transient_template_failure_then_retry() {
    let fixture = PipelineRunFixture::new(&["checkout", "compile"]);
    let templates = FlakyTemplates::new(1);

    let err = build_state(&templates, &NoRuns, fixture.pipeline(), RUN_ID).unwrap_err();
    assert!(!err.is_not_found());
    assert_eq!(err.kind(), ObjectKind::StepTemplate);

    let state = build_state(&templates, &NoRuns, fixture.pipeline(), RUN_ID).unwrap();
    assert_eq!(state.len(), 2);
    assert!(state.iter().all(|r| r.run.is_none()));
}
