//! Test: decisions drawn from a YAML catalog snapshot

use crate::helpers::*;
use pipelinerun::core::config::CatalogConfig;
use pipelinerun::core::ConditionStatus;
use pipelinerun::lookup::StepRunLookup;
use pipelinerun::reconcile::{observe, resolve_step_run};

const SNAPSHOT: &str = r#"
pipelines:
  - name: "release"
    namespace: "ci"
    steps:
      - name: "build"
        template_ref: "cargo-build"
      - name: "push"
        template_ref: "push-image"
templates:
  - name: "cargo-build"
    namespace: "ci"
    inputs:
      - name: "source"
        type: git
  - name: "push-image"
    namespace: "ci"
    outputs:
      - name: "image"
        type: image
runs:
  - name: "nightly-build"
    namespace: "ci"
    spec:
      namespace: "ci"
      template_ref: "cargo-build"
      inputs:
        - name: "source"
          resource_ref: "app-repo"
    status:
      start_time: "2024-05-01T10:00:00Z"
      completion_time: "2024-05-01T10:04:12Z"
      conditions:
        - type: Succeeded
          status: "True"
resources:
  - name: "app-repo"
    type: git
    params:
      url: "https://example.com/app.git"
      revision: "main"
"#;

#[test]
fn test_snapshot_next_step_and_status() {
    let catalog = CatalogConfig::from_yaml(SNAPSHOT).unwrap().into_catalog();
    let pipeline = catalog.find_pipeline("release").unwrap();

    let observation = observe(&catalog, &catalog, pipeline, RUN_ID).unwrap();

    assert_next_step(&observation, Some("push"));
    assert_status(&observation, ConditionStatus::Unknown);
    assert_eq!(observation.state[0].template.inputs[0].name, "source");
}

#[test]
fn test_snapshot_resolves_stored_run() {
    let catalog = CatalogConfig::from_yaml(SNAPSHOT).unwrap().into_catalog();

    let run = catalog.get_step_run("ci", "nightly-build").unwrap();
    let resolved = resolve_step_run(&run.spec, &catalog, &catalog).unwrap();

    assert_eq!(resolved.inputs["source"].param("revision"), Some("main"));
    assert!(resolved.outputs.is_empty());
}

#[test]
fn test_observation_serializes_to_json() {
    let catalog = CatalogConfig::from_yaml(SNAPSHOT).unwrap().into_catalog();
    let pipeline = catalog.find_pipeline("release").unwrap();
    let observation = observe(&catalog, &catalog, pipeline, RUN_ID).unwrap();

    let json = serde_json::to_value(&observation).unwrap();

    assert_eq!(json["run_id"], "nightly");
    assert_eq!(json["condition"]["status"], "Unknown");
    assert_eq!(json["condition"]["reason"], "Running");
    assert_eq!(json["state"][1]["run"], serde_json::Value::Null);
}
