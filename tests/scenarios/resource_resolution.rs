//! Test: resolving step run bindings against a catalog

use crate::helpers::*;
use pipelinerun::core::{StepRunSpec, StepTemplate};
use pipelinerun::lookup::{InMemoryCatalog, LookupError, ObjectKind, StepRunLookup};
use pipelinerun::reconcile::{resolve_step_run, ResolveError};

fn catalog() -> InMemoryCatalog {
    InMemoryCatalog::new()
        .with_template(StepTemplate::new("orchestrate", NAMESPACE))
        .with_resource(git("git-repo"))
        .with_resource(git("another-git-repo"))
        .with_resource(image("image"))
}

/// Bindings are keyed by binding name and point at the referenced resources
#[test]
fn test_resolve_against_catalog() {
    let spec = StepRunSpec::new(NAMESPACE, "orchestrate")
        .with_input("repoToBuildFrom", "git-repo")
        .with_output("imageToBuild", "image")
        .with_output("gitRepoToUpdate", "another-git-repo");
    let catalog = catalog();

    let resolved = resolve_step_run(&spec, &catalog, &catalog).unwrap();

    assert_eq!(resolved.template, StepTemplate::new("orchestrate", NAMESPACE));
    assert_eq!(resolved.inputs.keys().collect::<Vec<_>>(), vec!["repoToBuildFrom"]);
    assert_eq!(resolved.inputs["repoToBuildFrom"], git("git-repo"));
    assert_eq!(resolved.outputs["imageToBuild"], image("image"));
    assert_eq!(resolved.outputs["gitRepoToUpdate"], git("another-git-repo"));
}

/// Two bindings may share one resource
#[test]
fn test_bindings_may_share_a_resource() {
    let spec = StepRunSpec::new(NAMESPACE, "orchestrate")
        .with_input("source", "git-repo")
        .with_output("updated", "git-repo");
    let catalog = catalog();

    let resolved = resolve_step_run(&spec, &catalog, &catalog).unwrap();
    assert_eq!(resolved.inputs["source"], resolved.outputs["updated"]);
}

/// A template from another namespace is not found
#[test]
fn test_template_namespace_is_respected() {
    let spec = StepRunSpec::new("prod", "orchestrate");
    let catalog = catalog();

    let err = resolve_step_run(&spec, &catalog, &catalog).unwrap_err();
    assert!(matches!(err, ResolveError::Template { .. }));
    assert_eq!(err.lookup_error(), &LookupError::not_found(ObjectKind::StepTemplate, "orchestrate"));
}

/// An unknown output resource fails the whole resolution
#[test]
fn test_unknown_output_resource() {
    let spec = StepRunSpec::new(NAMESPACE, "orchestrate")
        .with_input("repoToBuildFrom", "git-repo")
        .with_output("report", "bucket");
    let catalog = catalog();

    let err = resolve_step_run(&spec, &catalog, &catalog).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(
        err.to_string(),
        "couldn't retrieve output resource \"bucket\" for binding \"report\""
    );
}

/// A run's stored spec resolves the same way a hand-built one does
#[test]
fn test_resolve_spec_of_stored_run() {
    let fixture = PipelineRunFixture::new(&["checkout"]).with_fresh_run("checkout");

    let run = fixture.catalog().get_step_run(NAMESPACE, "nightly-checkout").unwrap();
    let resolved = resolve_step_run(&run.spec, fixture.catalog(), fixture.catalog()).unwrap();

    assert_eq!(resolved.template.name, "task");
    assert!(resolved.inputs.is_empty());
    assert!(resolved.outputs.is_empty());
}
