//! CLI output formatting

use crate::core::{ConditionStatus, PipelineResource, StepRunRecord};
use crate::reconcile::{Observation, ResolvedStepRun};
use console::Emoji;
use std::collections::BTreeMap;

// Re-export style
pub use console::style;

// Emojis for output
pub static CHECK: Emoji<'_, '_> = Emoji("✅ ", "✓ ");
pub static CROSS: Emoji<'_, '_> = Emoji("❌ ", "✗ ");
pub static SPINNER: Emoji<'_, '_> = Emoji("⏳ ", "~ ");
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "i ");
pub static ROCKET: Emoji<'_, '_> = Emoji("🚀 ", "> ");

/// Format a run's condition status for display
pub fn format_condition_status(status: ConditionStatus) -> String {
    match status {
        ConditionStatus::Unknown => style("RUNNING").yellow().to_string(),
        ConditionStatus::True => style("SUCCEEDED").green().to_string(),
        ConditionStatus::False => style("FAILED").red().to_string(),
    }
}

/// Format one snapshot record for display
pub fn format_record(record: &StepRunRecord) -> String {
    let state = match record.run_status() {
        Some(status) => format_condition_status(status),
        None => style("NOT STARTED").dim().to_string(),
    };

    format!(
        "  {} {} ({}) run {}",
        state,
        style(&record.step.name).bold(),
        style(&record.template.name).dim(),
        style(&record.run_name).cyan()
    )
}

/// Format a full observation of a pipeline run
pub fn format_observation(observation: &Observation) -> String {
    let mut lines = vec![format!(
        "{} Pipeline run {}",
        INFO,
        style(&observation.run_id).bold()
    )];

    lines.extend(observation.state.iter().map(format_record));

    match observation.next_step() {
        Some(record) => lines.push(format!(
            "{} Next step: {} (create run {})",
            ROCKET,
            style(&record.step.name).bold(),
            style(&record.run_name).cyan()
        )),
        None => lines.push(format!("{} No step to start", SPINNER)),
    }

    let icon = match observation.status() {
        ConditionStatus::True => &CHECK,
        ConditionStatus::False => &CROSS,
        ConditionStatus::Unknown => &SPINNER,
    };
    lines.push(format!(
        "{} Condition: {} {}",
        icon,
        format_condition_status(observation.status()),
        style(observation.condition.message.as_deref().unwrap_or_default()).dim()
    ));

    lines.join("\n")
}

fn format_bindings(title: &str, bindings: &BTreeMap<String, PipelineResource>) -> Vec<String> {
    let mut lines = vec![format!("  {}:", title)];
    if bindings.is_empty() {
        lines.push(format!("    {}", style("(none)").dim()));
    }
    for (name, resource) in bindings {
        lines.push(format!(
            "    {} -> {} [{}]",
            style(name).bold(),
            style(&resource.name).cyan(),
            resource.resource_type
        ));
    }
    lines
}

/// Format a resolved step run for display
pub fn format_resolved(run_name: &str, resolved: &ResolvedStepRun) -> String {
    let mut lines = vec![format!(
        "{} Step run {} uses template {}",
        CHECK,
        style(run_name).bold(),
        style(&resolved.template.name).cyan()
    )];
    if let Some(description) = &resolved.template.description {
        lines.push(format!("  {}", style(description).dim()));
    }
    lines.extend(format_bindings("Inputs", &resolved.inputs));
    lines.extend(format_bindings("Outputs", &resolved.outputs));
    lines.join("\n")
}
