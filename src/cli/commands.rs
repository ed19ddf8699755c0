//! CLI command definitions

use crate::core::config::CatalogConfig;
use crate::core::ConditionStatus;
use crate::lookup::LookupError;
use clap::Args;
use std::path::PathBuf;
use thiserror::Error;

/// Show the state of a pipeline run
#[derive(Debug, Args, Clone)]
pub struct StatusCommand {
    /// Path to the catalog YAML file
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Pipeline name
    #[arg(short, long)]
    pub pipeline: String,

    /// Pipeline namespace (needed when the name is not unique)
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Pipeline run identifier
    #[arg(short, long)]
    pub run_id: String,

    /// Re-read the catalog every N seconds until the run finishes
    #[arg(long, value_name = "SECS")]
    pub watch: Option<u64>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Resolve a step run
#[derive(Debug, Args, Clone)]
pub struct ResolveCommand {
    /// Path to the catalog YAML file
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Step run name
    #[arg(short, long)]
    pub run: String,

    /// Step run namespace
    #[arg(short, long, default_value = "default")]
    pub namespace: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Validate a catalog
#[derive(Debug, Args, Clone)]
pub struct ValidateCommand {
    /// Path to the catalog YAML file
    #[arg(short, long)]
    pub catalog: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Errors of the `status` command that are not lookup errors
#[derive(Debug, Error)]
pub enum StatusError {
    #[error("Pipeline '{0}' not found or ambiguous")]
    PipelineNotFound(String),
}

/// Process exit code for a pipeline run with the given status
pub fn status_exit_code(status: ConditionStatus) -> i32 {
    match status {
        ConditionStatus::False => 1,
        ConditionStatus::True | ConditionStatus::Unknown => 0,
    }
}

/// Whether an error should end `status --watch`
///
/// A missing pipeline or a not-found lookup will not fix itself between
/// ticks. Anything else (unreadable or half-written catalog, unavailable
/// lookups) is retried on the next tick.
pub fn is_fatal_watch_error(err: &anyhow::Error) -> bool {
    if err.downcast_ref::<StatusError>().is_some() {
        return true;
    }
    err.downcast_ref::<LookupError>()
        .is_some_and(LookupError::is_not_found)
}

/// The catalog path given on the command line, or the default location
pub fn catalog_path(catalog: &Option<PathBuf>) -> PathBuf {
    catalog.clone().unwrap_or_else(CatalogConfig::default_path)
}
