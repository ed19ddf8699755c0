use anyhow::{Context, Result};
use pipelinerun::cli::commands::{
    catalog_path, is_fatal_watch_error, status_exit_code, ResolveCommand, StatusCommand, StatusError,
    ValidateCommand,
};
use pipelinerun::cli::output::*;
use pipelinerun::cli::{Cli, Command};
use pipelinerun::core::config::CatalogConfig;
use pipelinerun::lookup::{InMemoryCatalog, StepRunLookup};
use pipelinerun::reconcile::{observe, resolve_step_run, Observation};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::from_args();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set logging subscriber")?;

    // Execute command
    match &cli.command {
        Command::Status(cmd) => show_status(cmd).await?,
        Command::Resolve(cmd) => resolve_run(cmd)?,
        Command::Validate(cmd) => validate_catalog(cmd)?,
    }

    Ok(())
}

fn load_catalog(path: &Path) -> Result<InMemoryCatalog> {
    let config = CatalogConfig::from_file(path).context("Failed to load catalog")?;
    Ok(config.into_catalog())
}

fn observe_from_file(cmd: &StatusCommand, path: &Path) -> Result<Observation> {
    let catalog = load_catalog(path)?;

    let pipeline = match &cmd.namespace {
        Some(namespace) => catalog.pipeline(namespace, &cmd.pipeline),
        None => catalog.find_pipeline(&cmd.pipeline),
    }
    .ok_or_else(|| StatusError::PipelineNotFound(cmd.pipeline.clone()))?;

    observe(&catalog, &catalog, pipeline, &cmd.run_id)
        .with_context(|| format!("Failed to observe pipeline run '{}'", cmd.run_id))
}

fn print_observation(observation: &Observation, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(observation)?);
    } else {
        println!("{}", format_observation(observation));
    }
    Ok(())
}

fn exit_with_status(observation: &Observation) -> Result<()> {
    let code = status_exit_code(observation.status());
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

async fn show_status(cmd: &StatusCommand) -> Result<()> {
    let path = catalog_path(&cmd.catalog);

    let Some(secs) = cmd.watch else {
        let observation = observe_from_file(cmd, &path)?;
        print_observation(&observation, cmd.json)?;
        return exit_with_status(&observation);
    };

    let mut interval = tokio::time::interval(Duration::from_secs(secs.max(1)));
    loop {
        tokio::select! {
            _ = interval.tick() => {
                let observation = match observe_from_file(cmd, &path) {
                    Ok(observation) => observation,
                    Err(e) if is_fatal_watch_error(&e) => return Err(e),
                    Err(e) => {
                        warn!("{:#}, retrying in {}s", e, secs.max(1));
                        continue;
                    }
                };
                print_observation(&observation, cmd.json)?;
                if observation.is_done() {
                    return exit_with_status(&observation);
                }
                println!();
            }
            _ = tokio::signal::ctrl_c() => {
                debug!("interrupted, stopping watch");
                return Ok(());
            }
        }
    }
}

fn resolve_run(cmd: &ResolveCommand) -> Result<()> {
    let catalog = load_catalog(&catalog_path(&cmd.catalog))?;

    let run = catalog
        .get_step_run(&cmd.namespace, &cmd.run)
        .with_context(|| format!("Failed to get step run '{}'", cmd.run))?;
    let resolved = resolve_step_run(&run.spec, &catalog, &catalog)
        .with_context(|| format!("Failed to resolve step run '{}'", cmd.run))?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
    } else {
        println!("{}", format_resolved(&run.name, &resolved));
    }
    Ok(())
}

fn validate_catalog(cmd: &ValidateCommand) -> Result<()> {
    let path = catalog_path(&cmd.catalog);
    println!("{} Validating catalog {}...", INFO, style(path.display()).dim());

    match CatalogConfig::from_file(&path) {
        Ok(config) => {
            let catalog = config.clone().into_catalog();
            println!("{} Catalog is valid!", CHECK);
            println!("  Pipelines: {}", style(catalog.pipeline_count()).cyan());
            println!("  Templates: {}", style(catalog.template_count()).cyan());
            println!("  Runs: {}", style(catalog.run_count()).cyan());
            println!("  Resources: {}", style(catalog.resource_count()).cyan());

            if cmd.json {
                let json = serde_json::to_string_pretty(&config)?;
                println!("\n{}", json);
            }
            Ok(())
        }
        Err(e) => {
            println!("{} Validation failed:", CROSS);
            println!("  {}", style(format!("{:#}", e)).red());
            std::process::exit(1);
        }
    }
}
