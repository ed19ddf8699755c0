//! Command-line interface

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use commands::{ResolveCommand, StatusCommand, ValidateCommand};
use std::ffi::OsString;

/// Inspect pipeline run decisions against a catalog snapshot
#[derive(Debug, Parser, Clone)]
#[command(name = "pipelinerun")]
#[command(version)]
#[command(about = "Inspect pipeline run decisions against a catalog snapshot", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Show the state, next step and condition of a pipeline run
    Status(StatusCommand),

    /// Resolve the template and resources of a step run
    Resolve(ResolveCommand),

    /// Validate a catalog file
    Validate(ValidateCommand),
}

impl Cli {
    /// Parse CLI arguments from environment
    pub fn from_args() -> Self {
        Self::parse()
    }

    /// Parse CLI arguments from a slice
    pub fn try_parse_from<I, T>(itr: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(itr)
    }
}
