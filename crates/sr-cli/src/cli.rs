//! CLI argument definitions using clap derive API

use clap::Parser;
use std::path::PathBuf;

/// Schemareset - concatenate SQL migrations behind a schema teardown header
/// into one reset script
#[derive(Parser, Debug)]
#[command(name = "sr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, default_value = ".")]
    pub project_dir: PathBuf,

    /// Config file path (default: schemareset.yml in the project directory, if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the migrations directory
    #[arg(short, long)]
    pub migrations_dir: Option<PathBuf>,

    /// Override the output file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the schema to reset
    #[arg(short, long)]
    pub schema: Option<String>,

    /// Extension to enable (repeatable; replaces the configured list)
    #[arg(short, long = "extension")]
    pub extensions: Vec<String>,

    /// Add today's date to the header (output is no longer reproducible)
    #[arg(long)]
    pub stamp: bool,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
