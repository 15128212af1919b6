//! Generate command implementation

use anyhow::{Context, Result};
use sr_core::{generate, Config, HeaderContext, ResetRequest};

use crate::cli::Cli;

/// Load the config file (explicit, discovered, or defaults) and apply
/// command-line overrides on top of it.
pub(crate) fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => Config::load_or_default(&cli.project_dir).with_context(|| {
            format!("Failed to load config from {}", cli.project_dir.display())
        })?,
    };

    if let Some(schema) = &cli.schema {
        config.schema = schema.clone();
    }
    if !cli.extensions.is_empty() {
        config.extensions = cli.extensions.clone();
    }
    config.validate().context("Invalid command-line override")?;

    Ok(config)
}

/// Build the generation request. Paths given on the command line are used
/// as-is; paths from the config resolve against the project directory.
pub(crate) fn build_request(cli: &Cli, config: &Config) -> ResetRequest {
    let mut header = HeaderContext::from_config(config);
    if cli.stamp {
        header = header.with_date(chrono::Local::now().format("%Y-%m-%d").to_string());
    }

    ResetRequest {
        migrations_dir: cli
            .migrations_dir
            .clone()
            .unwrap_or_else(|| config.migrations_dir_absolute(&cli.project_dir)),
        output: cli
            .output
            .clone()
            .unwrap_or_else(|| config.output_absolute(&cli.project_dir)),
        header,
    }
}

/// Execute the generate command
pub(crate) fn execute(cli: &Cli) -> Result<()> {
    let config = resolve_config(cli)?;
    let request = build_request(cli, &config);
    log::debug!(
        "Generating reset script for schema '{}' from {}",
        config.schema,
        request.migrations_dir.display()
    );

    let report = generate(&request).context("Reset script generation failed")?;

    println!(
        "Generated reset SQL with {} migrations",
        report.migration_count
    );
    println!("Output: {}", report.output.display());

    Ok(())
}

#[cfg(test)]
#[path = "generate_test.rs"]
mod tests;
