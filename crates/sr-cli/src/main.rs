//! Schemareset CLI - builds a single schema reset script from a migrations
//! directory

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;
use commands::generate;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    generate::execute(&cli)
}

/// Install the stderr logger; `RUST_LOG` takes precedence over `--verbose`
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}
