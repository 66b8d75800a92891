//! cli
//!
//! Command-line interface layer for gitobj.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Merge flags over loaded configuration
//! - Install the log subscriber
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! handlers that call [`crate::git::Repository`]. It never touches `git2`.

pub mod args;
pub mod commands;

pub use args::{Cli, Command};

use anyhow::{Context as _, Result};
use tracing_subscriber::EnvFilter;

use crate::core::config::Config;
use crate::git::OpenOptions;
use crate::ui::output::Verbosity;

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.debug);

    let config = Config::load().context("failed to load configuration")?;
    let ctx = context(&cli, &config);

    commands::dispatch(cli.command, &ctx)
}

/// Build the command context. Flags override configuration.
fn context(cli: &Cli, config: &Config) -> commands::Context {
    let options = OpenOptions::from_config(config).discover(cli.discover || config.discover());

    commands::Context {
        repo: cli.repo.clone(),
        options,
        verbosity: Verbosity::from_flags(cli.quiet, cli.debug),
        json: cli.json || config.json(),
        abbrev: config.abbrev(),
    }
}

/// Install a stderr log subscriber.
///
/// `RUST_LOG` takes precedence over `--debug`.
fn init_logging(debug: bool) {
    let default = if debug { "gitobj=debug" } else { "gitobj=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A subscriber may already be installed when embedded.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
