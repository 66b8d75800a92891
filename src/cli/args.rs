//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--repo <path>`: Repository to open (default: current directory)
//! - `--discover`: Search parent directories for the repository
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output
//! - `--json`: Machine-readable output

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::core::types::{ObjectKind, Oid};

/// gitobj - Inspect git objects by OID
#[derive(Parser, Debug)]
#[command(name = "gitobj")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Repository to open (working directory or git directory)
    #[arg(long, global = true, default_value = ".")]
    pub repo: PathBuf,

    /// Search parent directories for a repository
    #[arg(long, global = true)]
    pub discover: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show where the repository lives and whether it is bare
    Info,

    /// Print an object
    #[command(
        long_about = "Print an object.\n\n\
            Without --kind the object is loaded as whatever kind is stored. With \
            --kind the lookup fails unless the stored object is exactly that kind.",
        after_help = "\
EXAMPLES:
    # Print any object
    gitobj show 4b825dc642cb6eb9a060e54bf8d69288fbee4904

    # Require a commit
    gitobj show --kind commit c0ffee...

    # Abbreviate OIDs in the listing
    gitobj show --abbrev <tree-oid>"
    )]
    Show {
        /// Object id (40 hex digits)
        oid: Oid,

        /// Required object kind (blob, commit, tag, tree)
        #[arg(long)]
        kind: Option<ObjectKind>,

        /// Abbreviate OIDs in the output
        #[arg(long)]
        abbrev: bool,
    },

    /// Write a blob's raw contents to stdout
    Cat {
        /// Blob id (40 hex digits)
        oid: Oid,
    },
}
