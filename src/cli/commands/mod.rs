//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Opens the repository named by the context
//! 2. Performs its lookups
//! 3. Formats and displays output
//!
//! Handlers are read-only; nothing here writes to the repository.

mod cat;
mod info;
mod show;

pub use cat::cat;
pub use info::info;
pub use show::show;

use std::path::PathBuf;

use anyhow::Result;

use super::args::Command;
use crate::git::{OpenOptions, Repository};
use crate::ui::output::{OidStyle, Verbosity};

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct Context {
    /// Repository path
    pub repo: PathBuf,
    /// How to open the repository
    pub options: OpenOptions,
    /// Output verbosity
    pub verbosity: Verbosity,
    /// Emit JSON instead of text
    pub json: bool,
    /// Abbreviated OID length
    pub abbrev: usize,
}

impl Context {
    /// Open the repository this context names.
    pub fn open(&self) -> Result<Repository> {
        Ok(Repository::open_with(&self.repo, &self.options)?)
    }

    /// OID rendering for text output.
    pub fn oid_style(&self, abbreviate: bool) -> OidStyle {
        if abbreviate {
            OidStyle {
                abbrev: Some(self.abbrev),
            }
        } else {
            OidStyle::FULL
        }
    }
}

/// Dispatch a parsed command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Info => info(ctx),
        Command::Show { oid, kind, abbrev } => show(ctx, oid, kind, abbrev),
        Command::Cat { oid } => cat(ctx, oid),
    }
}
