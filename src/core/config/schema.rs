//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Location
//!
//! Searched in order:
//! 1. `$GITOBJ_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/gitobj/config.toml`
//! 3. `~/.gitobj/config.toml`
//!
//! # Validation
//!
//! Config values are validated after parsing (e.g., `abbrev` must be a
//! usable OID abbreviation length).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::types::Oid;

/// Shortest abbreviation accepted for `output.abbrev`.
pub const MIN_ABBREV: usize = 4;

/// File configuration.
///
/// # Example
///
/// ```toml
/// [open]
/// discover = true
/// ceiling_dirs = ["/home"]
/// require_workdir = false
///
/// [output]
/// abbrev = 10
/// json = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// How repositories are opened
    pub open: Option<OpenDefaults>,

    /// How objects are printed
    pub output: Option<OutputDefaults>,
}

impl FileConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(output) = &self.output {
            output.validate()?;
        }
        Ok(())
    }
}

/// Defaults for opening repositories.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OpenDefaults {
    /// Search parent directories for a repository
    pub discover: Option<bool>,

    /// Directories at which the upward search stops
    pub ceiling_dirs: Option<Vec<PathBuf>>,

    /// Reject bare repositories
    pub require_workdir: Option<bool>,
}

/// Defaults for printing objects.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputDefaults {
    /// Number of hex digits shown for abbreviated OIDs
    pub abbrev: Option<usize>,

    /// Emit JSON instead of text
    pub json: Option<bool>,
}

impl OutputDefaults {
    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(abbrev) = self.abbrev {
            if !(MIN_ABBREV..=Oid::HEX_LEN).contains(&abbrev) {
                return Err(ConfigError::InvalidValue(format!(
                    "output.abbrev must be between {} and {}, got {}",
                    MIN_ABBREV,
                    Oid::HEX_LEN,
                    abbrev
                )));
            }
        }
        Ok(())
    }
}
