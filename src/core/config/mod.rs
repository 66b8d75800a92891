//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! Searched in order, first existing file wins:
//! 1. `$GITOBJ_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/gitobj/config.toml`
//! 3. `~/.gitobj/config.toml`
//!
//! # Example
//!
//! ```no_run
//! use gitobj::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! println!("discover: {}", config.discover());
//! println!("abbrev: {}", config.abbrev());
//! ```

pub mod schema;

pub use schema::{FileConfig, OpenDefaults, OutputDefaults};

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Default number of hex digits shown for abbreviated OIDs.
pub const DEFAULT_ABBREV: usize = 7;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Loaded configuration.
///
/// Accessor methods apply defaults for anything the file leaves unset.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed file contents
    pub file: FileConfig,
    /// Path the file was loaded from (if any)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read or parsed.
    /// A missing config file is not an error (defaults are used).
    pub fn load() -> Result<Self, ConfigError> {
        match Self::locate() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Build configuration from already parsed file contents.
    pub fn from_file(file: FileConfig) -> Self {
        Self { file, path: None }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file: FileConfig = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        file.validate()?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(Self {
            file,
            path: Some(path.to_path_buf()),
        })
    }

    /// Find the first existing config file.
    fn locate() -> Option<PathBuf> {
        // 1. Check $GITOBJ_CONFIG
        if let Ok(path) = std::env::var("GITOBJ_CONFIG") {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        // 2. Check $XDG_CONFIG_HOME/gitobj/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("gitobj/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. Check ~/.gitobj/config.toml
        let path = dirs::home_dir()?.join(".gitobj/config.toml");
        path.exists().then_some(path)
    }

    /// Whether to search parent directories for a repository.
    ///
    /// Defaults to `false`.
    pub fn discover(&self) -> bool {
        self.file
            .open
            .as_ref()
            .and_then(|o| o.discover)
            .unwrap_or(false)
    }

    /// Directories at which discovery stops.
    ///
    /// Defaults to none.
    pub fn ceiling_dirs(&self) -> &[PathBuf] {
        self.file
            .open
            .as_ref()
            .and_then(|o| o.ceiling_dirs.as_deref())
            .unwrap_or(&[])
    }

    /// Whether bare repositories are rejected.
    ///
    /// Defaults to `false`.
    pub fn require_workdir(&self) -> bool {
        self.file
            .open
            .as_ref()
            .and_then(|o| o.require_workdir)
            .unwrap_or(false)
    }

    /// Abbreviated OID length.
    ///
    /// Defaults to [`DEFAULT_ABBREV`].
    pub fn abbrev(&self) -> usize {
        self.file
            .output
            .as_ref()
            .and_then(|o| o.abbrev)
            .unwrap_or(DEFAULT_ABBREV)
    }

    /// Whether output defaults to JSON.
    ///
    /// Defaults to `false`.
    pub fn json(&self) -> bool {
        self.file
            .output
            .as_ref()
            .and_then(|o| o.json)
            .unwrap_or(false)
    }

    /// Get the path to the loaded config file.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert!(!config.discover());
        assert!(config.ceiling_dirs().is_empty());
        assert!(!config.require_workdir());
        assert_eq!(config.abbrev(), DEFAULT_ABBREV);
        assert!(!config.json());
        assert!(config.loaded_from().is_none());
    }

    #[test]
    fn load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            r#"
            [open]
            discover = true
            require_workdir = true

            [output]
            abbrev = 10
            "#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.discover());
        assert!(config.require_workdir());
        assert_eq!(config.abbrev(), 10);
        assert!(!config.json());
        assert_eq!(config.loaded_from(), Some(path.as_path()));
    }

    #[test]
    fn missing_file_is_read_error() {
        let temp = TempDir::new().unwrap();
        let result = Config::load_from(&temp.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::ReadError { .. })));
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[open\ndiscover = ").unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }

    #[test]
    fn unknown_fields_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[open]\nsearch = true\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn invalid_abbrev_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "[output]\nabbrev = 2\n").unwrap();

        let result = Config::load_from(&path);
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }
}
