//! Settings file management.
//!
//! Reads optional defaults for the CLI from a TOML file:
//!
//! ```toml
//! fetch_bin = "/usr/local/bin/envkey-fetch"
//!
//! [fetch]
//! timeout_secs = 10.0
//! retries = 2
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::core::fetch::FetchOptions;
use crate::error::ConfigError;

/// Defaults read from a settings file.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Fetch backend program
    pub fetch_bin: Option<PathBuf>,
    /// Fetch option defaults
    pub fetch: FetchOptions,
}

impl Settings {
    /// Default settings path (`~/.envkey/config.toml`)
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(constants::CONFIG_FILE))
    }

    /// Parse settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed TOML or unknown fields, and
    /// `ConfigError::InvalidValue` for unusable fetch options.
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let settings: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        settings.fetch.validate()?;
        Ok(settings)
    }

    /// Load settings from `path`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file cannot be read, or a parse
    /// error as for [`Settings::parse`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "loading settings");
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse(&contents)
    }

    /// Resolve and load settings.
    ///
    /// An explicit path must exist. Otherwise `ENVKEY_CONFIG` is tried, then
    /// the default path; if neither names an existing file, built-in
    /// defaults are returned.
    ///
    /// # Errors
    ///
    /// Returns an error if a file that should be read cannot be read or
    /// parsed.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        if let Some(path) = std::env::var_os(constants::CONFIG_VAR).filter(|p| !p.is_empty()) {
            return Self::load(Path::new(&path));
        }

        match Self::default_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }
}
