//! Options passed to a fetch backend.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::core::constants;
use crate::error::ConfigError;

/// Per-call settings for a fetch.
///
/// Every field has a default, so a settings file or caller only names what it
/// changes:
///
/// ```
/// use envkey::core::fetch::FetchOptions;
///
/// let options = FetchOptions::default().retries(1).timeout_secs(2.0);
/// assert_eq!(options.retries, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FetchOptions {
    /// Keep an encrypted local backup of the bundle
    pub should_cache: bool,
    /// Cache location; `None` uses the backend's default ($HOME/.envkey/cache)
    pub cache_dir: Option<PathBuf>,
    /// Calling client library name, for diagnostics
    pub client_name: Option<String>,
    /// Calling client library version, for diagnostics
    pub client_version: Option<String>,
    /// Log the fetch attempt and forward backend diagnostics
    pub verbose: bool,
    /// Per-attempt network timeout in seconds
    pub timeout_secs: f64,
    /// Retries after the first failed attempt
    pub retries: u8,
    /// Backoff factor; see [`FetchOptions::retry_delay`]
    pub retry_backoff: f64,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            should_cache: false,
            cache_dir: None,
            client_name: None,
            client_version: None,
            verbose: false,
            timeout_secs: 20.0,
            retries: 3,
            retry_backoff: 1.0,
        }
    }
}

impl FetchOptions {
    /// Defaults used by the loader: short timeout, tagged with the loader's
    /// client name and no client version.
    pub fn loader(should_cache: bool) -> Self {
        Self {
            should_cache,
            client_name: Some(constants::LOADER_CLIENT_NAME.to_string()),
            timeout_secs: 15.0,
            ..Self::default()
        }
    }

    pub fn should_cache(mut self, should_cache: bool) -> Self {
        self.should_cache = should_cache;
        self
    }

    pub fn cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = Some(dir.into());
        self
    }

    pub fn client(mut self, name: impl Into<String>, version: Option<String>) -> Self {
        self.client_name = Some(name.into());
        self.client_version = version;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn timeout_secs(mut self, secs: f64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn retries(mut self, retries: u8) -> Self {
        self.retries = retries;
        self
    }

    pub fn retry_backoff(mut self, factor: f64) -> Self {
        self.retry_backoff = factor;
        self
    }

    /// Per-attempt timeout.
    ///
    /// Call [`FetchOptions::validate`] first; invalid values saturate.
    pub fn timeout(&self) -> Duration {
        Duration::try_from_secs_f64(self.timeout_secs).unwrap_or(Duration::MAX)
    }

    /// Wait before the `attempt`-th retry: `retry_backoff * 2^(attempt - 1)`.
    ///
    /// Attempt 0 is the initial request and has no wait.
    pub fn retry_delay(&self, attempt: u8) -> Duration {
        if attempt == 0 {
            return Duration::ZERO;
        }
        let secs = self.retry_backoff * 2f64.powi(i32::from(attempt) - 1);
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
    }

    /// Wait before the last retry, or zero when retries are disabled.
    pub fn final_retry_delay(&self) -> Duration {
        self.retry_delay(self.retries)
    }

    /// Check that numeric fields are usable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` when the timeout is not a positive
    /// finite number or the backoff is negative or not finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.timeout_secs.is_finite() || self.timeout_secs <= 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout",
                reason: format!("must be a positive number of seconds, got {}", self.timeout_secs),
            });
        }

        if !self.retry_backoff.is_finite() || self.retry_backoff < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "retryBackoff",
                reason: format!("must be zero or positive, got {}", self.retry_backoff),
            });
        }

        Ok(())
    }
}
