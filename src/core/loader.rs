//! Loading fetched variables into an environment.
//!
//! The loader augments an environment; it never replaces a value an operator
//! already set.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::core::constants;
use crate::core::domain::{ConfigMap, DotEnv};
use crate::core::environment::{Environment, ProcessEnv};
use crate::core::fetch::{default_backend, Fetch, FetchOptions};
use crate::error::LoadError;

/// Fetches a bundle and merges it into an environment.
///
/// ```no_run
/// use envkey::core::environment::ProcessEnv;
/// use envkey::core::fetch::default_backend;
/// use envkey::core::loader::Loader;
///
/// let fetcher = default_backend(None)?;
/// Loader::new(fetcher).dotenv(".env").load(&mut ProcessEnv)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Loader<F> {
    fetcher: F,
    options: FetchOptions,
    dotenv: Option<PathBuf>,
}

impl<F: Fetch> Loader<F> {
    /// Create a loader with the loader defaults and caching off.
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            options: FetchOptions::loader(false),
            dotenv: None,
        }
    }

    /// Keep an encrypted local backup of the bundle.
    pub fn should_cache(mut self, should_cache: bool) -> Self {
        self.options.should_cache = should_cache;
        self
    }

    /// Replace the fetch options entirely.
    pub fn options(mut self, options: FetchOptions) -> Self {
        self.options = options;
        self
    }

    /// Merge a .env file into the environment before reading `ENVKEY`.
    ///
    /// The file is optional; a missing file is skipped.
    pub fn dotenv(mut self, path: impl Into<PathBuf>) -> Self {
        self.dotenv = Some(path.into());
        self
    }

    /// Fetch options this loader will use
    pub fn fetch_options(&self) -> &FetchOptions {
        &self.options
    }

    /// Populate `env` from the bundle named by its `ENVKEY` variable.
    ///
    /// Each fetched variable is set only if `env` has it unset or empty.
    /// No fetched variable is written unless the whole bundle was fetched and
    /// parsed. Entries from the .env file, if any, are merged before fetching.
    ///
    /// # Errors
    ///
    /// - `LoadError::MissingToken` if `ENVKEY` is unset or empty
    /// - `LoadError::Fetch` if the backend fails
    /// - `LoadError::MalformedResponse` if the bundle cannot be parsed
    pub fn load<E: Environment + ?Sized>(&self, env: &mut E) -> Result<(), LoadError> {
        if let Some(path) = &self.dotenv {
            load_dotenv(env, path);
        }

        let token = env
            .get(constants::ENVKEY_VAR)
            .filter(|t| !t.is_empty())
            .ok_or(LoadError::MissingToken)?;

        let text = self.fetcher.fetch(&token, &self.options)?;
        let vars = ConfigMap::parse(&text)?;

        let applied = merge(env, &vars);
        debug!(fetched = vars.len(), applied, "loaded ENVKEY config");

        Ok(())
    }
}

/// Set every variable of `vars` that `env` has unset or empty.
///
/// Returns how many variables were written.
pub fn merge<E: Environment + ?Sized>(env: &mut E, vars: &ConfigMap) -> usize {
    let mut applied = 0;

    for (key, value) in vars.iter() {
        if env.is_set(key) {
            debug!(key, "already set, keeping existing value");
            continue;
        }
        env.set(key, value);
        applied += 1;
    }

    applied
}

/// Merge a .env file without overriding existing values.
///
/// A key assigned twice in the file takes its last value, as
/// [`DotEnv::get`] does. Unreadable files are logged and skipped.
fn load_dotenv<E: Environment + ?Sized>(env: &mut E, path: &Path) {
    match DotEnv::load_optional(path) {
        Ok(Some(dotenv)) => {
            let entries: BTreeMap<&str, &str> = dotenv
                .entries()
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            for (key, value) in entries {
                if !env.is_set(key) {
                    env.set(key, value);
                }
            }
            debug!(path = %path.display(), entries = dotenv.len(), "merged .env file");
        }
        Ok(None) => {}
        Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable .env file"),
    }
}

/// Load the current process environment with the default backend.
///
/// Merges `./.env` first. Caching is enabled when `./.env` exists.
///
/// # Errors
///
/// Same as [`Loader::load`]; a missing backend is reported as
/// `LoadError::Fetch`.
pub fn autoload() -> Result<(), LoadError> {
    let should_cache = Path::new(constants::ENV_FILE).exists();
    let fetcher = default_backend(None)?;

    Loader::new(fetcher)
        .should_cache(should_cache)
        .dotenv(constants::ENV_FILE)
        .load(&mut ProcessEnv)
}
