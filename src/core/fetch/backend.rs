//! Backend selection logic
//!
//! Picks the program the command backend runs.

use std::path::{Path, PathBuf};
use tracing::debug;

use super::CommandFetcher;
use crate::core::constants;
use crate::error::FetchError;

/// Default backend selection
///
/// In order: an explicit program path, then `ENVKEY_FETCH_BIN`, then
/// `envkey-fetch` found on `PATH`.
///
/// # Errors
///
/// Returns `FetchError::BackendNotFound` when nothing is configured and
/// `envkey-fetch` is not on `PATH`.
pub fn default_backend(explicit: Option<&Path>) -> Result<CommandFetcher, FetchError> {
    let program = resolve_program(explicit, std::env::var_os(constants::FETCH_BIN_VAR))?;
    debug!(program = %program.display(), "using command fetch backend");
    Ok(CommandFetcher::new(program))
}

fn resolve_program(
    explicit: Option<&Path>,
    from_env: Option<std::ffi::OsString>,
) -> Result<PathBuf, FetchError> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    if let Some(path) = from_env.filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }

    which::which(constants::FETCH_BIN)
        .map_err(|_| FetchError::BackendNotFound(constants::FETCH_BIN.to_string()))
}
