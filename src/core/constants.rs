//! Constants used throughout envkey.
//!
//! Centralizes variable names, defaults, and fixed output.

/// Variable holding the access token.
pub const ENVKEY_VAR: &str = "ENVKEY";

/// Variable naming an explicit fetch backend program.
pub const FETCH_BIN_VAR: &str = "ENVKEY_FETCH_BIN";

/// Program searched on `PATH` when no backend is configured.
pub const FETCH_BIN: &str = "envkey-fetch";

/// Variable holding a settings file path.
pub const CONFIG_VAR: &str = "ENVKEY_CONFIG";

/// Settings file relative to HOME (~/.envkey/config.toml).
pub const CONFIG_FILE: &str = ".envkey/config.toml";

/// Log filter variable read by the binary.
pub const LOG_VAR: &str = "ENVKEY_SOURCE_LOG";

/// Dotenv file name (.env).
pub const ENV_FILE: &str = ".env";

/// Client name reported by the loader.
pub const LOADER_CLIENT_NAME: &str = "envkey-rs";

/// Client name reported by the envkey-source binary.
pub const SOURCE_CLIENT_NAME: &str = "envkey-source";

/// Shell text returned when a bundle cannot be fetched.
///
/// Prints a diagnostic and leaves the shell's last status nonzero.
pub const INVALID_SNIPPET: &str = "echo 'error: ENVKEY invalid'; false";
