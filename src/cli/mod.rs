//! Command-line interface.

pub mod json;
pub mod output;
pub mod source;

use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::core::config::Settings;
use crate::core::constants;
use crate::core::domain::DotEnv;
use crate::core::environment::{Environment, ProcessEnv};
use crate::core::fetch::FetchOptions;
use crate::core::shell::Format;
use crate::error::Result;

/// envkey-source - Fetch EnvKey config and print it for a shell.
#[derive(Parser, Debug)]
#[command(
    name = "envkey-source",
    about = "Fetches, decrypts, and verifies EnvKey config, then prints it as shell exports",
    long_about = "Fetches, decrypts, and verifies EnvKey config, then prints it as shell exports.\n\n\
                  Use with: eval \"$(envkey-source)\"",
    version,
    disable_version_flag = true
)]
pub struct Cli {
    /// Access token (defaults to $ENVKEY, then ENVKEY in ./.env)
    #[arg(value_name = "ENVKEY")]
    pub envkey: Option<String>,

    /// Cache encrypted config as a local backup
    #[arg(long)]
    pub cache: bool,

    /// Cache directory (default is $HOME/.envkey/cache)
    #[arg(long, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Calling client library name
    #[arg(long, value_name = "NAME")]
    pub client_name: Option<String>,

    /// Calling client library version
    #[arg(long, value_name = "VERSION")]
    pub client_version: Option<String>,

    /// Print the version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Print verbose output to stderr
    #[arg(long)]
    pub verbose: bool,

    /// Timeout in seconds for http requests [default: 20]
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<f64>,

    /// Number of times to retry requests on failure [default: 3]
    #[arg(long, value_name = "N")]
    pub retries: Option<u8>,

    /// Retry backoff factor: {retryBackoff} * (2 ^ {retries - 1}) [default: 1]
    #[arg(long = "retryBackoff", value_name = "FACTOR")]
    pub retry_backoff: Option<f64>,

    /// Print decrypted config as JSON instead of shell exports
    #[arg(long, conflicts_with_all = ["pam_compatible", "dot_env_compatible", "force"])]
    pub json: bool,

    /// Print one `export KEY='value'` per line without escaping (pam_env style)
    #[arg(long, conflicts_with = "dot_env_compatible")]
    pub pam_compatible: bool,

    /// Print `KEY='value'` lines compatible with .env files
    #[arg(long)]
    pub dot_env_compatible: bool,

    /// Overwrite variables that are already set in the environment
    #[arg(short, long)]
    pub force: bool,

    /// Fetch backend program (default: $ENVKEY_FETCH_BIN, then envkey-fetch on PATH)
    #[arg(long, value_name = "PATH")]
    pub fetch_bin: Option<PathBuf>,

    /// Settings file (default: $ENVKEY_CONFIG, then ~/.envkey/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Output format selected by flags.
    pub fn format(&self) -> Format {
        if self.dot_env_compatible {
            Format::DotEnv
        } else if self.pam_compatible {
            Format::PamCompatible
        } else {
            Format::Standard
        }
    }

    /// Layer explicit flags over `base`.
    pub fn fetch_options(&self, base: FetchOptions) -> FetchOptions {
        let mut options = base;

        options.should_cache |= self.cache;
        options.verbose |= self.verbose;
        if let Some(dir) = &self.cache_dir {
            options.cache_dir = Some(dir.clone());
        }
        if let Some(secs) = self.timeout {
            options.timeout_secs = secs;
        }
        if let Some(retries) = self.retries {
            options.retries = retries;
        }
        if let Some(factor) = self.retry_backoff {
            options.retry_backoff = factor;
        }

        if let Some(name) = &self.client_name {
            options.client_name = Some(name.clone());
        } else if options.client_name.is_none() {
            options.client_name = Some(constants::SOURCE_CLIENT_NAME.to_string());
        }
        if let Some(version) = &self.client_version {
            options.client_version = Some(version.clone());
        } else if options.client_version.is_none() {
            options.client_version = Some(env!("CARGO_PKG_VERSION").to_string());
        }

        options
    }
}

/// Resolved inputs for one run.
pub struct Context {
    pub token: Option<String>,
    pub options: FetchOptions,
    pub fetch_bin: Option<PathBuf>,
}

impl Context {
    /// Merge flags, settings file, and environment.
    ///
    /// # Errors
    ///
    /// Returns error if the settings file cannot be loaded or the resulting
    /// options are invalid.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let settings = Settings::discover(cli.config.as_deref())?;
        let options = cli.fetch_options(settings.fetch);
        options.validate()?;

        Ok(Self {
            token: resolve_token(cli.envkey.as_deref(), &ProcessEnv, Path::new(constants::ENV_FILE)),
            options,
            fetch_bin: cli.fetch_bin.clone().or(settings.fetch_bin),
        })
    }
}

/// Find the access token.
///
/// In order: the positional argument, `ENVKEY` in `env`, `ENVKEY` in the
/// .env file at `dotenv`. Empty values are skipped.
pub fn resolve_token<E: Environment + ?Sized>(
    arg: Option<&str>,
    env: &E,
    dotenv: &Path,
) -> Option<String> {
    if let Some(token) = arg.filter(|t| !t.is_empty()) {
        return Some(token.to_string());
    }

    if let Some(token) = env.get(constants::ENVKEY_VAR).filter(|t| !t.is_empty()) {
        return Some(token);
    }

    match DotEnv::load_optional(dotenv) {
        Ok(file) => file
            .and_then(|f| f.get(constants::ENVKEY_VAR).map(str::to_string))
            .filter(|t| !t.is_empty()),
        Err(e) => {
            warn!(path = %dotenv.display(), error = %e, "skipping unreadable .env file");
            None
        }
    }
}

/// Execute the command.
///
/// In shell mode a settings or option error is printed as the error snippet,
/// so `eval` fails instead of silently running nothing.
pub fn execute(cli: Cli) -> Result<()> {
    if cli.json {
        let ctx = Context::resolve(&cli)?;
        return json::execute(&ctx);
    }

    match Context::resolve(&cli) {
        Ok(ctx) => source::execute(&ctx, cli.force, cli.format()),
        Err(e) => {
            warn!(error = %e, "cannot fetch ENVKEY config");
            output::block(constants::INVALID_SNIPPET)?;
            Ok(())
        }
    }
}
