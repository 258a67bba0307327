//! External command backend.
//!
//! Runs the `envkey-fetch` program, which downloads, verifies, and decrypts a
//! bundle and prints it as JSON.
//!
//! ## Requirements
//!
//! - `envkey-fetch` must be installed, or its path given explicitly
//! - Exit status 0 with JSON on stdout on success
//! - Nonzero exit status with `error: <message>` on stderr on failure

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, info};
use zeroize::Zeroizing;

use super::{Fetch, FetchOptions};
use crate::error::FetchError;

/// Fetch backend that runs an external program.
#[derive(Debug, Clone)]
pub struct CommandFetcher {
    program: PathBuf,
}

impl CommandFetcher {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Program that will be run
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Command line passed to the program for one fetch.
    ///
    /// The token comes first; flags mirror the `envkey-fetch` CLI.
    pub fn args(token: &str, options: &FetchOptions) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            token.into(),
            "--timeout".into(),
            options.timeout_secs.to_string().into(),
            "--retries".into(),
            options.retries.to_string().into(),
            "--retryBackoff".into(),
            options.retry_backoff.to_string().into(),
        ];

        if options.should_cache {
            args.push("--cache".into());
        }
        if let Some(dir) = &options.cache_dir {
            args.push("--cache-dir".into());
            args.push(dir.as_os_str().to_owned());
        }
        if let Some(name) = &options.client_name {
            args.push("--client-name".into());
            args.push(name.into());
        }
        if let Some(version) = &options.client_version {
            args.push("--client-version".into());
            args.push(version.into());
        }
        if options.verbose {
            args.push("--verbose".into());
        }

        args
    }
}

impl Fetch for CommandFetcher {
    fn fetch(&self, token: &str, options: &FetchOptions) -> Result<Zeroizing<String>, FetchError> {
        if token.is_empty() {
            return Err(FetchError::MissingToken);
        }

        debug!(
            program = %self.program.display(),
            timeout_secs = options.timeout_secs,
            retries = options.retries,
            "running fetch backend"
        );

        let output = Command::new(&self.program)
            .args(Self::args(token, options))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => {
                    FetchError::BackendNotFound(self.program.display().to_string())
                }
                _ => FetchError::Spawn(e),
            })?;

        let stdout = Zeroizing::new(output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);

        if options.verbose {
            for line in stderr.lines().filter(|l| !l.trim().is_empty()) {
                info!(target: "envkey::fetch", "{}", line);
            }
        }

        if !output.status.success() {
            debug!(status = ?output.status.code(), "fetch backend failed");
            return Err(FetchError::Rejected(failure_message(&stderr, output.status)));
        }

        let text = std::str::from_utf8(&stdout).map_err(|_| FetchError::InvalidOutput)?;
        Ok(Zeroizing::new(text.trim().to_string()))
    }
}

/// Last `error:` line of the backend's stderr, without its prefix.
fn failure_message(stderr: &str, status: std::process::ExitStatus) -> String {
    let lines: Vec<&str> = stderr
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let line = lines
        .iter()
        .rev()
        .find(|l| l.starts_with("error:"))
        .or_else(|| lines.last());

    match line {
        Some(line) => line.strip_prefix("error:").unwrap_or(line).trim().to_string(),
        None => match status.code() {
            Some(code) => format!("fetch backend exited with status {}", code),
            None => "fetch backend terminated by signal".to_string(),
        },
    }
}
