//! Shared CLI output helpers.
//!
//! stdout carries only text meant for `eval` or a pipe. Everything else,
//! errors and hints included, goes to stderr.
//!
//! Color scheme (respects NO_COLOR and non-terminal streams):
//! - Red: error prefix
//! - Cyan: hints

use console::style;
use std::io::{self, Write as IoWrite};

/// Print an error message to stderr.
///
/// Example: `error: ENVKEY invalid`
pub fn error(msg: &str) {
    eprintln!("{} {}", style("error:").for_stderr().red().bold(), msg);
}

/// Print a hint message to stderr (cyan).
///
/// Example: `→ set ENVKEY_FETCH_BIN to the envkey-fetch program`
pub fn hint(msg: &str) {
    eprintln!("{} {}", style("→").for_stderr().cyan(), style(msg).for_stderr().cyan());
}

/// Write a block of text to stdout, ending it with exactly one newline.
///
/// Empty text prints nothing.
pub fn block(text: &str) -> io::Result<()> {
    if text.is_empty() {
        return Ok(());
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()
}
