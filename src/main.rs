//! envkey-source - Fetch EnvKey config and print it for a shell.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use envkey::cli::output;
use envkey::cli::{execute, Cli};
use envkey::core::constants;
use envkey::error::{Error, FetchError};

fn main() {
    let cli = Cli::parse();

    // stdout is reserved for eval-able output; logs go to stderr
    let filter = EnvFilter::try_from_env(constants::LOG_VAR).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("envkey=debug")
        } else {
            EnvFilter::new("envkey=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Fetch(FetchError::BackendNotFound(_)) => {
                Some("install envkey-fetch or set ENVKEY_FETCH_BIN")
            }
            Error::Fetch(FetchError::MissingToken) => {
                Some("pass an ENVKEY argument or set the ENVKEY environment variable")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
