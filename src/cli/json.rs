//! JSON output mode.
//!
//! Prints the decrypted bundle exactly as the fetch backend returned it.

use crate::cli::{output, Context};
use crate::core::fetch::{default_backend, Fetch};
use crate::error::{FetchError, Result};

/// Fetch and print the bundle as JSON.
pub fn execute(ctx: &Context) -> Result<()> {
    let token = ctx.token.as_deref().ok_or(FetchError::MissingToken)?;
    let fetcher = default_backend(ctx.fetch_bin.as_deref())?;
    let text = fetcher.fetch(token, &ctx.options)?;

    output::block(&text)?;
    Ok(())
}
