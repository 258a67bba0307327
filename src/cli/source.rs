//! Shell output mode.
//!
//! Prints eval-able exports. Failures are printed as shell text too, so the
//! calling shell sees them through its exit status.

use tracing::warn;

use crate::cli::{output, Context};
use crate::core::constants::INVALID_SNIPPET;
use crate::core::environment::ProcessEnv;
use crate::core::fetch::default_backend;
use crate::core::shell::{self, Format};
use crate::error::Result;

/// Fetch and print shell text.
pub fn execute(ctx: &Context, force: bool, format: Format) -> Result<()> {
    let text = match default_backend(ctx.fetch_bin.as_deref()) {
        Ok(fetcher) => shell::source(
            &fetcher,
            &ProcessEnv,
            ctx.token.as_deref().unwrap_or_default(),
            force,
            &ctx.options,
            format,
        ),
        Err(e) => {
            warn!(error = %e, "no fetch backend");
            INVALID_SNIPPET.to_string()
        }
    };

    output::block(&text)?;
    Ok(())
}
