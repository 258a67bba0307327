//! Shell rendering of fetched variables.
//!
//! Turns a bundle into text meant for `eval "$(envkey-source ...)"`, or into
//! `.env` and pam_env style files.

use tracing::{debug, info, warn};

use crate::core::constants::INVALID_SNIPPET;
use crate::core::domain::ConfigMap;
use crate::core::environment::Environment;
use crate::core::fetch::{Fetch, FetchOptions};

/// Output convention for rendered variables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// `export 'K'='v' 'K2'='v2'` on one line
    #[default]
    Standard,
    /// `export K='v'` per line, quotes inside values left as-is
    PamCompatible,
    /// `K='v'` per line, newline terminated
    DotEnv,
}

/// Quote `value` as a single POSIX shell word.
///
/// Single quotes disable every expansion, so the only character needing care
/// is the single quote itself, which becomes `'"'"'`.
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    out.push_str(&value.replace('\'', r#"'"'"'"#));
    out.push('\'');
    out
}

/// Wrap `value` in single quotes without touching its contents.
///
/// pam_env files have no in-value escaping, so this is only safe for values
/// without single quotes.
pub fn raw_quote(value: &str) -> String {
    format!("'{}'", value)
}

/// Render `vars` in `format`.
///
/// Entries come out in ascending name order. An empty mapping renders as the
/// empty string.
pub fn render<'a, I>(vars: I, format: Format) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut vars = vars.into_iter().peekable();
    if vars.peek().is_none() {
        return String::new();
    }

    match format {
        Format::Standard => {
            let words: Vec<String> = vars
                .map(|(k, v)| format!("'{}'={}", k, escape(v)))
                .collect();
            format!("export {}", words.join(" "))
        }
        Format::PamCompatible => vars
            .map(|(k, v)| format!("export {}={}", k, raw_quote(v)))
            .collect::<Vec<_>>()
            .join("\n"),
        Format::DotEnv => vars
            .map(|(k, v)| format!("{}={}\n", k, escape(v)))
            .collect(),
    }
}

/// Fetch the bundle for `token` and render it as shell text.
///
/// Variables already set to a non-empty value in `env` are left out unless
/// `overwrite` is true, so evaluating the output never clobbers operator
/// configuration by default.
///
/// Any failure, whether fetching, parsing, or validating, yields
/// [`INVALID_SNIPPET`] whatever the format. The cause is logged, not
/// returned.
pub fn source<F, E>(
    fetcher: &F,
    env: &E,
    token: &str,
    overwrite: bool,
    options: &FetchOptions,
    format: Format,
) -> String
where
    F: Fetch + ?Sized,
    E: Environment + ?Sized,
{
    if options.verbose {
        info!(
            timeout_secs = options.timeout_secs,
            retries = options.retries,
            final_backoff_secs = options.final_retry_delay().as_secs_f64(),
            cache = options.should_cache,
            "fetching ENVKEY config"
        );
    }

    let text = match fetcher.fetch(token, options) {
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "fetch failed");
            return INVALID_SNIPPET.to_string();
        }
    };

    let vars = match ConfigMap::parse(&text) {
        Ok(vars) => vars,
        Err(e) => {
            warn!(error = %e, "fetch returned an unusable bundle");
            return INVALID_SNIPPET.to_string();
        }
    };

    let selected: Vec<(&str, &str)> = vars
        .iter()
        .filter(|(k, _)| {
            let keep = overwrite || !env.is_set(k);
            if !keep {
                debug!(key = %k, "already set, skipping");
            }
            keep
        })
        .collect();

    if options.verbose {
        info!(
            fetched = vars.len(),
            rendered = selected.len(),
            ?format,
            "fetched ENVKEY config"
        );
    }

    render(selected, format)
}
