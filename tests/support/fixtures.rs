//! Test fixtures and constants.

/// Token the fake backend accepts.
pub const VALID_ENVKEY: &str = "Vd3k4Yq2mTn8RwLp-api.envkey.test";

/// Token the fake backend rejects.
pub const INVALID_ENVKEY: &str = "Xx00invalid00Xx-api.envkey.test";

/// Shell text printed for every fetch failure.
pub const INVALID_SNIPPET: &str = "echo 'error: ENVKEY invalid'; false";

/// Bundle with values that need careful quoting.
pub const BUNDLE: &str = r#"{
  "TEST": "it",
  "TEST_2": "works!",
  "TEST_INJECTION": "'$(uname)",
  "TEST_SINGLE_QUOTES": "this' is ok",
  "TEST_SPACES": "it does work!",
  "TEST_STRANGE_CHARS": "with quotes ` ' \\\" bäh"
}"#;

/// Small bundle used by the loader examples.
pub const SIMPLE_BUNDLE: &str = r#"{"TEST":"it","TEST_2":"works!"}"#;

/// Expected standard output for `BUNDLE`.
pub const BUNDLE_STANDARD: &str = r#"export 'TEST'='it' 'TEST_2'='works!' 'TEST_INJECTION'=''"'"'$(uname)' 'TEST_SINGLE_QUOTES'='this'"'"' is ok' 'TEST_SPACES'='it does work!' 'TEST_STRANGE_CHARS'='with quotes ` '"'"' \" bäh'"#;

/// Expected pam_env output for `BUNDLE`.
pub const BUNDLE_PAM: &str = "export TEST='it'\nexport TEST_2='works!'\nexport TEST_INJECTION=''$(uname)'\nexport TEST_SINGLE_QUOTES='this' is ok'\nexport TEST_SPACES='it does work!'\nexport TEST_STRANGE_CHARS='with quotes ` ' \\\" bäh'";

/// Expected .env output for `BUNDLE`.
pub const BUNDLE_DOTENV: &str = "TEST='it'\nTEST_2='works!'\nTEST_INJECTION=''\"'\"'$(uname)'\nTEST_SINGLE_QUOTES='this'\"'\"' is ok'\nTEST_SPACES='it does work!'\nTEST_STRANGE_CHARS='with quotes ` '\"'\"' \\\" bäh'\n";

/// Fake `envkey-fetch`: serves bundle.json for `VALID_ENVKEY`, records its
/// arguments, and reports progress on stderr.
pub const FAKE_BACKEND: &str = r#"#!/bin/sh
here="$(dirname "$0")"
token="$1"
shift
printf '%s\n' "$*" > "$here/last-args"
echo "fetch: attempt 1" >&2
if [ "$token" = "Vd3k4Yq2mTn8RwLp-api.envkey.test" ]; then
  cat "$here/bundle.json"
  exit 0
fi
echo "error: ENVKEY invalid" >&2
exit 1
"#;
