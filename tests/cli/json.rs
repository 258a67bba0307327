//! Tests for `--json` output.

use crate::support::*;

#[test]
fn test_json_prints_bundle() {
    let t = Test::new();

    let output = t.json(VALID_ENVKEY, &[]);
    assert_success(&output);

    let printed: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let expected: serde_json::Value = serde_json::from_str(BUNDLE).unwrap();
    assert_eq!(printed, expected);
}

#[test]
fn test_json_invalid_envkey_exits_with_error() {
    let t = Test::new();

    let output = t.json(INVALID_ENVKEY, &[]);
    assert_failure(&output);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    assert!(
        stderr(&output).starts_with("error: ENVKEY invalid"),
        "got: {}",
        stderr(&output)
    );
}

#[test]
fn test_json_missing_token() {
    let t = Test::new();

    let output = t.cmd().arg("--json").output().unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "error: missing ENVKEY");
    assert!(!t.backend_ran());
}

#[test]
fn test_json_missing_backend() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("ENVKEY_FETCH_BIN", t.dir.path().join("no-such-program"))
        .args([VALID_ENVKEY, "--json"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "fetch backend not found");
    assert_stderr_contains(&output, "ENVKEY_FETCH_BIN");
}

#[test]
fn test_json_conflicts_with_shell_formats() {
    let t = Test::new();

    for flag in ["--pam-compatible", "--dot-env-compatible", "--force"] {
        let output = t.json(VALID_ENVKEY, &[flag]);
        assert_failure(&output);
    }
}
