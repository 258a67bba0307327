//! Tests for the settings file.

use crate::support::*;

#[test]
fn test_default_settings_file_is_read() {
    let t = Test::new();
    let dir = t.home.path().join(".envkey");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[fetch]\nretries = 0\ntimeout_secs = 4.0\n").unwrap();

    let output = t.source(VALID_ENVKEY, &[]);
    assert_success(&output);
    assert!(t.backend_args().starts_with("--timeout 4 --retries 0 "));
}

#[test]
fn test_flags_override_settings_file() {
    let t = Test::new();
    let path = t.dir.path().join("envkey.toml");
    std::fs::write(&path, "[fetch]\nretries = 0\n").unwrap();

    let output = t
        .cmd()
        .arg("--config")
        .arg(&path)
        .args([VALID_ENVKEY, "--retries", "2"])
        .output()
        .unwrap();
    assert_success(&output);
    assert!(t.backend_args().contains("--retries 2 "));
}

#[test]
fn test_settings_file_from_environment() {
    let t = Test::new();
    let path = t.dir.path().join("envkey.toml");
    std::fs::write(&path, "[fetch]\nclient_name = \"from-settings\"\n").unwrap();

    let output = t
        .cmd()
        .env("ENVKEY_CONFIG", &path)
        .arg(VALID_ENVKEY)
        .output()
        .unwrap();
    assert_success(&output);
    assert!(t.backend_args().contains("--client-name from-settings "));
}

#[test]
fn test_settings_fetch_bin() {
    let t = Test::new();
    let path = t.dir.path().join("envkey.toml");
    std::fs::write(
        &path,
        format!("fetch_bin = {:?}\n", t.backend_path().display().to_string()),
    )
    .unwrap();

    let output = t
        .cmd()
        .env_remove("ENVKEY_FETCH_BIN")
        .arg("--config")
        .arg(&path)
        .arg(VALID_ENVKEY)
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_block(&output, BUNDLE_STANDARD);
}

#[test]
fn test_invalid_settings_file_prints_snippet() {
    let t = Test::new();
    let path = t.dir.path().join("envkey.toml");
    std::fs::write(&path, "[fetch]\nretries = \"many\"\n").unwrap();

    let output = t
        .cmd()
        .arg("--config")
        .arg(&path)
        .arg(VALID_ENVKEY)
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_block(&output, INVALID_SNIPPET);
    assert_stderr_contains(&output, "failed to parse settings file");
    assert!(!t.backend_ran());
}

#[test]
fn test_invalid_default_settings_file_fails_eval() {
    let t = Test::new();
    let dir = t.home.path().join(".envkey");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[fetch]\nretries = \"many\"\n").unwrap();

    let output = t.source(VALID_ENVKEY, &[]);
    assert_success(&output);
    assert_stdout_block(&output, INVALID_SNIPPET);

    let shell = std::process::Command::new("sh")
        .arg("-c")
        .arg(r#"eval "$OUT""#)
        .env("OUT", stdout(&output))
        .output()
        .unwrap();
    assert_failure(&shell);
}

#[test]
fn test_invalid_settings_file_fails_in_json_mode() {
    let t = Test::new();
    let path = t.dir.path().join("envkey.toml");
    std::fs::write(&path, "[fetch]\nretries = \"many\"\n").unwrap();

    let output = t
        .cmd()
        .arg("--config")
        .arg(&path)
        .args([VALID_ENVKEY, "--json"])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_eq!(stdout(&output), "");
    assert_stderr_contains(&output, "error: failed to parse settings file");
}

#[test]
fn test_missing_explicit_settings_file_prints_snippet() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["--config", "does-not-exist.toml", VALID_ENVKEY])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_block(&output, INVALID_SNIPPET);
    assert_stderr_contains(&output, "failed to read settings file");
}

#[test]
fn test_bad_settings_path_from_environment_prints_snippet() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("ENVKEY_CONFIG", t.dir.path().join("missing.toml"))
        .arg(VALID_ENVKEY)
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_block(&output, INVALID_SNIPPET);
    assert!(!t.backend_ran());
}
