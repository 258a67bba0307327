//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create an envkey-source command with a clean environment.
    ///
    /// Returns a Command configured with:
    /// - HOME set to the temporary home directory
    /// - Current directory set to the test project directory
    /// - ENVKEY_FETCH_BIN pointing at the fake backend
    /// - ENVKEY, ENVKEY_CONFIG, and ENVKEY_SOURCE_LOG removed
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd =
            Command::cargo_bin("envkey-source").expect("failed to find envkey-source binary");
        cmd.env("HOME", self.home.path());
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("ENVKEY_FETCH_BIN", self.backend_path());
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("ENVKEY");
        cmd.env_remove("ENVKEY_CONFIG");
        cmd.env_remove("ENVKEY_SOURCE_LOG");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `envkey-source <token> [args...]`.
    pub fn source(&self, token: &str, args: &[&str]) -> Output {
        self.cmd()
            .arg(token)
            .args(args)
            .output()
            .expect("failed to run envkey-source")
    }

    /// Shortcut for `envkey-source <token> --json [args...]`.
    pub fn json(&self, token: &str, args: &[&str]) -> Output {
        self.cmd()
            .arg(token)
            .arg("--json")
            .args(args)
            .output()
            .expect("failed to run envkey-source --json")
    }
}
