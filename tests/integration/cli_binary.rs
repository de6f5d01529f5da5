//! Integration tests for the clawmerge binary.
//!
//! Each test runs the binary with an isolated HOME and XDG_CONFIG_HOME.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

struct Sandbox {
    _temp: TempDir,
    home: PathBuf,
    config_home: PathBuf,
}

impl Sandbox {
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let home = temp.path().join("home");
        let config_home = temp.path().join("config");
        fs::create_dir_all(home.join(".openclaw")).unwrap();
        fs::create_dir_all(&config_home).unwrap();
        Self {
            _temp: temp,
            home,
            config_home,
        }
    }

    fn default_target(&self) -> PathBuf {
        self.home.join(".openclaw").join("openclaw.json")
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_clawmerge"));
        cmd.env("HOME", &self.home)
            .env("XDG_CONFIG_HOME", &self.config_home)
            .env_remove("CLAWMERGE_TARGET")
            .env_remove("CLAWMERGE_API_KEY")
            .env_remove("CLAWMERGE_API_KEY_FILE")
            .env_remove("CLAWMERGE_LOG")
            .env_remove("CLAWMERGE_LOG_FORMAT");
        cmd
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn api_key(path: &Path) -> String {
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    value["models"]["providers"]["nexus"]["apiKey"]
        .as_str()
        .unwrap()
        .to_string()
}

#[test]
fn test_default_target_with_env_credential() {
    let sandbox = Sandbox::new();
    fs::write(sandbox.default_target(), r#"{"gateway": {"port": 8000}}"#).unwrap();

    let output = sandbox
        .command()
        .env("CLAWMERGE_API_KEY", "cr_from_env")
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert_eq!(stdout(&output), "merged\n");
    assert_eq!(api_key(&sandbox.default_target()), "cr_from_env");
}

#[test]
fn test_target_flag_and_key_file() {
    let sandbox = Sandbox::new();
    let target = sandbox.home.join("custom.json");
    let key_file = sandbox.home.join("nexus.key");
    fs::write(&target, "{}").unwrap();
    fs::write(&key_file, "cr_from_file\n").unwrap();

    let output = sandbox
        .command()
        .env("CLAWMERGE_API_KEY", "cr_from_env")
        .arg("--target")
        .arg(&target)
        .arg("--api-key-file")
        .arg(&key_file)
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert_eq!(api_key(&target), "cr_from_file");
    assert!(!sandbox.default_target().exists());
}

#[test]
fn test_global_settings_file() {
    let sandbox = Sandbox::new();
    let target = sandbox.home.join("from-settings.json");
    fs::write(&target, "{}").unwrap();
    fs::create_dir_all(sandbox.config_home.join("clawmerge")).unwrap();
    fs::write(
        sandbox.config_home.join("clawmerge").join("config.toml"),
        format!("target = {:?}\napi_key = \"cr_from_settings\"\n", target),
    )
    .unwrap();

    let output = sandbox.command().output().unwrap();

    assert!(output.status.success(), "stderr={}", stderr(&output));
    assert_eq!(api_key(&target), "cr_from_settings");
}

#[test]
fn test_missing_credential_fails() {
    let sandbox = Sandbox::new();
    fs::write(sandbox.default_target(), "{}").unwrap();

    let output = sandbox.command().output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Missing credential"));
    assert_eq!(fs::read_to_string(sandbox.default_target()).unwrap(), "{}");
}

#[test]
fn test_empty_env_credential_is_missing() {
    let sandbox = Sandbox::new();
    fs::write(sandbox.default_target(), "{}").unwrap();

    let output = sandbox
        .command()
        .env("CLAWMERGE_API_KEY", "")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Missing credential"));
    assert_eq!(fs::read_to_string(sandbox.default_target()).unwrap(), "{}");
}

#[test]
fn test_missing_target_fails() {
    let sandbox = Sandbox::new();

    let output = sandbox
        .command()
        .env("CLAWMERGE_API_KEY", "k")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to parse"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_invalid_json_untouched() {
    let sandbox = Sandbox::new();
    fs::write(sandbox.default_target(), "{ not json").unwrap();

    let output = sandbox
        .command()
        .env("CLAWMERGE_API_KEY", "k")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        fs::read_to_string(sandbox.default_target()).unwrap(),
        "{ not json"
    );
}

#[test]
fn test_dry_run_prints_redacted_preview() {
    let sandbox = Sandbox::new();
    fs::write(sandbox.default_target(), "{}").unwrap();

    let output = sandbox
        .command()
        .env("CLAWMERGE_API_KEY", "cr_secret")
        .arg("--dry-run")
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr={}", stderr(&output));
    let printed = stdout(&output);
    let preview: serde_json::Value = serde_json::from_str(&printed).unwrap();
    assert_eq!(preview["models"]["providers"]["nexus"]["apiKey"], "[REDACTED]");
    assert!(!printed.contains("cr_secret"));
    assert_eq!(fs::read_to_string(sandbox.default_target()).unwrap(), "{}");
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    let sandbox = Sandbox::new();
    fs::write(sandbox.default_target(), "{}").unwrap();

    let output = sandbox
        .command()
        .env("CLAWMERGE_API_KEY", "cr_secret")
        .arg("--verbose")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(stdout(&output), "merged\n");
    let logs = stderr(&output);
    assert!(logs.contains("Merging config"));
    assert!(!logs.contains("cr_secret"));
}
