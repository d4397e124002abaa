//! CLI integration tests
//!
//! These tests run the built binary with controlled `INPUT_*` variables and
//! check exit codes, error messages and the commands that reach the shell.

use electron_release::InputName;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn electron_release_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_electron-release"))
}

/// Command with every action input cleared so the host environment can't leak in.
fn action_command() -> Command {
    let mut cmd = Command::new(electron_release_bin());
    for name in InputName::all() {
        cmd.env_remove(name.env_var());
    }
    cmd.env_remove("INPUT_DO_SECRET_KEY")
        .env_remove("RUST_LOG")
        .env_remove("ELECTRON_RELEASE_LOG_LEVEL")
        .env_remove("ELECTRON_RELEASE_LOG_JSON");
    cmd
}

/// Adds the signing inputs every platform might ask for.
fn with_signing_inputs(cmd: &mut Command) -> &mut Command {
    cmd.env("INPUT_MAC_CERTS", "base64-p12")
        .env("INPUT_MAC_CERTS_PASSWORD", "p12-pass")
        .env("INPUT_APPLE_ID", "dev@example.com")
        .env("INPUT_APPLE_ID_PASS", "app-specific")
        .env("INPUT_WINDOWS_CERTS", "base64-pfx")
        .env("INPUT_WINDOWS_CERTS_PASSWORD", "pfx-pass")
}

fn create_electron_project(dir: &Path, with_lockfile: bool) -> PathBuf {
    let root = dir.join("app");
    fs::create_dir_all(&root).expect("Failed to create project directory");
    fs::write(
        root.join("package.json"),
        r#"{ "name": "demo", "devDependencies": { "electron-builder": "^24.0.0" } }"#,
    )
    .expect("Failed to write package.json");
    if with_lockfile {
        fs::write(root.join("package-lock.json"), "{}").expect("Failed to write lockfile");
    }
    root
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_cli_help() {
    let output = Command::new(electron_release_bin())
        .arg("--help")
        .output()
        .expect("Failed to execute electron-release");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("electron-release"));
    assert!(stdout.contains("run"));
    assert!(stdout.contains("plan"));
}

#[test]
fn test_cli_version() {
    let output = Command::new(electron_release_bin())
        .arg("--version")
        .output()
        .expect("Failed to execute electron-release");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("electron-release"));
}

#[test]
fn test_missing_package_root() {
    let output = action_command()
        .env("INPUT_PROVIDER", "github")
        .output()
        .expect("Failed to execute electron-release");

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("\"package_root\" input variable is not defined"));
}

#[test]
fn test_github_without_token() {
    let temp = TempDir::new().unwrap();
    let root = create_electron_project(temp.path(), true);

    let output = action_command()
        .env("INPUT_PACKAGE_ROOT", &root)
        .env("INPUT_PROVIDER", "github")
        .output()
        .expect("Failed to execute electron-release");

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("\"github_token\" input variable is not defined"));
    assert!(!err.contains("Installing dependencies"));
}

#[test]
fn test_unknown_provider() {
    let temp = TempDir::new().unwrap();
    let root = create_electron_project(temp.path(), false);

    let output = action_command()
        .env("INPUT_PACKAGE_ROOT", &root)
        .env("INPUT_PROVIDER", "unknown")
        .output()
        .expect("Failed to execute electron-release");

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("\"unknown\" not supported"));
}

#[test]
fn test_missing_manifest() {
    let temp = TempDir::new().unwrap();

    let output = action_command()
        .env("INPUT_PACKAGE_ROOT", temp.path())
        .env("INPUT_PROVIDER", "github")
        .env("INPUT_GITHUB_TOKEN", "ghp_token")
        .output()
        .expect("Failed to execute electron-release");

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("`package.json` file not found at path"));
    assert!(!err.contains("Installing dependencies"));
}

#[test]
fn test_failure_is_logged_and_printed() {
    let output = action_command()
        .env("INPUT_PROVIDER", "github")
        .env("ELECTRON_RELEASE_LOG_JSON", "true")
        .output()
        .expect("Failed to execute electron-release");

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("\"level\":\"ERROR\""), "stderr: {}", err);
    assert!(err
        .lines()
        .any(|line| line == "\"package_root\" input variable is not defined"));
}

#[test]
fn test_invalid_log_level_warns_once() {
    let output = action_command()
        .env("ELECTRON_RELEASE_LOG_LEVEL", "loud")
        .env("INPUT_PROVIDER", "github")
        .output()
        .expect("Failed to execute electron-release");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output).matches("Invalid log level").count(), 1);
}

#[test]
fn test_invalid_cli_log_level_warns_once() {
    let output = action_command()
        .args(["--log-level", "loud", "plan"])
        .env("INPUT_PROVIDER", "github")
        .output()
        .expect("Failed to execute electron-release");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output).matches("Invalid log level").count(), 1);
}

#[test]
fn test_plan_json_with_lockfile() {
    let temp = TempDir::new().unwrap();
    let root = create_electron_project(temp.path(), true);

    let output = with_signing_inputs(&mut action_command())
        .env("INPUT_PACKAGE_ROOT", &root)
        .env("INPUT_PROVIDER", "spaces")
        .env("INPUT_DO_KEY_ID", "key-id")
        .env("INPUT_DO_SERCET_KEY", "do-secret")
        .args(["plan", "--format", "json"])
        .output()
        .expect("Failed to execute electron-release");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let plan: serde_json::Value = serde_json::from_str(&stdout).expect("plan is JSON");

    assert_eq!(plan["provider"], "spaces");
    assert_eq!(plan["package_manager"], "npm");
    assert_eq!(plan["install"]["line"], "npm install");
    assert_eq!(plan["env"]["DO_KEY_ID"], "***");
    assert_eq!(plan["env"]["DO_SECRET_KEY"], "***");
    assert_eq!(plan["env"]["ADBLOCK"], "true");
    assert!(!stdout.contains("do-secret"));
    assert!(!stdout.contains("p12-pass"));
}

#[test]
fn test_plan_human_without_lockfile() {
    let temp = TempDir::new().unwrap();
    let root = create_electron_project(temp.path(), false);

    let output = with_signing_inputs(&mut action_command())
        .env("INPUT_PACKAGE_ROOT", &root)
        .env("INPUT_PROVIDER", "github")
        .env("INPUT_GITHUB_TOKEN", "ghp_token")
        .arg("plan")
        .output()
        .expect("Failed to execute electron-release");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Install: yarn"));
    assert!(stdout.contains("yarn run electron-builder --"));
    assert!(stdout.contains("--publish always"));
    assert!(!stdout.contains("ghp_token"));
}

#[test]
fn test_dry_run_spawns_nothing() {
    let temp = TempDir::new().unwrap();
    let root = create_electron_project(temp.path(), true);

    let output = with_signing_inputs(&mut action_command())
        .env("INPUT_PACKAGE_ROOT", &root)
        .env("INPUT_PROVIDER", "github")
        .env("INPUT_GITHUB_TOKEN", "ghp_token")
        .env("PATH", "")
        .args(["run", "--dry-run"])
        .output()
        .expect("Failed to execute electron-release");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let err = stderr(&output);
    assert!(err.contains("[dry-run] npm install"));
    assert!(err.contains("[dry-run] npx --no-install electron-builder --"));
}

#[cfg(unix)]
mod with_fake_tools {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    /// Puts stub `yarn`, `npm` and `npx` executables on PATH. Each appends its
    /// invocation and the projected variables to `calls.log`.
    fn install_fake_tools(dir: &Path) -> (PathBuf, PathBuf) {
        let bin = dir.join("bin");
        fs::create_dir_all(&bin).unwrap();
        let log = dir.join("calls.log");

        for tool in ["yarn", "npm", "npx"] {
            let script = format!(
                "#!/bin/sh\n\
                 echo \"{tool} $* | ADBLOCK=$ADBLOCK GH_TOKEN=$GH_TOKEN PWD=$(pwd)\" >> \"{log}\"\n\
                 exit ${{FAKE_EXIT_{upper}:-0}}\n",
                tool = tool,
                log = log.display(),
                upper = tool.to_uppercase(),
            );
            let path = bin.join(tool);
            fs::write(&path, script).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        }

        (bin, log)
    }

    fn path_with(bin: &Path) -> String {
        match std::env::var("PATH") {
            Ok(path) => format!("{}:{}", bin.display(), path),
            Err(_) => bin.display().to_string(),
        }
    }

    #[test]
    fn test_run_yarn_project() {
        let temp = TempDir::new().unwrap();
        let root = create_electron_project(temp.path(), false);
        let (bin, log) = install_fake_tools(temp.path());

        let output = with_signing_inputs(&mut action_command())
            .env("PATH", path_with(&bin))
            .env("INPUT_PACKAGE_ROOT", &root)
            .env("INPUT_PROVIDER", "github")
            .env("INPUT_GITHUB_TOKEN", "ghp_token")
            .output()
            .expect("Failed to execute electron-release");

        assert!(output.status.success(), "stderr: {}", stderr(&output));
        let calls = fs::read_to_string(&log).unwrap();
        let lines: Vec<&str> = calls.lines().collect();
        assert_eq!(lines.len(), 2, "calls: {}", calls);
        assert!(lines[0].starts_with("yarn  | ADBLOCK=true GH_TOKEN=ghp_token"));
        assert!(lines[1].starts_with("yarn run electron-builder --"));
        assert!(lines[1].contains("--publish always"));
        assert!(lines[1].contains(&format!("PWD={}", root.canonicalize().unwrap().display())));
    }

    #[test]
    fn test_run_npm_project() {
        let temp = TempDir::new().unwrap();
        let root = create_electron_project(temp.path(), true);
        let (bin, log) = install_fake_tools(temp.path());

        let output = with_signing_inputs(&mut action_command())
            .env("PATH", path_with(&bin))
            .env("INPUT_PACKAGE_ROOT", &root)
            .env("INPUT_PROVIDER", "github")
            .env("INPUT_GITHUB_TOKEN", "ghp_token")
            .output()
            .expect("Failed to execute electron-release");

        assert!(output.status.success(), "stderr: {}", stderr(&output));
        let calls = fs::read_to_string(&log).unwrap();
        let lines: Vec<&str> = calls.lines().collect();
        assert_eq!(lines.len(), 2, "calls: {}", calls);
        assert!(lines[0].starts_with("npm install |"));
        assert!(lines[1].starts_with("npx --no-install electron-builder --"));
    }

    #[test]
    fn test_install_failure_aborts_before_build() {
        let temp = TempDir::new().unwrap();
        let root = create_electron_project(temp.path(), false);
        let (bin, log) = install_fake_tools(temp.path());

        let output = with_signing_inputs(&mut action_command())
            .env("PATH", path_with(&bin))
            .env("FAKE_EXIT_YARN", "7")
            .env("INPUT_PACKAGE_ROOT", &root)
            .env("INPUT_PROVIDER", "github")
            .env("INPUT_GITHUB_TOKEN", "ghp_token")
            .output()
            .expect("Failed to execute electron-release");

        assert_eq!(output.status.code(), Some(1));
        assert!(stderr(&output).contains("Command `yarn` failed with exit code 7"));
        let calls = fs::read_to_string(&log).unwrap();
        assert_eq!(calls.lines().count(), 1, "calls: {}", calls);
    }

    #[test]
    fn test_non_utf8_package_root_is_rejected() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp = TempDir::new().unwrap();
        let (bin, log) = install_fake_tools(temp.path());

        let output = action_command()
            .env("PATH", path_with(&bin))
            .env("INPUT_PACKAGE_ROOT", OsStr::from_bytes(b"/tmp/\xffapp"))
            .env("INPUT_PROVIDER", "github")
            .output()
            .expect("Failed to execute electron-release");

        assert_eq!(output.status.code(), Some(1));
        let err = stderr(&output);
        assert!(err.contains("\"package_root\" input variable is not valid UTF-8"));
        assert!(!err.contains("is not defined"));
        assert!(!log.exists());
    }

    #[test]
    fn test_validation_failure_runs_no_tools() {
        let temp = TempDir::new().unwrap();
        let root = create_electron_project(temp.path(), false);
        let (bin, log) = install_fake_tools(temp.path());

        let output = action_command()
            .env("PATH", path_with(&bin))
            .env("INPUT_PACKAGE_ROOT", &root)
            .env("INPUT_PROVIDER", "github")
            .output()
            .expect("Failed to execute electron-release");

        assert_eq!(output.status.code(), Some(1));
        assert!(!log.exists());
    }
}
