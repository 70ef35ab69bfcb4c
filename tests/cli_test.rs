//! End-to-end tests against the `fauxbase` binary.
//!
//! Every command runs with HOME and XDG_CONFIG_HOME pointed at a temp dir and
//! FAUXBASE_* cleared, so the user's own config never leaks in.

use std::fs;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::{json, Value};
use tempfile::TempDir;

fn fauxbase(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fauxbase").expect("binary exists");
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("FAUXBASE_DEBUG")
        .env_remove("FAUXBASE_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

fn global_config(home: &TempDir) -> std::path::PathBuf {
    home.path().join(".config/fauxbase/fauxbase.toml")
}

#[test]
fn given_no_args_when_running_then_prints_long_help_and_succeeds() {
    let home = TempDir::new().unwrap();
    fauxbase(&home)
        .assert()
        .success()
        .stdout(contains("FauxBase is a lightweight web-based admin toolkit."))
        .stdout(contains("user management, script storage, and variable management"))
        .stdout(contains("--debug"));
}

#[test]
fn given_unknown_subcommand_when_running_then_exits_one_with_message_on_stdout() {
    let home = TempDir::new().unwrap();
    fauxbase(&home)
        .arg("frobnicate")
        .assert()
        .code(1)
        .stdout(contains("frobnicate"));
}

#[test]
fn given_unknown_flag_when_running_then_exits_one() {
    let home = TempDir::new().unwrap();
    fauxbase(&home)
        .arg("--no-such-flag")
        .assert()
        .code(1)
        .stdout(contains("--no-such-flag"));
}

#[test]
fn given_version_flag_when_running_then_prints_version() {
    let home = TempDir::new().unwrap();
    fauxbase(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(contains("0.0.1"));
}

#[test]
fn given_version_command_when_running_then_prints_identity() {
    let home = TempDir::new().unwrap();
    fauxbase(&home)
        .arg("version")
        .assert()
        .success()
        .stdout(contains("FauxBase 0.0.1"))
        .stdout(contains("© 2025 ytjohn. Licensed under the MIT License."))
        .stdout(contains("https://github.com/ytjohn/fauxbase"));
}

#[test]
fn given_version_json_when_running_then_emits_four_field_record() {
    let home = TempDir::new().unwrap();
    let out = fauxbase(&home)
        .args(["version", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let value: Value = serde_json::from_slice(&out.stdout).expect("valid json");
    assert_eq!(
        value,
        json!({
            "version": "0.0.1",
            "appName": "FauxBase",
            "copyright": "© 2025 ytjohn. Licensed under the MIT License.",
            "url": "https://github.com/ytjohn/fauxbase",
        })
    );
}

#[test]
fn given_debug_flag_when_showing_config_then_debug_is_true() {
    let home = TempDir::new().unwrap();
    fauxbase(&home)
        .args(["--debug", "config", "show"])
        .assert()
        .success()
        .stdout(contains("debug = true"));
}

#[test]
fn given_debug_flag_after_subcommand_when_showing_config_then_flag_persists() {
    let home = TempDir::new().unwrap();
    fauxbase(&home)
        .args(["config", "show", "--debug"])
        .assert()
        .success()
        .stdout(contains("debug = true"));
}

#[test]
fn given_no_debug_flag_when_showing_config_then_debug_is_false() {
    let home = TempDir::new().unwrap();
    fauxbase(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(contains("debug = false"));
}

#[test]
fn given_env_var_when_showing_config_then_env_overrides_file() {
    let home = TempDir::new().unwrap();
    let path = global_config(&home);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "debug = true\n").unwrap();

    fauxbase(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(contains("debug = true"));

    fauxbase(&home)
        .env("FAUXBASE_DEBUG", "false")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(contains("debug = false"));
}

#[test]
fn given_env_false_and_debug_flag_when_showing_config_then_flag_wins() {
    let home = TempDir::new().unwrap();
    fauxbase(&home)
        .env("FAUXBASE_DEBUG", "false")
        .args(["--debug", "config", "show"])
        .assert()
        .success()
        .stdout(contains("debug = true"));
}

#[test]
fn given_explicit_config_file_when_showing_config_then_it_is_used() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("custom.toml");
    fs::write(&path, "debug = true\n").unwrap();

    fauxbase(&home)
        .arg("--config")
        .arg(&path)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(contains("debug = true"));

    fauxbase(&home)
        .env("FAUXBASE_CONFIG", &path)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(contains("custom.toml").and(contains("exists")));
}

#[test]
fn given_missing_explicit_config_when_running_then_exits_one() {
    let home = TempDir::new().unwrap();
    fauxbase(&home)
        .args(["--config", "/nonexistent/fauxbase.toml", "config", "show"])
        .assert()
        .code(1)
        .stdout(contains("config file not found"));
}

#[test]
fn given_malformed_config_when_running_then_exits_one() {
    let home = TempDir::new().unwrap();
    let path = global_config(&home);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "debug = = true\n").unwrap();

    fauxbase(&home)
        .args(["config", "show"])
        .assert()
        .code(1)
        .stdout(contains("error"));
}

#[test]
fn given_config_init_when_running_twice_then_second_needs_force() {
    let home = TempDir::new().unwrap();
    let path = global_config(&home);

    fauxbase(&home)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(contains("Created"));
    assert!(path.exists());

    fauxbase(&home)
        .args(["config", "init"])
        .assert()
        .code(1)
        .stdout(contains("already exists"));

    fauxbase(&home)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn given_config_init_with_explicit_path_then_creates_that_file() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("nested/dir/fauxbase.toml");

    fauxbase(&home)
        .arg("--config")
        .arg(&path)
        .args(["config", "init"])
        .assert()
        .success();

    assert!(fs::read_to_string(&path).unwrap().contains("# debug = false"));
}

#[test]
fn given_config_path_when_no_file_then_reports_not_found() {
    let home = TempDir::new().unwrap();
    fauxbase(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(contains("fauxbase.toml").and(contains("not found")))
        .stdout(contains("FAUXBASE_*"));
}

#[test]
fn given_config_without_subcommand_when_running_then_shows_help() {
    let home = TempDir::new().unwrap();
    fauxbase(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(contains("show").and(contains("init")));
}

#[test]
fn given_completion_bash_when_running_then_emits_script() {
    let home = TempDir::new().unwrap();
    fauxbase(&home)
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(contains("_fauxbase"));
}

#[test]
fn given_malformed_config_when_running_without_args_then_still_shows_help() {
    let home = TempDir::new().unwrap();
    let path = global_config(&home);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "debug = = true\n").unwrap();

    fauxbase(&home)
        .assert()
        .success()
        .stdout(contains("FauxBase is a lightweight web-based admin toolkit."))
        .stdout(contains("error").not());
}

#[test]
fn given_malformed_config_when_init_with_force_then_replaces_it() {
    let home = TempDir::new().unwrap();
    let path = global_config(&home);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "debug = = true\n").unwrap();

    fauxbase(&home)
        .args(["config", "init", "--force"])
        .assert()
        .success()
        .stdout(contains("Created"));

    assert!(fs::read_to_string(&path).unwrap().contains("# debug = false"));
    fauxbase(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(contains("debug = false"));
}
