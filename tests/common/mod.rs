#![allow(dead_code)]

use std::{
    path::{Path, PathBuf},
    sync::Mutex,
};

use assert_cmd::{assert::Assert, Command};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated planner home for one test.
pub fn test_home() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// Script-mode command against `home` with the default log filter.
pub fn script_command(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("cashflow_cli").expect("locate cashflow_cli binary");
    cmd.env("CASHFLOW_CLI_SCRIPT", "1")
        .env("CASHFLOW_PLANNER_HOME", home)
        .env_remove("RUST_LOG");
    cmd
}

/// Runs the CLI in script mode against `home` with logging silenced.
pub fn run_script(home: &Path, input: &str) -> Assert {
    script_command(home)
        .env("RUST_LOG", "off")
        .write_stdin(input.to_string())
        .assert()
}
