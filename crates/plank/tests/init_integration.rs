//! Integration tests for the `init` command, run against the real binary.

mod common;

use common::run_plank_in_dir;
use tempfile::TempDir;

#[test]
fn init_creates_the_workspace_tree() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_plank_in_dir(
        temp_dir.path(),
        &["init", "--owner", "rust-lang", "--repo", "cargo"],
    );

    assert!(
        output.status.success(),
        "init failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let plank_dir = temp_dir.path().join(".plank");
    assert!(plank_dir.join("config.yaml").is_file());
    assert!(plank_dir.join("annotations.jsonl").is_file());
    assert!(plank_dir.join(".gitignore").is_file());

    let config = std::fs::read_to_string(plank_dir.join("config.yaml")).unwrap();
    assert!(config.contains("rust-lang"));
    assert!(config.contains("cargo"));
}

#[test]
fn init_refuses_a_second_run() {
    let temp_dir = TempDir::new().unwrap();

    let first = run_plank_in_dir(
        temp_dir.path(),
        &["init", "--owner", "owner", "--repo", "repo"],
    );
    assert!(first.status.success());

    let second = run_plank_in_dir(
        temp_dir.path(),
        &["init", "--owner", "owner", "--repo", "repo"],
    );
    assert!(!second.status.success());
    let stderr = String::from_utf8_lossy(&second.stderr);
    assert!(stderr.contains("already initialized"));
}

#[test]
fn init_json_output_reports_paths() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_plank_in_dir(
        temp_dir.path(),
        &["init", "--owner", "owner", "--repo", "repo", "--json"],
    );
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["repo"], "owner/repo");
    assert!(value["config_file"].as_str().unwrap().contains(".plank"));
}

#[test]
fn init_rejects_invalid_slugs() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_plank_in_dir(
        temp_dir.path(),
        &["init", "--owner", "bad owner", "--repo", "repo"],
    );
    assert!(!output.status.success());
}

#[test]
fn board_outside_a_workspace_explains_init() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_plank_in_dir(temp_dir.path(), &["board"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("plank init"));
}
