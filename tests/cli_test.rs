//! Tests for the `canvas-render` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn canvas_render() -> Command {
    Command::cargo_bin("canvas-render").expect("binary is built")
}

#[test]
fn test_renders_stdin_as_text() {
    canvas_render()
        .write_stdin(include_str!("fixtures/reference.json"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("              .......\n"))
        .stdout(predicate::str::ends_with("oooooooo             \n"));
}

#[test]
fn test_renders_files_in_order() {
    canvas_render()
        .arg("tests/fixtures/layered.json")
        .arg("tests/fixtures/reference.json")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("                        \n"))
        .stdout(predicate::str::ends_with("oooooooo             \n"));
}

#[test]
fn test_json_output() {
    let output = canvas_render()
        .args(["--format", "json", "tests/fixtures/reference.json"])
        .output()
        .expect("binary runs");
    assert!(output.status.success());

    let response: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is one JSON document");
    assert_eq!(response["drawing"].as_array().map(Vec::len), Some(7));
    assert_eq!(response["drawing"][3], "oooooooo      .......");
    assert!(response["id"].is_string());
    assert!(response["creationDate"].is_string());
}

#[test]
fn test_validation_failure_exits_nonzero() {
    canvas_render()
        .arg("tests/fixtures/out_of_bounds.json")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("The Canvas size is 100x100"));
}

#[test]
fn test_json_error_envelope() {
    canvas_render()
        .args(["-f", "json"])
        .write_stdin(r#"[{"RectangleAt": [-1, 0], "Width": 2, "Height": 2}]"#)
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            r#"{"error":"Position of rectangle cannot be lower than 0"}"#,
        ));
}

#[test]
fn test_invalid_payload_reported() {
    canvas_render()
        .write_stdin("not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid request payload"));
}

#[test]
fn test_config_selects_format() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "format = \"json\"\n").expect("write config");

    canvas_render()
        .arg("--config")
        .arg(&config)
        .write_stdin(r#"[{"RectangleAt": [0, 0], "Width": 2, "Height": 1, "Outline": "="}]"#)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""drawing":["=="]"#));
}

#[test]
fn test_flag_overrides_config() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "format = \"json\"\n").expect("write config");

    canvas_render()
        .arg("--config")
        .arg(&config)
        .args(["--format", "text"])
        .write_stdin(r#"[{"RectangleAt": [0, 0], "Width": 2, "Height": 1, "Outline": "="}]"#)
        .assert()
        .success()
        .stdout("==\n");
}

#[test]
fn test_unreadable_file_does_not_stop_other_inputs() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let missing = dir.path().join("missing.json");

    canvas_render()
        .arg(&missing)
        .arg("tests/fixtures/reference.json")
        .assert()
        .failure()
        .stdout(predicate::str::ends_with("oooooooo             \n"))
        .stderr(predicate::str::contains("IO error"))
        .stderr(predicate::str::contains("1 of 2 canvas requests failed"));
}

#[test]
fn test_unreadable_file_gets_json_error_envelope() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let missing = dir.path().join("missing.json");

    let output = canvas_render()
        .args(["--format", "json"])
        .arg(&missing)
        .arg("tests/fixtures/layered.json")
        .output()
        .expect("binary runs");
    assert!(!output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf-8 output");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with(r#"{"error":"IO error"#));
    assert!(lines[1].contains(r#""drawing":["#));
}
