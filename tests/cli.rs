//! Tests for the `score_events` binary.

use std::io::Write;
use std::process::Command;

use serde_json::Value;
use tempfile::NamedTempFile;

const PLAY_RECORD: &str = r#"{
    "score": {
        "score": 727727,
        "num_300s": 980,
        "num_100s": 20,
        "combo_max": 1000,
        "max_possible_combo": 1000,
        "perfect": true,
        "player_name": "WhiteCat",
        "unix_timestamp": 1700000000
    },
    "beatmap": {
        "md5_hash": "0123456789abcdef0123456789abcdef",
        "title": "Blue Zenith",
        "beatmap_id": 658127,
        "beatmap_set_id": 292301
    },
    "extras": { "grade": "X", "accuracy": 98.67, "mod_string": "HD" }
}"#;

fn write_play_record(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write play record");
    file.flush().expect("Failed to flush file");
    file
}

fn score_events() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_score_events"));
    command.env_remove("SCORE_EVENTS_URL");
    command
}

#[test]
fn test_dry_run_prints_event() {
    let file = write_play_record(PLAY_RECORD);
    let output = score_events()
        .args(["--dry-run", "--log-level", "error", "--input"])
        .arg(file.path())
        .output()
        .expect("Failed to run binary");

    assert!(output.status.success());
    let doc: Value = serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(doc["event"], "score_set");
    assert_eq!(doc["score"]["grade"], "X");
    assert_eq!(doc["score"]["hits"]["300"], 980);
    assert_eq!(doc["player"]["name"], "WhiteCat");
}

#[test]
fn test_missing_input_file_fails() {
    let output = score_events()
        .args(["--dry-run", "--input", "/nonexistent/play.json"])
        .output()
        .expect("Failed to run binary");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_malformed_play_record_fails() {
    let file = write_play_record("{ not json");
    let output = score_events()
        .args(["--dry-run", "--input"])
        .arg(file.path())
        .output()
        .expect("Failed to run binary");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_missing_url_fails() {
    let file = write_play_record(PLAY_RECORD);
    let output = score_events()
        .arg("--input")
        .arg(file.path())
        .output()
        .expect("Failed to run binary");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_unreachable_endpoint_exits_nonzero() {
    let file = write_play_record(PLAY_RECORD);
    let output = score_events()
        .args(["--url", "http://127.0.0.1:1/events", "--input"])
        .arg(file.path())
        .output()
        .expect("Failed to run binary");
    assert_eq!(output.status.code(), Some(1));
}
