//! End-to-end tests for the chatlens binary.

#![cfg(feature = "cli")]

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

const SAMPLE: &str = "\
1/1/23, 10:00 AM - Alice: Happy new year everyone
1/1/23, 10:01 AM - Bob: Happy new year!
1/1/23, 10:02 AM - Bob: <Media omitted>
1/1/23, 10:03 AM - Charlie joined using this group's invite link
";

fn sample_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn analyzes_a_transcript() {
    let file = sample_file();

    Command::cargo_bin("chatlens")
        .unwrap()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 4 records"))
        .stdout(predicate::str::contains("Top Statistics"))
        .stdout(predicate::str::contains("Most Active Users"))
        .stdout(predicate::str::contains("Bob"));
}

#[test]
fn filters_by_user() {
    let file = sample_file();

    Command::cargo_bin("chatlens")
        .unwrap()
        .arg(file.path())
        .args(["--user", "Alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Messages:     1"))
        .stdout(predicate::str::contains("Analyzing (Alice)"));
}

#[test]
fn writes_json_report() {
    let file = sample_file();
    let out = tempfile::NamedTempFile::new().unwrap();

    Command::cargo_bin("chatlens")
        .unwrap()
        .arg(file.path())
        .args(["--json", out.path().to_str().unwrap()])
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(out.path()).unwrap()).unwrap();
    assert_eq!(json["stats"]["messages"], 4);
    assert_eq!(json["stats"]["media_messages"], 1);
    assert_eq!(json["heatmap"]["days"].as_array().unwrap().len(), 7);
}

#[test]
fn fails_cleanly_on_garbage_input() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"definitely not a chat export").unwrap();
    file.flush().unwrap();

    Command::cargo_bin("chatlens")
        .unwrap()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn fails_cleanly_on_missing_file() {
    Command::cargo_bin("chatlens")
        .unwrap()
        .arg("no/such/file.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}
