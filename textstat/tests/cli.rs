use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn textstat() -> Command {
    Command::cargo_bin("textstat").expect("binary should build")
}

#[test]
fn test_no_arguments_prints_usage() {
    textstat()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_help_flag() {
    textstat()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_version_flag() {
    textstat()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("textstat"));
}

#[test]
fn test_rejects_non_txt_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.md");
    fs::write(&path, "some markdown").unwrap();

    textstat()
        .arg(&path)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Not a .txt file"));
}

#[test]
fn test_rejects_missing_file() {
    let dir = TempDir::new().unwrap();

    textstat()
        .arg(dir.path().join("missing.txt"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("File not found"));
}

#[test]
fn test_base_report_contents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sample.txt");
    fs::write(&path, "Hello world\nHello again").unwrap();

    textstat()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("File: sample.txt"))
        .stdout(predicate::str::contains("Size: 23 Bytes"))
        .stdout(predicate::str::contains("Characters: 23"))
        .stdout(predicate::str::contains("Words: 4"))
        .stdout(predicate::str::contains("Lines: 2"))
        .stdout(predicate::str::contains("Paragraphs").not());
}

#[test]
fn test_detail_report_contents() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sample.txt");
    fs::write(&path, "Hello world\nHello again").unwrap();

    textstat()
        .arg(&path)
        .arg("--detail")
        .assert()
        .success()
        .stdout(predicate::str::contains("Non-whitespace characters: 20"))
        .stdout(predicate::str::contains("Paragraphs: 1"))
        .stdout(predicate::str::contains("Average word length: 5.00 characters"))
        .stdout(predicate::str::contains("\"hello\": 2 occurrences"));
}

#[test]
fn test_detail_flag_position_is_flexible() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sample.txt");
    fs::write(&path, "a b c").unwrap();

    textstat()
        .arg("-d")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Paragraphs: 1"));
}

#[test]
fn test_json_output() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sample.txt");
    fs::write(&path, "one two two").unwrap();

    textstat()
        .arg(&path)
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"word_count\": 3"))
        .stdout(predicate::str::contains("\"file_name\": \"sample.txt\""));
}

#[test]
fn test_size_report_uses_binary_prefixes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("big.txt");
    fs::write(&path, "x".repeat(2048)).unwrap();

    textstat()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Size: 2 KB"));
}
