use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn jsoncmap_cmd() -> Command {
    Command::cargo_bin("jsoncmap").unwrap()
}

#[test]
fn test_strip_reads_stdin() {
    jsoncmap_cmd()
        .args(["strip"])
        .write_stdin("{ /* c */ \"key\": \"value\" }")
        .assert()
        .success()
        .stdout(predicate::eq("{  \"key\": \"value\" }"));
}

#[test]
fn test_strip_reads_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("config.jsonc");
    fs::write(&path, "{\n  // comment\n  \"a\": 1\n}\n").unwrap();

    jsoncmap_cmd()
        .args(["strip", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"a\": 1"))
        .stdout(predicate::str::contains("comment").not());
}

#[test]
fn test_strip_rejects_trailing_commas_by_default() {
    jsoncmap_cmd()
        .args(["strip"])
        .write_stdin("[1, 2,]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON syntax error"));
}

#[test]
fn test_strip_trailing_commas_flag() {
    jsoncmap_cmd()
        .args(["strip", "--trailing-commas"])
        .write_stdin("[1, 2,]")
        .assert()
        .success()
        .stdout(predicate::eq("[1, 2]"));
}

#[test]
fn test_strip_json5_flag() {
    jsoncmap_cmd()
        .args(["strip", "--json5"])
        .write_stdin("{ 'mask': 0xFF, }")
        .assert()
        .success()
        .stdout(predicate::eq("{ \"mask\": 255 }"));
}

#[test]
fn test_strip_missing_file_fails() {
    jsoncmap_cmd()
        .args(["strip", "/nonexistent/file.jsonc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}
