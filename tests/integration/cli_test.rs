//! Binary-level tests for the cssmin CLI.

use assert_cmd::Command;
use predicates::prelude::*;

fn cssmin() -> Command {
    Command::cargo_bin("cssmin").expect("cssmin binary builds")
}

#[test]
fn minifies_stdin_to_stdout() {
    cssmin()
        .arg("-")
        .write_stdin("a { color: red; }")
        .assert()
        .success()
        .stdout("a{color:red}");
}

#[test]
fn minifies_file_to_stdout() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("in.css");
    std::fs::write(&input, "a { color: #ff0000; }\n").expect("write input");

    cssmin()
        .arg(&input)
        .assert()
        .success()
        .stdout("a{color:#f00}");
}

#[test]
fn writes_output_file_and_reports_savings() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("in.css");
    let output = dir.path().join("out.css");
    std::fs::write(&input, "body {\n    margin: 0px;\n}\n").expect("write input");

    cssmin()
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Minified:"))
        .stdout(predicate::str::contains("% smaller"));

    let minified = std::fs::read_to_string(&output).expect("read output");
    assert_eq!(minified, "body{margin:0}");
}

#[test]
fn missing_input_prints_usage_and_exits_1() {
    cssmin()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn unreadable_input_fails_with_message() {
    cssmin()
        .arg("definitely/does/not/exist.css")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn malformed_css_still_succeeds() {
    cssmin()
        .arg("-")
        .write_stdin("a { color: red")
        .assert()
        .success()
        .stdout("a{color:red");
}

#[test]
fn generates_completions() {
    cssmin()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cssmin"));
}
