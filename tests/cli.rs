use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Writes `source` into a fresh temporary directory.
fn script(source: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("tempdir");
    let path = dir.path().join("script.lox");
    std::fs::write(&path, source).expect("write script");
    (dir, path)
}

fn treelox(command: &str, source: &str) -> std::process::Output {
    let (_dir, path) = script(source);
    Command::cargo_bin("treelox").expect("binary")
                                 .arg(command)
                                 .arg(&path)
                                 .output()
                                 .expect("run treelox")
}

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn tokenize_prints_one_line_per_token() {
    let out = treelox("tokenize", "(1+2.5) \"s\"");
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out),
               "LEFT_PAREN ( nil\nNUMBER 1 1\nPLUS + nil\nNUMBER 2.5 2.5\nRIGHT_PAREN ) nil\n\
                STRING \"s\" s\nEOF  nil\n");
}

#[test]
fn tokenize_reports_lexical_errors_and_keeps_going() {
    let out = treelox("tokenize", "1 $");
    assert_eq!(out.status.code(), Some(65));
    assert_eq!(stdout(&out), "NUMBER 1 1\nEOF  nil\n");
    assert_eq!(stderr(&out), "[line 1] Error: Unexpected character: $\n");
}

#[test]
fn parse_prints_prefix_notation() {
    let out = treelox("parse", "-123 * (45.67)");
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "(* (- 123) (group 45.67))\n");
}

#[test]
fn parse_reports_syntax_errors() {
    let out = treelox("parse", "(72 +)");
    assert_eq!(out.status.code(), Some(65));
    assert_eq!(stdout(&out), "");
    assert_eq!(stderr(&out), "[line 1] Error at ')': Expect expression.\n");
}

#[test]
fn evaluate_prints_the_value() {
    let out = treelox("evaluate", "\"tree\" + \"lox\"");
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "treelox\n");

    let out = treelox("evaluate", "10 / 4");
    assert_eq!(stdout(&out), "2.5\n");
}

#[test]
fn evaluate_reports_runtime_errors() {
    let out = treelox("evaluate", "-true");
    assert_eq!(out.status.code(), Some(70));
    assert_eq!(stderr(&out), "Operand must be a number.\n[line 1]\n");
}

#[test]
fn run_executes_programs() {
    let out = treelox("run", "print 1 + 2;\nvar a = 1; { var a = 2; print a; } print a;");
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(stdout(&out), "3\n2\n1\n");
    assert_eq!(stderr(&out), "");
}

#[test]
fn run_exits_70_on_runtime_error() {
    let out = treelox("run", "print \"before\";\nprint undefined;");
    assert_eq!(out.status.code(), Some(70));
    assert_eq!(stdout(&out), "before\n");
    assert_eq!(stderr(&out), "Undefined variable 'undefined'.\n[line 2]\n");
}

#[test]
fn run_exits_65_without_executing_on_syntax_error() {
    let out = treelox("run", "print 1;\nprint 2");
    assert_eq!(out.status.code(), Some(65));
    assert_eq!(stdout(&out), "");
    assert_eq!(stderr(&out), "[line 2] Error at end: Expect ';' after value.\n");
}

#[test]
fn missing_file_exits_1() {
    let dir = TempDir::new().expect("tempdir");
    let out = Command::cargo_bin("treelox").expect("binary")
                                           .arg("run")
                                           .arg(dir.path().join("absent.lox"))
                                           .output()
                                           .expect("run treelox");
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn unknown_command_is_a_usage_error() {
    let out = Command::cargo_bin("treelox").expect("binary")
                                           .arg("compile")
                                           .arg("x.lox")
                                           .output()
                                           .expect("run treelox");
    assert_eq!(out.status.code(), Some(2));
}
