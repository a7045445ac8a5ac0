mod common;

use std::{fs, path::Path};

use common::Output;
use pretty_assertions::assert_eq;
use treelox::Session;
use walkdir::WalkDir;

/// What a script declares about its own outcome through comments.
#[derive(Debug, Default, PartialEq)]
struct Expectations {
    output:        Vec<String>,
    errors:        Vec<String>,
    runtime_error: Option<String>,
}

impl Expectations {
    fn read(source: &str) -> Self {
        let mut expectations = Self::default();
        for line in source.lines() {
            if let Some((_, expected)) = line.split_once("// expect: ") {
                expectations.output.push(expected.to_string());
            } else if let Some((_, message)) = line.split_once("// runtime error: ") {
                expectations.runtime_error = Some(message.to_string());
            } else if let Some((_, error)) = line.split_once("// error: ") {
                expectations.errors.push(error.to_string());
            }
        }
        expectations
    }

    const fn exit_code(&self) -> i32 {
        if self.runtime_error.is_some() {
            70
        } else if self.errors.is_empty() {
            0
        } else {
            65
        }
    }
}

fn check_script(path: &Path) {
    let source =
        fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
    let expected = Expectations::read(&source);

    let output = Output::default();
    let mut session = Session::with_output(Box::new(output.clone()));
    session.run(&source);

    let printed = output.text();
    let actual = Expectations { output:        printed.lines().map(str::to_string).collect(),
                                errors:        session.diagnostics()
                                                      .iter()
                                                      .map(ToString::to_string)
                                                      .collect(),
                                runtime_error: session.runtime_error().map(|e| {
                                                                          e.to_string()
                                                                           .lines()
                                                                           .next()
                                                                           .unwrap_or_default()
                                                                           .to_string()
                                                                      }), };

    assert_eq!(actual, expected, "script {path:?}");
    assert_eq!(session.exit_code(), expected.exit_code(), "exit code of {path:?}");
}

#[test]
fn annotated_scripts_behave_as_annotated() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "lox"))
    {
        count += 1;
        check_script(entry.path());
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}
