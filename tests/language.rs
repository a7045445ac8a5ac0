mod common;

use std::io::Write;

use common::Output;
use pretty_assertions::assert_eq;
use treelox::Session;

/// Runs `src` and returns what it printed together with the session.
fn run(src: &str) -> (String, Session) {
    let output = Output::default();
    let mut session = Session::with_output(Box::new(output.clone()));
    session.run(src);
    let printed = output.text();
    (printed, session)
}

fn assert_prints(src: &str, expected: &str) {
    let (printed, session) = run(src);
    assert_eq!(session.exit_code(), 0, "script failed: {:?}", session.runtime_error());
    assert_eq!(printed, expected);
}

fn assert_runtime_error(src: &str, expected: &str) {
    let (_, session) = run(src);
    let error = session.runtime_error()
                       .unwrap_or_else(|| panic!("script succeeded but was expected to fail"));
    assert_eq!(error.to_string(), expected);
    assert_eq!(session.exit_code(), 70);
}

#[test]
fn arithmetic_and_printing() {
    assert_prints("print 1 + 2;", "3\n");
    assert_prints("print 7 / 2;", "3.5\n");
    assert_prints("print -(2 * 3) - 4;", "-10\n");
    assert_prints("print \"tree\" + \"lox\";", "treelox\n");
    assert_prints("print 0.1 + 0.2 == 0.3;", "false\n");
}

#[test]
fn stringifies_every_kind_of_value() {
    assert_prints("print nil; print true; print 10.0; print \"raw text\";",
                  "nil\ntrue\n10\nraw text\n");
    assert_prints("fun f() {} print f; print clock;", "<fn f>\n<native fn>\n");
}

#[test]
fn division_follows_ieee() {
    assert_prints("print 1 / 0; print -1 / 0; print 0 / 0;", "inf\n-inf\nNaN\n");
    assert_prints("var n = 0 / 0; print n == n;", "false\n");
}

#[test]
fn equality_is_total() {
    assert_prints("print nil == nil; print nil == false; print 1 == \"1\";",
                  "true\nfalse\nfalse\n");
    assert_prints("print \"a\" == \"a\"; print true != false;", "true\ntrue\n");
    assert_prints("fun f() {} var g = f; print f == g; print clock == clock;",
                  "true\ntrue\n");
}

#[test]
fn truthiness_and_logical_operators() {
    assert_prints("print nil or \"x\";", "x\n");
    assert_prints("print 0 and 5;", "5\n");
    assert_prints("print \"\" and false;", "false\n");
    assert_prints("print !nil; print !0;", "true\nfalse\n");
    assert_prints("var called = false; fun f() { called = true; return 1; } \
                   print true or f(); print called;",
                  "true\nfalse\n");
}

#[test]
fn block_scoping_and_shadowing() {
    assert_prints("var a = 1; { var a = 2; print a; } print a;", "2\n1\n");
    assert_prints("var a = 1; { a = 3; } print a;", "3\n");
    assert_prints("var a = \"global\"; { var a = a + \"!\"; print a; }", "global!\n");
}

#[test]
fn control_flow() {
    assert_prints("if (1 < 2) print \"yes\"; else print \"no\";", "yes\n");
    assert_prints("if (nil) print \"yes\";", "");
    assert_prints("var i = 0; while (i < 3) { print i; i = i + 1; }", "0\n1\n2\n");
    assert_prints("for (var i = 0; i < 3; i = i + 1) print i;", "0\n1\n2\n");
    assert_prints("var i = 5; for (; i > 3;) i = i - 1; print i;", "3\n");
}

#[test]
fn for_loop_variable_stays_local() {
    assert_runtime_error("for (var i = 0; i < 1; i = i + 1) {} print i;",
                         "Undefined variable 'i'.\n[line 1]");
}

#[test]
fn closures_share_their_environment() {
    assert_prints(r"
        fun makeCounter() {
            var count = 0;
            fun increment() {
                count = count + 1;
                return count;
            }
            return increment;
        }
        var counter = makeCounter();
        print counter();
        print counter();
    ",
                  "1\n2\n");
}

#[test]
fn recursion_and_early_return() {
    assert_prints(r"
        fun fib(n) {
            if (n < 2) return n;
            return fib(n - 1) + fib(n - 2);
        }
        print fib(15);
    ",
                  "610\n");
    assert_prints("fun f() { while (true) { return \"out\"; } } print f();", "out\n");
    assert_prints("fun f() { return; } print f(); fun g() {} print g();", "nil\nnil\n");
}

#[test]
fn top_level_return_stops_the_program() {
    assert_prints("print 1; return; print 2;", "1\n");
}

#[test]
fn clock_returns_seconds() {
    assert_prints("var t = clock(); print t > 1000000000; print clock() >= t;",
                  "true\ntrue\n");
}

#[test]
fn runtime_type_errors() {
    assert_runtime_error("print -\"x\";", "Operand must be a number.\n[line 1]");
    assert_runtime_error("print 1 - true;", "Operands must be numbers.\n[line 1]");
    assert_runtime_error("print \"a\" < 1;", "Operands must be numbers.\n[line 1]");
    assert_runtime_error("\n\nprint 1 + \"a\";",
                         "Operands must be two numbers or two strings.\n[line 3]");
}

#[test]
fn undefined_variables_are_runtime_errors() {
    assert_runtime_error("print missing;", "Undefined variable 'missing'.\n[line 1]");
    assert_runtime_error("missing = 1;", "Undefined variable 'missing'.\n[line 1]");
    assert_runtime_error("{ var inner = 1; } inner = 2;",
                         "Undefined variable 'inner'.\n[line 1]");
}

#[test]
fn calls_check_callee_and_arity() {
    assert_runtime_error("\"not a function\"();",
                         "Can only call functions and classes.\n[line 1]");
    assert_runtime_error("fun f(a, b) {} f(1);", "Expected 2 arguments but got 1.\n[line 1]");
    assert_runtime_error("clock(1);", "Expected 0 arguments but got 1.\n[line 1]");
}

#[test]
fn runtime_error_stops_execution_and_keeps_prior_output() {
    let (printed, session) = run("print 1;\nprint nope;\nprint 3;");
    assert_eq!(printed, "1\n");
    assert_eq!(session.runtime_error().map(ToString::to_string),
               Some("Undefined variable 'nope'.\n[line 2]".to_string()));
}

#[test]
fn runtime_error_inside_a_function_restores_scope() {
    let output = Output::default();
    let mut session = Session::with_output(Box::new(output.clone()));
    session.run("var a = \"outer\"; fun f() { var a = 1; { return a + nope; } } f();");
    assert_eq!(session.exit_code(), 70);

    session.run("print a;");
    assert_eq!(output.text(), "outer\n");
}

#[test]
fn syntax_errors_prevent_execution() {
    let (printed, session) = run("print 1;\nprint (2;");
    assert_eq!(printed, "");
    assert_eq!(session.diagnostics()
                      .iter()
                      .map(ToString::to_string)
                      .collect::<Vec<_>>(),
               ["[line 2] Error at ';': Expect ')' after expression."]);
    assert_eq!(session.exit_code(), 65);
}

#[test]
fn one_malformed_statement_yields_one_error() {
    let (_, session) = run("var 1 = 2;\nprint 3;");
    assert_eq!(session.diagnostics().len(), 1);
}

#[test]
fn lexical_errors_do_not_block_execution() {
    let (printed, session) = run("print 1;\n\"unterminated\nprint 2;");
    assert_eq!(printed, "1\n");
    assert_eq!(session.diagnostics()[0].to_string(), "[line 3] Error: Unterminated string.");
    assert_eq!(session.exit_code(), 65);

    let (printed, session) = run("print 1; @ print 2;");
    assert_eq!(printed, "1\n2\n");
    assert_eq!(session.diagnostics()[0].to_string(),
               "[line 1] Error: Unexpected character: @");
    assert_eq!(session.exit_code(), 65);
}

#[test]
fn runtime_errors_outrank_lexical_errors() {
    let (_, session) = run("# print nope;");
    assert_eq!(session.diagnostics().len(), 1);
    assert_eq!(session.exit_code(), 70);
}

#[test]
fn expression_mode_evaluates_one_expression() {
    let mut session = Session::new();
    assert_eq!(session.evaluate("(1 + 2) * 3").map(|v| v.to_string()), Some("9".to_string()));
    assert_eq!(session.evaluate("\"a\" + \"b\"").map(|v| v.to_string()),
               Some("ab".to_string()));
    assert_eq!(session.exit_code(), 0);

    assert_eq!(session.evaluate("1 +"), None);
    assert_eq!(session.exit_code(), 65);

    let mut session = Session::new();
    assert_eq!(session.evaluate("-\"x\""), None);
    assert_eq!(session.exit_code(), 70);
}

#[test]
fn tokenize_renders_kinds_lexemes_and_literals() {
    let mut session = Session::new();
    let tokens: Vec<_> = session.tokenize("var s = \"hi\";\n12.50")
                                .iter()
                                .map(ToString::to_string)
                                .collect();
    assert_eq!(tokens,
               ["VAR var nil",
                "IDENTIFIER s nil",
                "EQUAL = nil",
                "STRING \"hi\" hi",
                "SEMICOLON ; nil",
                "NUMBER 12.50 12.5",
                "EOF  nil"]);
}

#[test]
fn parse_tree_renders_prefix_notation() {
    let mut session = Session::new();
    assert_eq!(session.parse_tree("-123 * (45.67)").as_deref(),
               Some("(* (- 123) (group 45.67))"));
    assert_eq!(session.parse_tree("fun f(a) { return a or nil; } f(1);").as_deref(),
               Some("(fun f (a) (return (or a nil)))\n(; (call f 1))"));
    assert_eq!(session.parse_tree("print ;"), None);
    assert_eq!(session.exit_code(), 65);
}

#[test]
fn runaway_recursion_is_a_runtime_error() {
    let output = Output::default();
    let mut session = Session::with_output(Box::new(output.clone()));
    session.run("fun down(n) { if (n > 0) return down(n - 1); return \"done\"; }\n\
                 print down(900);\n\
                 fun forever(n) { return forever(n + 1); }\n\
                 forever(0);");

    assert_eq!(output.text(), "done\n");
    let error = session.runtime_error().expect("recursion should fail");
    assert_eq!(error.to_string(), "Stack overflow.\n[line 3]");
    assert_eq!(error.line(), Some(3));
    assert_eq!(session.exit_code(), 70);

    session.run("print down(3);");
    assert_eq!(output.text(), "done\ndone\n");
}

#[test]
fn runtime_errors_carry_their_line() {
    let (_, session) = run("var a = 1;\n\nprint a();");
    assert_eq!(session.runtime_error().and_then(|e| e.line()), Some(3));
}

/// A sink that accepts writes but cannot flush.
struct Unflushable;

impl Write for Unflushable {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Err(std::io::Error::other("disk full"))
    }
}

#[test]
fn flush_failure_is_reported_without_a_line() {
    let mut session = Session::with_output(Box::new(Unflushable));
    session.run("print 1;");

    let error = session.runtime_error().expect("flush should fail");
    assert_eq!(error.to_string(), "Could not flush output: disk full");
    assert_eq!(error.line(), None);
    assert_eq!(session.exit_code(), 70);
}
