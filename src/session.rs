use std::io::Write;

use tracing::debug;

use crate::{
    ast::{Expr, Stmt},
    error::{ParseError, RuntimeError},
    interpreter::{
        evaluator::core::Interpreter,
        lexer::{Scan, scan},
        parser::core::Parser,
        token::Token,
        value::core::Value,
    },
};

/// Exit status for a lexical or syntax error.
pub const EXIT_DATA_ERROR: i32 = 65;
/// Exit status for an uncaught runtime error.
pub const EXIT_SOFTWARE: i32 = 70;

/// One run of the interpreter over one source text.
///
/// A session owns the interpreter (and with it the global scope), collects
/// the diagnostics of every phase and remembers the runtime error that
/// stopped execution, if any. Each mode of the command-line driver is one
/// method.
///
/// # Example
/// ```
/// use treelox::Session;
///
/// let mut session = Session::new();
/// session.run("var a = 1;");
/// assert_eq!(session.exit_code(), 0);
///
/// session.run("print a + nil;");
/// assert_eq!(session.runtime_error().unwrap().to_string(),
///            "Operands must be two numbers or two strings.\n[line 1]");
/// assert_eq!(session.exit_code(), 70);
/// ```
#[derive(Debug, Default)]
pub struct Session {
    interpreter:   Interpreter,
    diagnostics:   Vec<ParseError>,
    runtime_error: Option<RuntimeError>,
}

impl Session {
    /// Creates a session whose `print` statements write to standard output.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session whose `print` statements write to `out`.
    #[must_use]
    pub fn with_output(out: Box<dyn Write>) -> Self {
        Self { interpreter:   Interpreter::with_output(out),
               diagnostics:   Vec::new(),
               runtime_error: None, }
    }

    /// Scans `source` and returns every token, `EOF` included.
    ///
    /// Lexical errors are recorded as diagnostics.
    pub fn tokenize(&mut self, source: &str) -> Vec<Token> {
        self.scan(source).tokens
    }

    /// Parses `source` as a program.
    ///
    /// # Returns
    /// The parsed statements, or `None` when a syntax error occurred.
    pub fn parse(&mut self, source: &str) -> Option<Vec<Stmt>> {
        let scan = self.scan(source);
        let (statements, errors) = Parser::new(&scan.tokens).parse();
        self.record_syntax(errors).then_some(statements)
    }

    /// Parses `source` as one expression.
    ///
    /// # Returns
    /// The expression, or `None` when a syntax error occurred.
    pub fn parse_expression(&mut self, source: &str) -> Option<Expr> {
        let scan = self.scan(source);
        let (expr, errors) = Parser::new(&scan.tokens).parse_expression();
        if self.record_syntax(errors) { expr } else { None }
    }

    /// Renders the syntax tree of `source` in parenthesized prefix form.
    ///
    /// Input that is exactly one expression renders as that expression, so
    /// `-123 * (45.67)` needs no trailing `;`. Anything else is parsed as a
    /// program and rendered one statement per line.
    ///
    /// # Returns
    /// The rendering, or `None` when a syntax error occurred.
    ///
    /// # Example
    /// ```
    /// use treelox::Session;
    ///
    /// let mut session = Session::new();
    /// assert_eq!(session.parse_tree("-123 * (45.67)").as_deref(),
    ///            Some("(* (- 123) (group 45.67))"));
    /// assert_eq!(session.parse_tree("var a = 1; print a;").as_deref(),
    ///            Some("(var a 1)\n(print a)"));
    /// ```
    pub fn parse_tree(&mut self, source: &str) -> Option<String> {
        let scan = self.scan(source);

        if let (Some(expr), errors) = Parser::new(&scan.tokens).parse_expression()
           && errors.is_empty()
        {
            return Some(expr.to_string());
        }

        let (statements, errors) = Parser::new(&scan.tokens).parse();
        self.record_syntax(errors).then(|| {
                                      statements.iter()
                                                .map(ToString::to_string)
                                                .collect::<Vec<_>>()
                                                .join("\n")
                                  })
    }

    /// Parses `source` as one expression and evaluates it.
    ///
    /// # Returns
    /// The resulting value, or `None` if parsing or evaluation failed.
    pub fn evaluate(&mut self, source: &str) -> Option<Value> {
        let expr = self.parse_expression(source)?;
        match self.interpreter.evaluate(&expr) {
            Ok(value) => Some(value),
            Err(error) => {
                self.runtime_error = Some(error);
                None
            },
        }
    }

    /// Executes `source` as a program.
    ///
    /// Nothing runs if the program has a syntax error. Lexical errors alone
    /// do not prevent execution; they are still reflected in
    /// [`Session::exit_code`]. Globals persist across calls on one session.
    pub fn run(&mut self, source: &str) {
        let Some(statements) = self.parse(source) else {
            return;
        };

        debug!(statements = statements.len(), "executing program");
        if let Err(error) = self.interpreter.interpret(&statements) {
            debug!(%error, "runtime error");
            self.runtime_error = Some(error);
        }
    }

    /// Lexical and syntax errors recorded so far, in report order.
    #[must_use]
    pub fn diagnostics(&self) -> &[ParseError] {
        &self.diagnostics
    }

    /// The runtime error that stopped the last execution, if any.
    #[must_use]
    pub const fn runtime_error(&self) -> Option<&RuntimeError> {
        self.runtime_error.as_ref()
    }

    /// Process exit status for the session so far.
    ///
    /// A runtime error (`70`) outranks any lexical or syntax error (`65`);
    /// otherwise the status is `0`.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if self.runtime_error.is_some() {
            EXIT_SOFTWARE
        } else if self.diagnostics.is_empty() {
            0
        } else {
            EXIT_DATA_ERROR
        }
    }

    fn scan(&mut self, source: &str) -> Scan {
        let mut scan = scan(source);
        self.diagnostics.append(&mut scan.errors);
        scan
    }

    /// Stores parser errors; returns `true` when there were none.
    fn record_syntax(&mut self, errors: Vec<ParseError>) -> bool {
        let clean = errors.is_empty();
        self.diagnostics.extend(errors);
        clean
    }
}
