use tracing::{debug, trace};

use crate::{
    ast::{Expr, Stmt},
    error::ParseError,
    interpreter::token::{Token, TokenKind},
};

/// Result type used by the parser.
///
/// An `Err` unwinds to the nearest declaration, which records it and
/// synchronizes.
pub type ParseResult<T> = Result<T, ParseError>;

/// Stand-in returned when the cursor runs past a stream without `EOF`.
static END: Token = Token::eof(0);

/// Recursive-descent parser over a scanned token stream.
///
/// The parser looks at most one token ahead and never backtracks. Errors that
/// do not derail the grammar (an invalid assignment target, too many
/// arguments) are recorded without unwinding.
#[derive(Debug)]
pub struct Parser<'a> {
    pub(super) tokens:  &'a [Token],
    pub(super) current: usize,
    pub(super) errors:  Vec<ParseError>,
}

impl<'a> Parser<'a> {
    /// Creates a parser positioned at the first token.
    #[must_use]
    pub const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens,
               current: 0,
               errors: Vec::new() }
    }

    /// Parses a whole program.
    ///
    /// Grammar: `program := declaration* EOF`
    ///
    /// Every malformed declaration contributes one error and is skipped; the
    /// remaining declarations are still parsed.
    ///
    /// # Returns
    /// The successfully parsed statements and every syntax error recorded.
    ///
    /// # Example
    /// ```
    /// use treelox::interpreter::{lexer::scan, parser::core::Parser};
    ///
    /// let scan = scan("var a = 1; print a +; print a;");
    /// let (statements, errors) = Parser::new(&scan.tokens).parse();
    ///
    /// assert_eq!(statements.len(), 2);
    /// assert_eq!(errors[0].to_string(), "[line 1] Error at ';': Expect expression.");
    /// ```
    #[must_use]
    pub fn parse(mut self) -> (Vec<Stmt>, Vec<ParseError>) {
        let mut statements = Vec::new();
        while !self.is_at_end() {
            if let Some(statement) = self.declaration() {
                statements.push(statement);
            }
        }

        debug!(statements = statements.len(), errors = self.errors.len(), "parsed program");
        (statements, self.errors)
    }

    /// Parses a single expression that must span the entire input.
    ///
    /// Grammar: `input := expression EOF`
    ///
    /// # Returns
    /// The expression, or `None` if it could not be parsed, together with
    /// every syntax error recorded.
    ///
    /// # Example
    /// ```
    /// use treelox::interpreter::{lexer::scan, parser::core::Parser};
    ///
    /// let scan = scan("-123 * (45.67)");
    /// let (expr, errors) = Parser::new(&scan.tokens).parse_expression();
    ///
    /// assert!(errors.is_empty());
    /// assert_eq!(expr.unwrap().to_string(), "(* (- 123) (group 45.67))");
    /// ```
    #[must_use]
    pub fn parse_expression(mut self) -> (Option<Expr>, Vec<ParseError>) {
        let parsed = self.expression().and_then(|expr| {
                                           if self.is_at_end() {
                                               Ok(expr)
                                           } else {
                                               Err(ParseError::at(self.peek(),
                                                                  "Expect end of expression."))
                                           }
                                       });

        match parsed {
            Ok(expr) => (Some(expr), self.errors),
            Err(error) => {
                self.errors.push(error);
                (None, self.errors)
            },
        }
    }

    /// Discards tokens until a likely statement boundary.
    ///
    /// Stops just after a `;` or just before a keyword that starts a
    /// declaration or statement, so one malformed statement yields one error.
    pub(super) fn synchronize(&mut self) {
        let from = self.peek().line;
        self.advance();

        while !self.is_at_end() {
            if self.previous().kind == TokenKind::Semicolon || self.peek().kind.starts_statement() {
                break;
            }
            self.advance();
        }

        trace!(from, to = self.peek().line, "synchronized");
    }

    /// Records an error that does not unwind the current rule.
    pub(super) fn report(&mut self, token: &Token, message: &'static str) {
        self.errors.push(ParseError::at(token, message));
    }

    pub(super) fn peek(&self) -> &'a Token {
        self.tokens.get(self.current).unwrap_or(&END)
    }

    pub(super) fn previous(&self) -> &'a Token {
        self.current
            .checked_sub(1)
            .and_then(|index| self.tokens.get(index))
            .unwrap_or(&END)
    }

    pub(super) fn is_at_end(&self) -> bool {
        self.peek().kind == TokenKind::Eof
    }

    /// Consumes the current token and returns it.
    pub(super) fn advance(&mut self) -> &'a Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    pub(super) fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    /// Consumes the current token if it has one of `kinds`.
    pub(super) fn match_kind(&mut self, kinds: &[TokenKind]) -> bool {
        if kinds.iter().any(|&kind| self.check(kind)) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a token of `kind` or fails with `message` at the current token.
    pub(super) fn consume(&mut self, kind: TokenKind, message: &'static str) -> ParseResult<&'a Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::at(self.peek(), message))
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::interpreter::lexer::scan;

    fn render(source: &str) -> Vec<String> {
        let scan = scan(source);
        let (statements, errors) = Parser::new(&scan.tokens).parse();
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
        statements.iter().map(ToString::to_string).collect()
    }

    fn errors(source: &str) -> Vec<String> {
        let scan = scan(source);
        Parser::new(&scan.tokens).parse()
                                 .1
                                 .iter()
                                 .map(ToString::to_string)
                                 .collect()
    }

    #[test]
    fn respects_precedence_and_associativity() {
        assert_eq!(render("1 + 2 * 3 - 4 / 5;"), ["(; (- (+ 1 (* 2 3)) (/ 4 5)))"]);
        assert_eq!(render("a = b = 3;"), ["(; (= a (= b 3)))"]);
        assert_eq!(render("!!true == false or nil and 1 < 2;"),
                   ["(; (or (== (! (! true)) false) (and nil (< 1 2))))"]);
    }

    #[test]
    fn calls_are_repeatable_postfix_operators() {
        assert_eq!(render("f()(1)(2, \"x\");"), ["(; (call (call (call f) 1) 2 x))"]);
    }

    #[test]
    fn renders_declarations_and_control_flow() {
        assert_eq!(render("var x; var y = 2; { print x; }"),
                   ["(var x)", "(var y 2)", "(block (print x))"]);
        assert_eq!(render("if (a) print 1; else print 2;"),
                   ["(if a (print 1) (print 2))"]);
        assert_eq!(render("fun add(a, b) { return a + b; }"),
                   ["(fun add (a b) (return (+ a b)))"]);
        assert_eq!(render("fun f() { return; }"), ["(fun f () (return))"]);
    }

    #[test]
    fn for_loops_desugar_into_while() {
        assert_eq!(render("for (var i = 0; i < 3; i = i + 1) print i;"),
                   ["(block (var i 0) (while (< i 3) (block (print i) (; (= i (+ i 1))))))"]);
        assert_eq!(render("for (;;) print 1;"), ["(while true (print 1))"]);
        assert_eq!(render("for (; x;) print 1;"), ["(while x (print 1))"]);
    }

    #[test]
    fn one_error_per_malformed_statement() {
        assert_eq!(errors("print 1 +; var = 3; print 2;"),
                   ["[line 1] Error at ';': Expect expression.",
                    "[line 1] Error at '=': Expect variable name."]);
    }

    #[test]
    fn reports_errors_at_end_of_input() {
        assert_eq!(errors("print (1"), ["[line 1] Error at end: Expect ')' after expression."]);
        assert_eq!(errors("{ print 1;"), ["[line 1] Error at end: Expect '}' after block."]);
    }

    #[test]
    fn invalid_assignment_target_does_not_unwind() {
        let scan = scan("1 = 2; print 3;");
        let (statements, errors) = Parser::new(&scan.tokens).parse();
        assert_eq!(statements.len(), 2);
        assert_eq!(errors, [ParseError::at(&scan.tokens[1], "Invalid assignment target.")]);
        assert!(!errors[0].is_lexical());
        assert_eq!(errors[0].line(), 1);
    }

    #[test]
    fn recovers_inside_blocks() {
        assert_eq!(errors("{ var 1; print 2; }\nprint ;"),
                   ["[line 1] Error at '1': Expect variable name.",
                    "[line 2] Error at ';': Expect expression."]);
    }

    #[test]
    fn caps_argument_lists() {
        let arguments = vec!["1"; 256].join(", ");
        assert_eq!(errors(&format!("f({arguments});")),
                   ["[line 1] Error at '1': Can't have more than 255 arguments."]);
        let params: Vec<_> = (0..256).map(|i| format!("p{i}")).collect();
        assert_eq!(errors(&format!("fun f({}) {{}}", params.join(", "))),
                   ["[line 1] Error at 'p255': Can't have more than 255 parameters."]);
    }

    #[test]
    fn expression_mode_requires_a_single_expression() {
        let scan = scan("1 + 2 3");
        let (expr, errors) = Parser::new(&scan.tokens).parse_expression();
        assert_eq!(expr, None);
        assert_eq!(errors[0].to_string(), "[line 1] Error at '3': Expect end of expression.");
    }
}
