use logos::Logos;
use tracing::debug;

use crate::{
    error::ParseError,
    interpreter::token::{LexError, Token, TokenKind},
};

/// The outcome of scanning a source text.
///
/// Scanning never aborts: every malformed character or literal becomes an
/// entry in `errors` and the remaining input is still tokenized.
#[derive(Debug, Default)]
pub struct Scan {
    /// Tokens in source order, always terminated by `EOF`.
    pub tokens: Vec<Token>,
    /// Lexical errors in the order they were encountered.
    pub errors: Vec<ParseError>,
}

/// Converts source text into a token stream.
///
/// The generated `logos` lexer drives the scan; its line counter lives in the
/// lexer extras and is read after each match, so multi-line strings report
/// the line they end on.
///
/// # Parameters
/// - `source`: The complete program text.
///
/// # Returns
/// A [`Scan`] holding the tokens and any lexical errors.
///
/// # Example
/// ```
/// use treelox::interpreter::{lexer::scan, token::TokenKind};
///
/// let scan = scan("var x = 1; @");
/// let kinds: Vec<_> = scan.tokens.iter().map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Var,
///             TokenKind::Identifier,
///             TokenKind::Equal,
///             TokenKind::Number,
///             TokenKind::Semicolon,
///             TokenKind::Eof]);
/// assert_eq!(scan.errors.len(), 1);
/// ```
#[must_use]
pub fn scan(source: &str) -> Scan {
    let mut lexer = TokenKind::lexer(source);
    let mut scan = Scan::default();

    while let Some(result) = lexer.next() {
        let line = lexer.extras.line;
        match result {
            Ok(kind) => scan.tokens.push(Token::new(kind, lexer.slice(), line)),
            Err(LexError::UnterminatedString) => {
                scan.errors.push(ParseError::UnterminatedString { line });
            },
            Err(LexError::UnexpectedCharacter) => {
                scan.errors.push(ParseError::UnexpectedCharacter { character:
                                                                       lexer.slice().to_string(),
                                                                   line });
            },
        }
    }

    scan.tokens.push(Token::eof(lexer.extras.line));

    debug!(tokens = scan.tokens.len(), errors = scan.errors.len(), "scanned source");
    scan
}
