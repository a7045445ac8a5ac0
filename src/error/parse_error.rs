use thiserror::Error;

use crate::interpreter::token::{Token, TokenKind};

/// Where a syntax error was detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// At the end of input.
    End,
    /// At a token, identified by its lexeme.
    Lexeme(String),
}

impl From<&Token> for Location {
    fn from(token: &Token) -> Self {
        if token.kind == TokenKind::Eof {
            Self::End
        } else {
            Self::Lexeme(token.lexeme.clone())
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::End => write!(f, " at end"),
            Self::Lexeme(lexeme) => write!(f, " at '{lexeme}'"),
        }
    }
}

/// Represents all errors that can occur during lexing or parsing.
///
/// The `Display` output is the exact report line written to standard error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character no lexical rule accepts.
    #[error("[line {line}] Error: Unexpected character: {character}")]
    UnexpectedCharacter {
        /// The offending character.
        character: String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// End of input reached inside a string literal.
    #[error("[line {line}] Error: Unterminated string.")]
    UnterminatedString {
        /// The line the scanner had reached at end of input.
        line: usize,
    },
    /// A grammar violation found by the parser.
    #[error("[line {line}] Error{location}: {message}")]
    Syntax {
        /// The token at which the error was detected.
        location: Location,
        /// Details about the parse error.
        message:  &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
}

impl ParseError {
    /// Builds a syntax error located at `token`.
    #[must_use]
    pub fn at(token: &Token, message: &'static str) -> Self {
        Self::Syntax { location: token.into(),
                       message,
                       line: token.line }
    }

    /// Returns `true` for errors raised by the lexer.
    #[must_use]
    pub const fn is_lexical(&self) -> bool {
        matches!(self, Self::UnexpectedCharacter { .. } | Self::UnterminatedString { .. })
    }

    /// The source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. }
            | Self::UnterminatedString { line }
            | Self::Syntax { line, .. } => *line,
        }
    }
}
