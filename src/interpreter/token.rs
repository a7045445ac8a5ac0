use logos::{Lexer, Logos};

/// Lexical category of a token.
///
/// The enum doubles as the `logos` token definition: every variant that
/// carries a `#[token]` or `#[regex]` attribute is produced by the generated
/// state machine. Keywords are plain `#[token]` rules and win over the
/// identifier regex on an exact match, while longest-match keeps `orchid` an
/// identifier.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(extras = LexerExtras)]
#[logos(error = LexError)]
#[logos(skip r"[ \t\r\f]+")]
pub enum TokenKind {
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `{`
    #[token("{")]
    LeftBrace,
    /// `}`
    #[token("}")]
    RightBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `.`
    #[token(".")]
    Dot,
    /// `-`
    #[token("-")]
    Minus,
    /// `+`
    #[token("+")]
    Plus,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `/`
    #[token("/")]
    Slash,
    /// `*`
    #[token("*")]
    Star,
    /// `!`
    #[token("!")]
    Bang,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `=`
    #[token("=")]
    Equal,
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `>`
    #[token(">")]
    Greater,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// Identifier tokens such as `counter` or `_tmp1`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Identifier,
    /// String literals. The body is scanned by [`lex_string`] so that an
    /// unterminated literal swallows the rest of the input.
    #[token("\"", lex_string)]
    String,
    /// Numeric literals such as `42` or `3.14`. A trailing `.` is left for
    /// the next token.
    #[regex(r"[0-9]+")]
    #[regex(r"[0-9]+\.[0-9]+")]
    Number,
    /// `and`
    #[token("and")]
    And,
    /// `class`
    #[token("class")]
    Class,
    /// `else`
    #[token("else")]
    Else,
    /// `false`
    #[token("false")]
    False,
    /// `for`
    #[token("for")]
    For,
    /// `fun`
    #[token("fun")]
    Fun,
    /// `if`
    #[token("if")]
    If,
    /// `nil`
    #[token("nil")]
    Nil,
    /// `or`
    #[token("or")]
    Or,
    /// `print`
    #[token("print")]
    Print,
    /// `return`
    #[token("return")]
    Return,
    /// `super`
    #[token("super")]
    Super,
    /// `this`
    #[token("this")]
    This,
    /// `true`
    #[token("true")]
    True,
    /// `var`
    #[token("var")]
    Var,
    /// `while`
    #[token("while")]
    While,
    /// `// Comments.` Skipped, never emitted.
    #[token("//", lex_line_comment)]
    Comment,
    /// Line breaks. Skipped after bumping the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// End of input. Appended by the scanner, never matched.
    Eof,
}

/// Additional information carried by the lexer during tokenization.
#[derive(Debug)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl Default for LexerExtras {
    fn default() -> Self {
        Self { line: 1 }
    }
}

/// Failures reported by the generated lexer.
///
/// `UnexpectedCharacter` is the default so that `logos` can use it for any
/// input no rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexError {
    /// No rule matched the current character.
    #[default]
    UnexpectedCharacter,
    /// End of input was reached inside a string literal.
    UnterminatedString,
}

/// Scans the body of a string literal after its opening quote.
///
/// Strings may span lines; every newline inside the literal bumps the line
/// counter. When no closing quote exists the rest of the input is consumed
/// and `LexError::UnterminatedString` is returned, so no token is produced.
fn lex_string(lex: &mut Lexer<TokenKind>) -> Result<(), LexError> {
    let remainder = lex.remainder();
    let (consumed, terminated) = match remainder.find('"') {
        Some(close) => (close + 1, true),
        None => (remainder.len(), false),
    };

    lex.extras.line += remainder[..consumed].matches('\n').count();
    lex.bump(consumed);

    if terminated { Ok(()) } else { Err(LexError::UnterminatedString) }
}

/// Consumes a `//` comment up to, but not including, the next newline.
fn lex_line_comment(lex: &mut Lexer<TokenKind>) -> logos::Skip {
    let remainder = lex.remainder();
    lex.bump(remainder.find('\n').unwrap_or(remainder.len()));
    logos::Skip
}

impl TokenKind {
    /// Returns the upper-case category name used by the `tokenize` mode.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
            Self::LeftBrace => "LEFT_BRACE",
            Self::RightBrace => "RIGHT_BRACE",
            Self::Comma => "COMMA",
            Self::Dot => "DOT",
            Self::Minus => "MINUS",
            Self::Plus => "PLUS",
            Self::Semicolon => "SEMICOLON",
            Self::Slash => "SLASH",
            Self::Star => "STAR",
            Self::Bang => "BANG",
            Self::BangEqual => "BANG_EQUAL",
            Self::Equal => "EQUAL",
            Self::EqualEqual => "EQUAL_EQUAL",
            Self::Greater => "GREATER",
            Self::GreaterEqual => "GREATER_EQUAL",
            Self::Less => "LESS",
            Self::LessEqual => "LESS_EQUAL",
            Self::Identifier => "IDENTIFIER",
            Self::String => "STRING",
            Self::Number => "NUMBER",
            Self::And => "AND",
            Self::Class => "CLASS",
            Self::Else => "ELSE",
            Self::False => "FALSE",
            Self::For => "FOR",
            Self::Fun => "FUN",
            Self::If => "IF",
            Self::Nil => "NIL",
            Self::Or => "OR",
            Self::Print => "PRINT",
            Self::Return => "RETURN",
            Self::Super => "SUPER",
            Self::This => "THIS",
            Self::True => "TRUE",
            Self::Var => "VAR",
            Self::While => "WHILE",
            Self::Comment => "COMMENT",
            Self::NewLine => "NEWLINE",
            Self::Eof => "EOF",
        }
    }

    /// Returns `true` for keywords that begin a declaration or statement.
    ///
    /// The parser stops discarding tokens at these during synchronization.
    #[must_use]
    pub const fn starts_statement(self) -> bool {
        matches!(self,
                 Self::Class
                 | Self::Fun
                 | Self::Var
                 | Self::For
                 | Self::If
                 | Self::While
                 | Self::Print
                 | Self::Return)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Literal payload carried by `NUMBER` and `STRING` tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// A numeric literal.
    Number(f64),
    /// The contents of a string literal, without the quotes.
    Str(String),
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

/// A scanned token: its kind, the exact source text, an optional literal
/// payload and the line the token ends on.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Lexical category.
    pub kind:    TokenKind,
    /// The source substring the token was scanned from.
    pub lexeme:  String,
    /// Literal value for numbers and strings.
    pub literal: Option<Literal>,
    /// 1-based source line.
    pub line:    usize,
}

impl Token {
    /// Builds a token from its kind and lexeme, deriving the literal payload.
    ///
    /// # Example
    /// ```
    /// use treelox::interpreter::token::{Literal, Token, TokenKind};
    ///
    /// let token = Token::new(TokenKind::Number, "45.67", 1);
    /// assert_eq!(token.literal, Some(Literal::Number(45.67)));
    ///
    /// let token = Token::new(TokenKind::String, "\"hi\"", 1);
    /// assert_eq!(token.literal, Some(Literal::Str("hi".to_string())));
    /// ```
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: &str, line: usize) -> Self {
        let literal = match kind {
            TokenKind::Number => lexeme.parse().ok().map(Literal::Number),
            TokenKind::String => {
                let body = lexeme.strip_prefix('"')
                                 .and_then(|s| s.strip_suffix('"'))
                                 .unwrap_or(lexeme);
                Some(Literal::Str(body.to_string()))
            },
            _ => None,
        };

        Self { kind,
               lexeme: lexeme.to_string(),
               literal,
               line }
    }

    /// Builds the end-of-input marker.
    #[must_use]
    pub const fn eof(line: usize) -> Self {
        Self { kind: TokenKind::Eof,
               lexeme: String::new(),
               literal: None,
               line }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.literal {
            Some(literal) => write!(f, "{} {} {literal}", self.kind, self.lexeme),
            None => write!(f, "{} {} nil", self.kind, self.lexeme),
        }
    }
}
