/// The token module defines the lexical vocabulary.
///
/// Declares the `logos`-derived `TokenKind` enum together with the `Token`
/// record (kind, lexeme, literal payload and line) that flows from the lexer
/// into the parser.
pub mod token;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens
/// terminated by `EOF`. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind and line.
/// - Handles numeric and string literals, identifiers, keywords and comments.
/// - Records lexical errors for stray characters and unterminated strings
///   without stopping the scan.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// the statement list that later phases execute.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Validates the grammar, reporting errors with the offending token.
/// - Recovers after an error so one mistake yields one diagnostic.
pub mod parser;
/// Lexical scopes.
///
/// Name-to-value maps chained to their enclosing scope and shared between
/// call frames and the closures that capture them.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the AST, evaluates expressions, runs statements
/// against the environment chain and invokes functions. It is the core
/// execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates every expression and statement form.
/// - Handles variables, closures and control flow, including `return`.
/// - Reports runtime errors such as type mismatches or undefined names.
pub mod evaluator;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum: nil, booleans, numbers, strings and callables.
/// - Implements truthiness, equality and the textual form used by `print`.
pub mod value;
