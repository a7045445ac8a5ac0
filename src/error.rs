/// Lexical and syntax errors.
///
/// Defines the diagnostics recorded while scanning and parsing source code.
/// They accumulate across a whole file and are reported together.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. The first
/// runtime error halts execution.
pub mod runtime_error;

pub use parse_error::{Location, ParseError};
pub use runtime_error::RuntimeError;
