/// Parser state and entry points.
///
/// Defines [`core::Parser`], its token cursor helpers, the program and
/// single-expression entry points, and panic-mode synchronization.
pub mod core;

/// Declaration and statement parsing.
///
/// Handles `var` and `fun` declarations, `print`, `return`, `if`, `while`
/// and the desugaring of `for` into a `while` loop.
pub mod statement;

/// Binary operator parsing.
///
/// Implements the precedence levels from assignment down to factor,
/// including the short-circuiting `and`/`or` operators.
pub mod binary;

/// Unary, call and primary expression parsing.
pub mod unary;

/// Block parsing.
///
/// Parses brace-delimited declaration lists, recovering from errors inside
/// the block without leaving it.
pub mod block;

/// Utility functions for the parser.
///
/// Provides argument list parsing and the token-to-operator mappings.
pub mod utils;
