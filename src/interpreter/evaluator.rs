/// Core evaluation logic and interpreter state.
///
/// Contains the `Interpreter`, statement execution, block scoping and the
/// expression dispatch.
pub mod core;

/// Unary operator evaluation.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements arithmetic, string concatenation, comparisons, equality and
/// the short-circuiting logical operators.
pub mod binary;

/// Function evaluation.
///
/// Handles call expressions, arity checking, invocation of user-defined
/// closures and the native built-ins.
pub mod function;

/// Utility functions for the evaluator.
///
/// Provides operand checks shared by the operator implementations.
pub mod utils;
