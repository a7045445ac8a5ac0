use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Extracts both operands of an arithmetic or ordering operator as numbers.
///
/// # Errors
/// `RuntimeError::OperandsMustBeNumbers` if either operand is not a number.
///
/// # Example
/// ```
/// use treelox::interpreter::{evaluator::utils::number_operands, value::core::Value};
///
/// let pair = number_operands(&Value::Number(1.0), &Value::Number(2.0), 1).unwrap();
/// assert_eq!(pair, (1.0, 2.0));
///
/// assert!(number_operands(&Value::Number(1.0), &Value::Bool(true), 1).is_err());
/// ```
pub fn number_operands(left: &Value, right: &Value, line: usize) -> EvalResult<(f64, f64)> {
    match (left.as_number(), right.as_number()) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(RuntimeError::OperandsMustBeNumbers { line }),
    }
}

/// Checks that a call supplies exactly the declared number of arguments.
///
/// # Errors
/// `RuntimeError::ArgumentCountMismatch` naming both counts otherwise.
pub fn check_arity<T>(args: &[T], expected: usize, line: usize) -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RuntimeError::ArgumentCountMismatch { expected,
                                                  found: args.len(),
                                                  line })
    }
}

/// Runs `f` with enough native stack for one more nested call.
///
/// Each user-function call recurses through the evaluator several frames
/// deep; `stacker` moves onto a fresh segment when less than the red zone
/// remains, so the call depth limit is reached before the thread's stack is.
#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Minimum stack space to keep available (100KB red zone).
    const RED_ZONE: usize = 100 * 1024;

    /// Stack space to allocate when growing (1MB).
    const STACK_PER_RECURSION: usize = 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}
