use std::time::{SystemTime, UNIX_EPOCH};

use crate::interpreter::value::{callable::NativeFunction, core::Value};

/// Defines the native built-ins by generating their lookup table.
///
/// Each entry provides:
/// - a string name,
/// - the exact arity,
/// - a function pointer implementing the built-in.
///
/// The macro produces `BUILTINS`, the table the interpreter registers in the
/// global scope.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        pub static BUILTINS: &[NativeFunction] = &[
            $(
                NativeFunction { name: $name, arity: $arity, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "clock" => { arity: 0, func: clock },
}

/// Returns the seconds elapsed since the UNIX epoch as a number.
///
/// A clock set before the epoch reads as `0`.
///
/// # Example
/// ```
/// use treelox::interpreter::{evaluator::function::builtin::clock, value::core::Value};
///
/// let Value::Number(seconds) = clock(&[]) else { panic!("clock returned a non-number") };
/// assert!(seconds > 0.0);
/// ```
#[must_use]
pub fn clock(_args: &[Value]) -> Value {
    let elapsed = SystemTime::now().duration_since(UNIX_EPOCH)
                                   .map(|d| d.as_secs_f64())
                                   .unwrap_or_default();
    Value::Number(elapsed)
}
