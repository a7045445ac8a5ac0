/// Callable values.
///
/// Defines user-defined functions with their captured environment and native
/// built-ins behind one `Callable` type with a fixed arity.
pub mod callable;

pub mod core;
