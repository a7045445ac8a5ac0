/// Native built-in function implementations.
///
/// Contains the host functions registered in the global scope.
pub mod builtin;

pub mod core;
