/// Dispatch of binary operators to their implementations.
pub mod core;

/// Arithmetic on numbers and string concatenation.
pub mod scalar;

/// Ordering comparisons and equality.
pub mod comparison;

/// Short-circuiting `and` / `or`.
pub mod logic;
