/// Core evaluation logic.
///
/// Walks an expression tree and resolves variable references against the
/// [`Environment`](crate::interpreter::environment::Environment).
pub mod core;

/// Unary operator evaluation.
///
/// Applies prefix signs to a single operand.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements the four arithmetic operators with plain IEEE 754 semantics.
pub mod binary;
