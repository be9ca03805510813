/// Entry point of the expression builder.
///
/// Owns the per-expression builder state, the end-of-input policy and the
/// sentinel values substituted for truncated input.
pub mod core;

/// Binary operator parsing.
///
/// Implements precedence climbing over `+`, `-`, `*` and `/`.
pub mod binary;

/// Primary and signed operand parsing.
///
/// Handles literals, variable references, prefix signs and every token that
/// cannot start an operand.
pub mod unary;
