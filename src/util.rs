/// Numeric conversion helpers.
///
/// Converts the digit runs produced by the lexer into the `f64` values the
/// expression tree stores.
pub mod num;
