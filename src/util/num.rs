/// Value substituted for a literal that cannot be converted.
pub const INVALID_NUMBER: f64 = -1.0;

/// Converts the text of a numeric literal to `f64`.
///
/// The lexer only ever hands over runs of ASCII digits, so this succeeds for
/// everything it produces. Very long runs round to the nearest representable
/// value, or to infinity past `f64::MAX`.
///
/// ## Parameters
/// - `text`: The literal as written in the source.
///
/// ## Returns
/// - `Some(f64)`: The converted value.
/// - `None`: If `text` is not a number.
///
/// ## Example
/// ```
/// use tally::util::num::literal_to_f64;
///
/// assert_eq!(literal_to_f64("042"), Some(42.0));
/// assert_eq!(literal_to_f64("4x"), None);
/// ```
#[must_use]
pub fn literal_to_f64(text: &str) -> Option<f64> {
    text.parse().ok()
}
