/// Lexing and parsing diagnostics.
///
/// Defines every condition the lexer, token cursor or expression builder can
/// recover from: stray characters, misplaced tokens, unparsable literals and
/// truncated expressions.
pub mod parse_error;
/// Evaluation diagnostics.
///
/// Contains the conditions raised while reducing an expression tree to a
/// number, such as references to variables that were never assigned.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any advisory message produced while processing a statement.
///
/// Diagnostics never abort a run. The component that raises one substitutes a
/// default value and carries on; the [`Reporter`] renders it as a single line
/// on the diagnostic stream.
///
/// [`Reporter`]: crate::interpreter::reporter::Reporter
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Diagnostic {
    /// Raised by the lexer or the expression builder.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Raised by the evaluator.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Diagnostic {
    /// Returns the source line the diagnostic refers to.
    ///
    /// # Example
    /// ```
    /// use tally::error::{Diagnostic, RuntimeError};
    ///
    /// let diagnostic = Diagnostic::from(RuntimeError::UnknownVariable { name: "x".to_string(),
    ///                                                                   line: 4, });
    /// assert_eq!(diagnostic.line(), 4);
    /// ```
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Parse(e) => e.line(),
            Self::Runtime(e) => e.line(),
        }
    }
}
