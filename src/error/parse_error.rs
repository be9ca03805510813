use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all recoverable errors found during lexing or parsing.
pub enum ParseError {
    /// A character that starts no token was skipped.
    #[error("Error on line {line}: Found character '{character}' which doesn't seem to be useful here.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A token showed up where something else was required.
    #[error("Error on line {line}: Expected {expected}, found {found}.")]
    UnexpectedToken {
        /// What the parser was looking for.
        expected: &'static str,
        /// The token encountered.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A numeric literal could not be converted; `-1` is used instead.
    #[error("Error on line {line}: Invalid number {text}, replacing with -1.")]
    InvalidNumber {
        /// The literal text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An `=` appeared inside an expression and was skipped.
    #[error("Error on line {line}: Unexpected '='.")]
    UnexpectedEquals {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The input ended before the expression was terminated.
    #[error("Error on line {line}: Unexpected end of input, using -1.")]
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Operators were nested beyond the configured limit.
    #[error("Error on line {line}: Expression nested deeper than {max_depth} levels, using 0.")]
    ExpressionTooDeep {
        /// The configured nesting limit.
        max_depth: usize,
        /// The source line where the error occurred.
        line:      usize,
    },
}

impl ParseError {
    /// Returns the source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { line, .. }
            | Self::UnexpectedToken { line, .. }
            | Self::InvalidNumber { line, .. }
            | Self::UnexpectedEquals { line }
            | Self::UnexpectedEndOfInput { line }
            | Self::ExpressionTooDeep { line, .. } => *line,
        }
    }
}
