use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all recoverable errors found during evaluation.
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned; `0` is used instead.
    #[error("Error on line {line}: Invalid variable {name}, using 0.")]
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl RuntimeError {
    /// Returns the source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownVariable { line, .. } => *line,
        }
    }
}
