use crate::{ast::UnaryOperator, interpreter::environment::Environment};

impl Environment {
    /// Applies a prefix sign to an already evaluated operand.
    ///
    /// # Example
    /// ```
    /// use tally::{ast::UnaryOperator, interpreter::environment::Environment};
    ///
    /// assert_eq!(Environment::eval_unary(UnaryOperator::Negate, 5.0), -5.0);
    /// assert_eq!(Environment::eval_unary(UnaryOperator::Plus, -5.0), -5.0);
    /// ```
    #[must_use]
    pub fn eval_unary(op: UnaryOperator, value: f64) -> f64 {
        match op {
            UnaryOperator::Plus => value,
            UnaryOperator::Negate => -value,
        }
    }
}
