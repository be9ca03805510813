use crate::{ast::BinaryOperator, interpreter::environment::Environment};

impl Environment {
    /// Evaluates a binary operation between two values.
    ///
    /// Division by zero is not guarded: it yields an infinity, or `NaN` for
    /// `0 / 0`, exactly as the floating-point operation does.
    ///
    /// # Example
    /// ```
    /// use tally::{ast::BinaryOperator, interpreter::environment::Environment};
    ///
    /// assert_eq!(Environment::eval_binary(BinaryOperator::Sub, 10.0, 3.0), 7.0);
    /// assert_eq!(Environment::eval_binary(BinaryOperator::Div, 1.0, 0.0), f64::INFINITY);
    /// assert!(Environment::eval_binary(BinaryOperator::Div, 0.0, 0.0).is_nan());
    /// ```
    #[must_use]
    pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
        match op {
            BinaryOperator::Add => left + right,
            BinaryOperator::Sub => left - right,
            BinaryOperator::Mul => left * right,
            BinaryOperator::Div => left / right,
        }
    }
}
