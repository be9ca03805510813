use std::io::Write;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{environment::Environment, reporter::Reporter},
};

/// Value used for a variable that has never been assigned.
pub const UNKNOWN_VARIABLE_VALUE: f64 = 0.0;

impl Environment {
    /// Reduces an expression tree to a number.
    ///
    /// The tree is only borrowed and the environment only read, so the same
    /// tree evaluates to the same value until the next assignment. Evaluation
    /// never fails: unknown variables are reported and read as `0`.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `reporter`: Receives a diagnostic for every unknown variable.
    ///
    /// # Returns
    /// The value of the expression.
    ///
    /// # Example
    /// ```
    /// use tally::{
    ///     Settings,
    ///     ast::{BinaryOperator, Expr},
    ///     interpreter::{environment::Environment, reporter::Reporter},
    /// };
    ///
    /// let mut reporter = Reporter::new(Vec::new(), &Settings::default());
    /// let mut environment = Environment::new();
    /// environment.assign("a", 4.0);
    ///
    /// let expr = Expr::binary(Expr::Variable { name: "a".to_string(),
    ///                                          line: 1, },
    ///                         BinaryOperator::Mul,
    ///                         Expr::literal(2.0));
    /// assert_eq!(environment.eval(&expr, &mut reporter), 8.0);
    /// assert_eq!(reporter.count(), 0);
    /// ```
    pub fn eval<W: Write>(&self, expr: &Expr, reporter: &mut Reporter<W>) -> f64 {
        match expr {
            Expr::Literal { value } => *value,
            Expr::Variable { name, line } => self.eval_variable(name, *line, reporter),
            Expr::UnaryOp { op, expr } => Self::eval_unary(*op, self.eval(expr, reporter)),
            Expr::BinaryOp { left, op, right } => {
                let left = self.eval(left, reporter);
                let right = self.eval(right, reporter);
                Self::eval_binary(*op, left, right)
            },
        }
    }

    /// Looks up a variable, reporting it and yielding `0` when unassigned.
    fn eval_variable<W: Write>(&self, name: &str, line: usize, reporter: &mut Reporter<W>) -> f64 {
        self.get(name).unwrap_or_else(|| {
                          reporter.report(RuntimeError::UnknownVariable { name: name.to_string(),
                                                                          line });
                          UNKNOWN_VARIABLE_VALUE
                      })
    }
}
