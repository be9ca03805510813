/// A prefix sign applied to a single operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `+x`, which leaves the operand unchanged.
    Plus,
    /// `-x`.
    Negate,
}

/// One of the four arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Binding power used by the precedence climber.
    ///
    /// `*` and `/` bind tighter than `+` and `-`. All four are
    /// left-associative.
    ///
    /// # Example
    /// ```
    /// use tally::ast::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Mul.precedence() > BinaryOperator::Add.precedence());
    /// assert_eq!(BinaryOperator::Div.precedence(), BinaryOperator::Mul.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Mul | Self::Div => 2,
            Self::Add | Self::Sub => 1,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        f.write_str(symbol)
    }
}

/// A node of the expression tree built for the right-hand side of one
/// assignment.
///
/// Every operator node owns its operands, so a tree is acyclic and belongs
/// entirely to its root. Evaluation only ever borrows it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric constant.
    Literal {
        /// The constant value.
        value: f64,
    },
    /// Reference to a previously assigned variable.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A signed operand such as `-x`.
    UnaryOp {
        /// The sign to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
    },
    /// An arithmetic operation on two operands.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Shorthand for a [`Expr::Literal`] node.
    #[must_use]
    pub const fn literal(value: f64) -> Self {
        Self::Literal { value }
    }

    /// Builds a [`Expr::UnaryOp`] node that takes ownership of `expr`.
    #[must_use]
    pub fn unary(op: UnaryOperator, expr: Self) -> Self {
        Self::UnaryOp { op,
                        expr: Box::new(expr) }
    }

    /// Builds a [`Expr::BinaryOp`] node that takes ownership of both operands.
    ///
    /// # Example
    /// ```
    /// use tally::ast::{BinaryOperator, Expr};
    ///
    /// let sum = Expr::binary(Expr::literal(1.0), BinaryOperator::Add, Expr::literal(2.0));
    /// assert_eq!(sum.to_string(), "(1 + 2)");
    /// ```
    #[must_use]
    pub fn binary(left: Self, op: BinaryOperator, right: Self) -> Self {
        Self::BinaryOp { left: Box::new(left),
                         op,
                         right: Box::new(right) }
    }
}

impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Literal { value } => write!(f, "{value}"),
            Self::Variable { name, .. } => f.write_str(name),
            Self::UnaryOp { op: UnaryOperator::Plus,
                            expr, } => write!(f, "+{expr}"),
            Self::UnaryOp { op: UnaryOperator::Negate,
                            expr, } => write!(f, "-{expr}"),
            Self::BinaryOp { left, op, right } => write!(f, "({left} {op} {right})"),
        }
    }
}
