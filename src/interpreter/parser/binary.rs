use std::io::Write;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ExpressionBuilder, ParseResult},
    },
};

/// Maps a token to its corresponding binary operator.
///
/// Returns `None` for every token that cannot join two operands, which ends
/// the expression.
///
/// # Example
/// ```
/// use tally::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Star), Some(BinaryOperator::Mul));
/// assert_eq!(token_to_binary_operator(&Token::Equals), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token<'_>) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}

/// Binding power of `token` as an infix operator, `0` if it is not one.
#[must_use]
pub const fn token_precedence(token: &Token<'_>) -> u8 {
    match token_to_binary_operator(token) {
        Some(op) => op.precedence(),
        None => 0,
    }
}

impl<W: Write> ExpressionBuilder<'_, '_, W> {
    /// Parses an operand followed by every operator binding at least as
    /// tightly as `min_precedence`.
    pub(crate) fn parse_expression_at(&mut self, min_precedence: u8) -> ParseResult<Expr> {
        let left = self.parse_primary()?;
        self.climb(left, min_precedence)
    }

    /// Extends `left` with operator/operand pairs by precedence climbing.
    ///
    /// Operators of equal precedence associate to the left. When the operator
    /// following a right-hand operand binds tighter than the one before it,
    /// that operand is first extended recursively, so `2 + 3 * 4` becomes
    /// `2 + (3 * 4)`.
    ///
    /// A stray `=` is reported and skipped. A `;` or any token that is not an
    /// operator ends the expression without being consumed.
    ///
    /// Every operator taken here adds a level to the left spine of the tree,
    /// so a chain longer than the nesting limit is cut off there and the rest
    /// of the statement is dropped.
    fn climb(&mut self, mut left: Expr, min_precedence: u8) -> ParseResult<Expr> {
        let mut chained = 0;
        loop {
            let token = self.cursor.peek(self.reporter);
            match token {
                Token::Semicolon => return Ok(left),
                Token::EndOfStream => return self.end_of_input(left),
                Token::Equals => {
                    let line = self.cursor.line();
                    self.reporter.report(ParseError::UnexpectedEquals { line });
                    self.cursor.advance();
                    continue;
                },
                _ => {},
            }

            let Some(op) = token_to_binary_operator(&token) else {
                return Ok(left);
            };
            if op.precedence() < min_precedence {
                return Ok(left);
            }
            if chained == self.max_depth {
                self.abandon_too_deep();
                return Ok(left);
            }
            chained += 1;
            self.cursor.advance();

            let mut right = self.parse_primary()?;
            while token_precedence(&self.cursor.peek(self.reporter)) > op.precedence() {
                right = self.climb(right, op.precedence() + 1)?;
            }

            left = Expr::binary(left, op, right);
        }
    }
}
