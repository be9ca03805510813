use std::io::Write;

use tracing::trace;

use crate::{
    Settings,
    ast::Expr,
    error::ParseError,
    interpreter::{cursor::TokenCursor, lexer::Token, reporter::Reporter},
};

/// Value of an expression cut short by the end of the input.
pub const TRUNCATED_VALUE: f64 = -1.0;

/// Signals that the input ended while an expression was still open.
///
/// Carried up through every level of the builder so the whole expression,
/// not just the innermost operand, is replaced by [`TRUNCATED_VALUE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndOfInput;

pub type ParseResult<T> = Result<T, EndOfInput>;

/// Builder state for a single expression.
///
/// Created by [`parse_expression`] and dropped once the expression is built.
pub(crate) struct ExpressionBuilder<'a, 'src, W> {
    pub(crate) cursor:    &'a mut TokenCursor<'src>,
    pub(crate) reporter:  &'a mut Reporter<W>,
    pub(crate) max_depth: usize,
    pub(crate) depth:     usize,
    start:                usize,
}

/// Parses the right-hand side of an assignment.
///
/// Stops in front of the first `;`, end of input, or token that cannot
/// continue the expression; consuming that terminator is the caller's job.
/// Malformed input never fails: offending tokens are reported and replaced by
/// a zero literal. If the input ends after the expression has consumed at
/// least one token, the whole expression becomes [`TRUNCATED_VALUE`].
///
/// Grammar:
/// ```text
///     expr   := term (("+" | "-") term)*
///     term   := factor (("*" | "/") factor)*
///     factor := NUMBER | IDENT | ("+" | "-") factor
/// ```
///
/// # Parameters
/// - `cursor`: Token cursor positioned after the `=`.
/// - `reporter`: Receives every diagnostic raised while parsing.
/// - `settings`: Supplies the nesting limit.
///
/// # Returns
/// The expression tree.
///
/// # Example
/// ```
/// use tally::{
///     Settings,
///     interpreter::{cursor::TokenCursor, parser::core::parse_expression, reporter::Reporter},
/// };
///
/// let mut reporter = Reporter::new(Vec::new(), &Settings::default());
/// let mut cursor = TokenCursor::new("2 + 3 * 4 ;");
///
/// let expr = parse_expression(&mut cursor, &mut reporter, &Settings::default());
/// assert_eq!(expr.to_string(), "(2 + (3 * 4))");
/// ```
pub fn parse_expression<W: Write>(cursor: &mut TokenCursor<'_>,
                                  reporter: &mut Reporter<W>,
                                  settings: &Settings)
                                  -> Expr {
    let start = cursor.consumed();
    let mut builder = ExpressionBuilder { cursor,
                                          reporter,
                                          max_depth: settings.max_depth,
                                          depth: 0,
                                          start };

    match builder.parse_expression_at(1) {
        Ok(expr) => {
            trace!(%expr, "expression built");
            expr
        },
        Err(EndOfInput) => {
            let line = builder.cursor.line();
            builder.reporter
                   .report(ParseError::UnexpectedEndOfInput { line });
            Expr::literal(TRUNCATED_VALUE)
        },
    }
}

impl<W: Write> ExpressionBuilder<'_, '_, W> {
    /// Reports that the expression outgrew the nesting limit and drops the
    /// rest of the statement, stopping in front of `;` or end of input.
    pub(crate) fn abandon_too_deep(&mut self) {
        let line = self.cursor.line();
        self.reporter
            .report(ParseError::ExpressionTooDeep { max_depth: self.max_depth,
                                                    line });
        while !matches!(self.cursor.peek(self.reporter),
                        Token::Semicolon | Token::EndOfStream)
        {
            self.cursor.advance();
        }
    }

    /// Handles end of input at the current position.
    ///
    /// An expression that has not consumed anything yet is empty and keeps
    /// `fallback`; anything else was truncated.
    pub(crate) fn end_of_input(&self, fallback: Expr) -> ParseResult<Expr> {
        if self.cursor.consumed() == self.start {
            Ok(fallback)
        } else {
            Err(EndOfInput)
        }
    }
}
