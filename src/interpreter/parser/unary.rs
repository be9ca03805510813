use std::io::Write;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ExpressionBuilder, ParseResult},
    },
    util::num::{INVALID_NUMBER, literal_to_f64},
};

impl<W: Write> ExpressionBuilder<'_, '_, W> {
    /// Parses a primary (atomic) operand.
    ///
    /// Grammar:
    /// ```text
    ///     primary := NUMBER
    ///              | IDENT
    ///              | ("+" | "-") primary
    /// ```
    ///
    /// Recovery rules:
    /// - `;` yields a zero literal and is left for the caller.
    /// - End of input yields a zero literal for an empty expression and
    ///   truncates anything else.
    /// - `=` is reported and skipped, and parsing resumes with the next
    ///   token.
    /// - Any other token is reported, consumed and replaced by a zero
    ///   literal.
    pub(crate) fn parse_primary(&mut self) -> ParseResult<Expr> {
        loop {
            let token = self.cursor.peek(self.reporter);
            let line = self.cursor.line();

            match token {
                Token::Number(text) => {
                    self.cursor.advance();
                    return Ok(Expr::literal(self.number(text, line)));
                },
                Token::Identifier(name) => {
                    self.cursor.advance();
                    return Ok(Expr::Variable { name: name.to_string(),
                                               line });
                },
                Token::Plus => return self.parse_signed(UnaryOperator::Plus),
                Token::Minus => return self.parse_signed(UnaryOperator::Negate),
                Token::Semicolon => return Ok(Expr::literal(0.0)),
                Token::EndOfStream => return self.end_of_input(Expr::literal(0.0)),
                Token::Equals => {
                    self.reporter.report(ParseError::UnexpectedEquals { line });
                    self.cursor.advance();
                },
                other => {
                    self.reporter
                        .report(ParseError::UnexpectedToken { expected: "a number, variable or sign",
                                                              found: other.to_string(),
                                                              line });
                    self.cursor.advance();
                    return Ok(Expr::literal(0.0));
                },
            }
        }
    }

    /// Parses the operand of a prefix sign; the cursor is on the sign.
    ///
    /// Signs nest (`- - 5` is `5`). Past the configured depth the operand is
    /// replaced by a zero literal and the rest of the statement is dropped.
    fn parse_signed(&mut self, op: UnaryOperator) -> ParseResult<Expr> {
        self.cursor.advance();

        if self.depth >= self.max_depth {
            self.abandon_too_deep();
            return Ok(Expr::literal(0.0));
        }

        self.depth += 1;
        let operand = self.parse_primary();
        self.depth -= 1;

        Ok(Expr::unary(op, operand?))
    }

    /// Converts a number token, substituting [`INVALID_NUMBER`] on failure.
    fn number(&mut self, text: &str, line: usize) -> f64 {
        literal_to_f64(text).unwrap_or_else(|| {
                                self.reporter
                                    .report(ParseError::InvalidNumber { text: text.to_string(),
                                                                        line });
                                INVALID_NUMBER
                            })
    }
}
