use std::io::Write;

use crate::interpreter::{
    lexer::{Lexer, Token},
    reporter::Reporter,
};

/// One token of lookahead over a [`Lexer`].
///
/// [`TokenCursor::peek`] pulls a token from the lexer on first access and
/// caches it together with its line; [`TokenCursor::advance`] drops the cached
/// token so the next peek pulls a fresh one.
pub struct TokenCursor<'src> {
    lexer:    Lexer<'src>,
    current:  Option<(Token<'src>, usize)>,
    consumed: usize,
}

impl<'src> TokenCursor<'src> {
    /// Creates a cursor at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer:    Lexer::new(source),
               current:  None,
               consumed: 0, }
    }

    /// Returns the current token without consuming it.
    ///
    /// # Example
    /// ```
    /// use tally::{
    ///     Settings,
    ///     interpreter::{cursor::TokenCursor, lexer::Token, reporter::Reporter},
    /// };
    ///
    /// let mut reporter = Reporter::new(Vec::new(), &Settings::default());
    /// let mut cursor = TokenCursor::new("a ;");
    ///
    /// assert_eq!(cursor.peek(&mut reporter), Token::Identifier("a"));
    /// assert_eq!(cursor.peek(&mut reporter), Token::Identifier("a"));
    /// cursor.advance();
    /// assert_eq!(cursor.consume(&mut reporter), Token::Semicolon);
    /// assert_eq!(cursor.consumed(), 2);
    /// ```
    pub fn peek<W: Write>(&mut self, reporter: &mut Reporter<W>) -> Token<'src> {
        if let Some((token, _)) = self.current {
            return token;
        }
        let token = self.lexer.next_token(reporter);
        let line = self.lexer.line();
        reporter.trace_token(token, line);
        self.current = Some((token, line));
        token
    }

    /// Consumes the current token. Does nothing if none has been peeked.
    pub fn advance(&mut self) {
        if self.current.take().is_some() {
            self.consumed += 1;
        }
    }

    /// Returns the current token and consumes it.
    pub fn consume<W: Write>(&mut self, reporter: &mut Reporter<W>) -> Token<'src> {
        let token = self.peek(reporter);
        self.advance();
        token
    }

    /// Line of the current token, or of the lexer position if none is cached.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self.current {
            Some((_, line)) => line,
            None => self.lexer.line(),
        }
    }

    /// Number of tokens consumed so far.
    #[must_use]
    pub const fn consumed(&self) -> usize {
        self.consumed
    }
}
