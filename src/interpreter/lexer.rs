use std::io::Write;

use logos::Logos;

use crate::{error::ParseError, interpreter::reporter::Reporter};

/// Represents a lexical token in the source input.
///
/// Identifier and number tokens borrow their text from the source. Tokens are
/// consumed exactly once by the parser and compare by value.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token<'src> {
    /// Variable names such as `x` or `total2`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", slice)]
    Identifier(&'src str),
    /// Integer literals such as `42`. A `.` never continues a number.
    #[regex(r"[0-9]+", slice)]
    Number(&'src str),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `=`
    #[token("=")]
    Equals,
    /// `;`
    #[token(";")]
    Semicolon,
    /// Returned once the source is exhausted, and on every call after that.
    EndOfStream,
}

impl Token<'_> {
    /// Name of the token kind, as shown in verbose traces.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Identifier(_) => "Identifier",
            Self::Number(_) => "Number",
            Self::Plus => "Plus",
            Self::Minus => "Minus",
            Self::Star => "Multiply",
            Self::Slash => "Divide",
            Self::LParen => "LeftParen",
            Self::RParen => "RightParen",
            Self::Equals => "Equals",
            Self::Semicolon => "Semicolon",
            Self::EndOfStream => "EndOfStream",
        }
    }

    /// Source text of identifier and number tokens, empty for the rest.
    #[must_use]
    pub const fn text(&self) -> &str {
        match self {
            Self::Identifier(text) | Self::Number(text) => *text,
            _ => "",
        }
    }
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::Number(text) => write!(f, "number {text}"),
            Self::Plus => f.write_str("'+'"),
            Self::Minus => f.write_str("'-'"),
            Self::Star => f.write_str("'*'"),
            Self::Slash => f.write_str("'/'"),
            Self::LParen => f.write_str("'('"),
            Self::RParen => f.write_str("')'"),
            Self::Equals => f.write_str("'='"),
            Self::Semicolon => f.write_str("';'"),
            Self::EndOfStream => f.write_str("end of input"),
        }
    }
}

/// Returns the matched source text of the current token.
fn slice<'src>(lex: &logos::Lexer<'src, Token<'src>>) -> &'src str {
    lex.slice()
}

/// Lazily turns source text into [`Token`]s.
///
/// Characters that start no token are reported through the [`Reporter`] and
/// skipped. Once the input is exhausted every further call yields
/// [`Token::EndOfStream`].
pub struct Lexer<'src> {
    inner:   logos::Lexer<'src, Token<'src>>,
    /// Line of the most recently produced token.
    line:    usize,
    /// Byte offset up to which newlines have been counted.
    counted: usize,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at line 1 of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner:   Token::lexer(source),
               line:    1,
               counted: 0, }
    }

    /// Line of the most recently produced token.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Advances the line counter over the source skipped before `offset`.
    fn count_lines_to(&mut self, offset: usize) {
        let skipped = &self.inner.source()[self.counted..offset];
        self.line += skipped.bytes().filter(|&b| b == b'\n').count();
        self.counted = offset;
    }

    /// Produces the next token.
    ///
    /// # Parameters
    /// - `reporter`: Receives an [`ParseError::UnexpectedCharacter`] for every
    ///   skipped character.
    ///
    /// # Returns
    /// The next meaningful token, or [`Token::EndOfStream`].
    ///
    /// # Example
    /// ```
    /// use tally::{
    ///     Settings,
    ///     interpreter::{
    ///         lexer::{Lexer, Token},
    ///         reporter::Reporter,
    ///     },
    /// };
    ///
    /// let mut diagnostics = Vec::new();
    /// let mut reporter = Reporter::new(&mut diagnostics, &Settings::default());
    /// let mut lexer = Lexer::new("x1 = 7 # ;");
    ///
    /// assert_eq!(lexer.next_token(&mut reporter), Token::Identifier("x1"));
    /// assert_eq!(lexer.next_token(&mut reporter), Token::Equals);
    /// assert_eq!(lexer.next_token(&mut reporter), Token::Number("7"));
    /// assert_eq!(lexer.next_token(&mut reporter), Token::Semicolon);
    /// assert_eq!(lexer.next_token(&mut reporter), Token::EndOfStream);
    /// assert_eq!(lexer.next_token(&mut reporter), Token::EndOfStream);
    /// assert_eq!(reporter.count(), 1);
    /// ```
    pub fn next_token<W: Write>(&mut self, reporter: &mut Reporter<W>) -> Token<'src> {
        loop {
            let next = self.inner.next();
            let offset = next.as_ref()
                             .map_or(self.inner.source().len(), |_| self.inner.span().start);
            self.count_lines_to(offset);

            match next {
                Some(Ok(token)) => return token,
                Some(Err(())) => {
                    let line = self.line();
                    for character in self.inner.slice().chars() {
                        reporter.report(ParseError::UnexpectedCharacter { character, line });
                    }
                },
                None => return Token::EndOfStream,
            }
        }
    }
}
