use std::io::{self, Write};

use tracing::debug;

use crate::{
    Settings,
    error::ParseError,
    interpreter::{
        cursor::TokenCursor,
        environment::Environment,
        lexer::Token,
        parser::core::parse_expression,
        reporter::Reporter,
    },
};

/// What a finished run leaves behind.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// Every variable assigned during the run, with its last value.
    pub environment: Environment,
    /// Number of diagnostics written to the diagnostic stream.
    pub diagnostics: usize,
}

/// Position of the driver within an assignment statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State<'src> {
    ExpectName,
    ExpectEquals { name: &'src str },
    ExpectExpression { name: &'src str },
    Done,
}

/// Runs `name = expression ;` statements in arrival order.
///
/// Each assignment is visible to every later statement. Values go to `out`
/// as `val=<value>` lines; diagnostics and token traces go to the diagnostic
/// stream of the [`Reporter`].
pub struct StatementDriver<'src, O, D> {
    cursor:      TokenCursor<'src>,
    reporter:    Reporter<D>,
    environment: Environment,
    settings:    Settings,
    out:         O,
}

impl<'src, O: Write, D: Write> StatementDriver<'src, O, D> {
    /// Creates a driver over `source` with an empty environment.
    pub fn new(source: &'src str, settings: &Settings, out: O, diagnostics: D) -> Self {
        Self { cursor: TokenCursor::new(source),
               reporter: Reporter::new(diagnostics, settings),
               environment: Environment::new(),
               settings: *settings,
               out }
    }

    /// Processes statements until the end of the input is reached where a
    /// variable name is expected.
    ///
    /// # Errors
    /// Returns an error only if writing to `out` or to the diagnostic stream
    /// fails.
    pub fn run(mut self) -> io::Result<Outcome> {
        let mut state = State::ExpectName;
        while state != State::Done {
            state = match state {
                State::ExpectName => self.expect_name(),
                State::ExpectEquals { name } => self.expect_equals(name),
                State::ExpectExpression { name } => self.assign(name)?,
                State::Done => State::Done,
            };
        }

        self.out.flush()?;
        let diagnostics = self.reporter.finish()?;
        debug!(variables = self.environment.len(), diagnostics, "input exhausted");

        Ok(Outcome { environment: self.environment,
                     diagnostics })
    }

    /// Consumes one token, which must name the variable to assign.
    ///
    /// Anything else is reported and dropped; the next token gets another
    /// chance to start a statement.
    fn expect_name(&mut self) -> State<'src> {
        match self.cursor.consume(&mut self.reporter) {
            Token::EndOfStream => State::Done,
            Token::Identifier(name) => State::ExpectEquals { name },
            other => {
                let line = self.cursor.line();
                self.reporter
                    .report(ParseError::UnexpectedToken { expected: "a variable name",
                                                          found: other.to_string(),
                                                          line });
                State::ExpectName
            },
        }
    }

    /// Consumes one token, which must be `=`.
    ///
    /// End of input is let through so the statement still completes.
    /// Anything else abandons the statement without assigning.
    fn expect_equals(&mut self, name: &'src str) -> State<'src> {
        match self.cursor.consume(&mut self.reporter) {
            Token::Equals | Token::EndOfStream => State::ExpectExpression { name },
            other => {
                let line = self.cursor.line();
                self.reporter
                    .report(ParseError::UnexpectedToken { expected: "'='",
                                                          found: other.to_string(),
                                                          line });
                State::ExpectName
            },
        }
    }

    /// Parses and evaluates the right-hand side, stores it and prints it.
    fn assign(&mut self, name: &'src str) -> io::Result<State<'src>> {
        let expr = parse_expression(&mut self.cursor, &mut self.reporter, &self.settings);

        let line = self.cursor.line();
        match self.cursor.consume(&mut self.reporter) {
            Token::Semicolon | Token::EndOfStream => {},
            other => {
                self.reporter
                    .report(ParseError::UnexpectedToken { expected: "';'",
                                                          found: other.to_string(),
                                                          line });
            },
        }

        let value = self.environment.eval(&expr, &mut self.reporter);
        self.environment.assign(name, value);
        debug!(variable = name, value, "assigned");
        writeln!(self.out, "val={value}")?;

        Ok(State::ExpectName)
    }
}
