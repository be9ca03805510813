use std::io::{self, Write};

use tracing::debug;

use crate::{Settings, error::Diagnostic, interpreter::lexer::Token};

/// Writes diagnostics and token traces to the diagnostic stream.
///
/// Diagnostics are advisory, so reporting one never fails. The first write
/// error is kept and surfaced by [`Reporter::finish`]; later output is
/// dropped.
pub struct Reporter<W> {
    sink:     W,
    verbose:  bool,
    reported: usize,
    failure:  Option<io::Error>,
}

impl<W: Write> Reporter<W> {
    /// Creates a reporter writing to `sink`.
    pub const fn new(sink: W, settings: &Settings) -> Self {
        Self { sink,
               verbose: settings.verbose,
               reported: 0,
               failure: None }
    }

    /// Renders `diagnostic` as one line and counts it.
    pub fn report(&mut self, diagnostic: impl Into<Diagnostic>) {
        let diagnostic = diagnostic.into();
        self.reported += 1;
        debug!(line = diagnostic.line(), "diagnostic reported");
        self.write_line(format_args!("{diagnostic}"));
    }

    /// Writes a `Token: <kind> value: <text>` line when tracing is enabled.
    ///
    /// Tokens without source text omit the `value:` part.
    pub fn trace_token(&mut self, token: Token<'_>, line: usize) {
        if !self.verbose {
            return;
        }
        match token.text() {
            "" => self.write_line(format_args!("Token: {} (line {line})", token.kind())),
            text => self.write_line(format_args!("Token: {} value: {text} (line {line})",
                                                 token.kind())),
        }
    }

    /// Number of diagnostics reported so far.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.reported
    }

    /// Flushes the sink and returns the number of diagnostics reported.
    ///
    /// # Errors
    /// Returns the first error hit while writing to the sink.
    pub fn finish(mut self) -> io::Result<usize> {
        if let Some(e) = self.failure {
            return Err(e);
        }
        self.sink.flush()?;
        Ok(self.reported)
    }

    fn write_line(&mut self, line: std::fmt::Arguments<'_>) {
        if self.failure.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.sink, "{line}") {
            self.failure = Some(e);
        }
    }
}
