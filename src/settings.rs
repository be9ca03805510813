/// Default limit on operator nesting inside one expression.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Run-wide options handed to the reporter, cursor and expression builder.
///
/// There is no process-wide state: every component that needs an option
/// receives it through this struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Writes every token to the diagnostic stream as it is read.
    pub verbose:   bool,
    /// Deepest nesting of signs, and longest chain of operators, accepted
    /// before the builder drops the rest of a statement.
    pub max_depth: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self { verbose:   false,
               max_depth: DEFAULT_MAX_DEPTH, }
    }
}

impl Settings {
    /// Returns a copy with token tracing switched on or off.
    ///
    /// # Example
    /// ```
    /// use tally::Settings;
    ///
    /// let settings = Settings::default().with_verbose(true);
    /// assert!(settings.verbose);
    /// ```
    #[must_use]
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Returns a copy with a different nesting limit.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
