use std::collections::HashMap;

/// The variable table shared by every statement of a run.
///
/// Names are case-sensitive. Entries are created or overwritten by successful
/// assignments and never removed. Evaluation only reads the table; the
/// statement driver writes to it between statements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    variables: HashMap<String, f64>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the last value assigned to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.variables.get(name).copied()
    }

    /// Stores `value` under `name`, replacing any earlier value.
    ///
    /// # Example
    /// ```
    /// use tally::interpreter::environment::Environment;
    ///
    /// let mut environment = Environment::new();
    /// environment.assign("a", 4.0);
    /// environment.assign("a", 5.0);
    /// assert_eq!(environment.get("a"), Some(5.0));
    /// assert_eq!(environment.get("A"), None);
    /// ```
    pub fn assign(&mut self, name: &str, value: f64) {
        self.variables.insert(name.to_string(), value);
    }

    /// Number of distinct variables assigned so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns `true` if nothing has been assigned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
