//! # tally
//!
//! tally reads assignment statements of the form `name = expression ;`,
//! evaluates each right-hand side against the variables assigned so far and
//! prints the result as `val=<value>`.
//!
//! Expressions combine integer literals and variables with `+`, `-`, `*`, `/`
//! and prefix signs. Malformed input never aborts a run: every problem is
//! reported as a one-line diagnostic and a default value is used instead.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{self, Write};

use crate::interpreter::driver::StatementDriver;
pub use crate::{interpreter::driver::Outcome, settings::Settings};

/// Defines the expression tree.
///
/// This module declares the `Expr` enum and the operator types that represent
/// one parsed right-hand side. Trees are built by the parser and only read by
/// the evaluator.
pub mod ast;
/// Provides the diagnostic types for lexing, parsing and evaluation.
///
/// Every variant describes a condition the interpreter recovers from and
/// carries the source line it was found on.
pub mod error;
/// Orchestrates lexing, parsing, evaluation and output.
///
/// # Responsibilities
/// - Turns source text into tokens with one token of lookahead.
/// - Builds expression trees by precedence climbing.
/// - Evaluates trees against the accumulated variables.
/// - Drives the statement loop and reports diagnostics.
pub mod interpreter;
/// Run-wide options such as verbose token tracing.
pub mod settings;
/// Numeric conversion helpers.
pub mod util;

/// Runs every statement in `source` against a fresh environment.
///
/// One `val=<value>` line per completed assignment is written to `out`.
/// Diagnostics, and token traces when [`Settings::verbose`] is set, are
/// written to `diagnostics`.
///
/// # Errors
/// Returns an error only if writing to either stream fails.
///
/// # Examples
/// ```
/// use tally::{Settings, run};
///
/// let mut out = Vec::new();
/// let mut diagnostics = Vec::new();
/// let outcome = run("a = 4 ; b = a * 2 ;", &Settings::default(), &mut out, &mut diagnostics).unwrap();
///
/// assert_eq!(String::from_utf8(out).unwrap(), "val=4\nval=8\n");
/// assert_eq!(outcome.environment.get("b"), Some(8.0));
/// assert_eq!(outcome.diagnostics, 0);
///
/// // Unknown variables read as zero and are reported.
/// let mut out = Vec::new();
/// let outcome = run("b = missing + 1 ;", &Settings::default(), &mut out, &mut diagnostics).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "val=1\n");
/// assert_eq!(outcome.diagnostics, 1);
/// ```
pub fn run<O: Write, D: Write>(source: &str,
                               settings: &Settings,
                               out: O,
                               diagnostics: D)
                               -> io::Result<Outcome> {
    StatementDriver::new(source, settings, out, diagnostics).run()
}
