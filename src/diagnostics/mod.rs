//! Error reporting sink shared by the lexer and the parser
//!
//! Neither stage keeps error state of its own: every recoverable error is handed
//! to a [`Reporter`] as it is found. The host decides what to do with them.
//!
//! - [`ConsoleReporter`] prints `[line N] Error...: message` to stderr.
//! - [`CollectingReporter`] keeps every [`Diagnostic`] in memory. Tests and the
//!   inspector use it.

use crossterm::style::Stylize;
use std::fmt;

/// Receiver for lexical and syntax errors.
///
/// `location` is empty for lexical errors, `" at end"` when a syntax error
/// occurred at end of input, and `" at '<lexeme>'"` otherwise.
pub trait Reporter {
    fn report(&mut self, line: usize, location: &str, message: &str);
}

/// A reported error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub location: String,
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[line {}] Error{}: {}",
            self.line, self.location, self.message
        )
    }
}

/// Prints diagnostics to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&mut self, line: usize, location: &str, message: &str) {
        let diagnostic = Diagnostic {
            line,
            location: location.to_string(),
            message: message.to_string(),
        };
        eprintln!("{}", diagnostic.to_string().red());
    }
}

/// Stores diagnostics in the order they were reported.
#[derive(Debug, Default, Clone)]
pub struct CollectingReporter {
    pub diagnostics: Vec<Diagnostic>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn had_error(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn messages(&self) -> Vec<&str> {
        self.diagnostics
            .iter()
            .map(|d| d.message.as_str())
            .collect()
    }
}

impl Reporter for CollectingReporter {
    fn report(&mut self, line: usize, location: &str, message: &str) {
        self.diagnostics.push(Diagnostic {
            line,
            location: location.to_string(),
            message: message.to_string(),
        });
    }
}

/// Counts the errors passing through to another reporter.
///
/// Lets a single run know whether it failed without the reporter itself having
/// to expose any state.
pub struct Tally<'a> {
    inner: &'a mut dyn Reporter,
    count: usize,
}

impl<'a> Tally<'a> {
    pub fn new(inner: &'a mut dyn Reporter) -> Self {
        Self { inner, count: 0 }
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl Reporter for Tally<'_> {
    fn report(&mut self, line: usize, location: &str, message: &str) {
        self.count += 1;
        self.inner.report(line, location, message);
    }
}
