//! Lexical diagnostics and the sinks that receive them.
//!
//! The scanner never fails. When it meets input it cannot turn into a token
//! it hands a [`Diagnostic`] to a [`DiagnosticSink`] and keeps going, so
//! callers decide how errors are aggregated, printed and reset.

use std::fmt;

use thiserror::Error;

/// The two kinds of lexical error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that does not begin any token
    #[error("Unexpected character '{0}'.")]
    UnexpectedCharacter(char),

    /// End of input reached inside a string literal
    #[error("Unterminated string.")]
    UnterminatedString,
}

/// A lexical error together with the line it was detected on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number
    pub line: usize,
    /// What went wrong
    pub error: LexError,
}

impl Diagnostic {
    /// Creates a new diagnostic.
    pub fn new(line: usize, error: LexError) -> Self {
        Self { line, error }
    }

    /// Returns the human-readable message without the line prefix.
    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] Error: {}", self.line, self.error)
    }
}

/// Receives diagnostics as the scanner detects them.
pub trait DiagnosticSink {
    /// Records one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

impl<F> DiagnosticSink for F
where
    F: FnMut(Diagnostic),
{
    fn report(&mut self, diagnostic: Diagnostic) {
        self(diagnostic)
    }
}

/// Collects diagnostics in the order they were reported.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if at least one error was reported.
    pub fn had_error(&self) -> bool {
        !self.entries.is_empty()
    }

    /// Number of collected diagnostics.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was reported.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the collected diagnostics.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    /// Forgets everything collected so far.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Consumes the collector, returning the diagnostics.
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

impl DiagnosticSink for Diagnostics {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display() {
        let diagnostic = Diagnostic::new(3, LexError::UnexpectedCharacter('^'));
        assert_eq!(
            diagnostic.to_string(),
            "[line 3] Error: Unexpected character '^'."
        );
        assert_eq!(diagnostic.message(), "Unexpected character '^'.");
    }

    #[test]
    fn test_unterminated_string_message() {
        let diagnostic = Diagnostic::new(1, LexError::UnterminatedString);
        assert_eq!(diagnostic.to_string(), "[line 1] Error: Unterminated string.");
    }

    #[test]
    fn test_collector_tracks_errors() {
        let mut diagnostics = Diagnostics::new();
        assert!(!diagnostics.had_error());
        assert!(diagnostics.is_empty());

        diagnostics.report(Diagnostic::new(1, LexError::UnterminatedString));
        diagnostics.report(Diagnostic::new(2, LexError::UnexpectedCharacter('#')));

        assert!(diagnostics.had_error());
        assert_eq!(diagnostics.len(), 2);
        let lines: Vec<usize> = diagnostics.iter().map(|d| d.line).collect();
        assert_eq!(lines, vec![1, 2]);
    }

    #[test]
    fn test_collector_clear() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.report(Diagnostic::new(1, LexError::UnterminatedString));
        diagnostics.clear();
        assert!(!diagnostics.had_error());
        assert!(diagnostics.into_vec().is_empty());
    }

    #[test]
    fn test_closure_sink() {
        let mut seen = Vec::new();
        {
            let mut sink = |d: Diagnostic| seen.push(d.line);
            sink.report(Diagnostic::new(4, LexError::UnterminatedString));
        }
        assert_eq!(seen, vec![4]);
    }
}
