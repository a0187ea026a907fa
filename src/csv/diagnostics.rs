//! Structured parse diagnostics.
//!
//! Instead of logging from inside the parser, the engine returns a list of
//! diagnostic events alongside its result and lets the caller decide how to
//! surface them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a diagnostic event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// An optional value was dropped; the row still succeeded.
    Warning,
    /// The row was skipped entirely.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// One diagnostic event tied to a physical line of the input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Physical line number in the source, 1-based from the start of the file.
    pub line: usize,
    /// How severe the event was.
    pub severity: Severity,
    /// Human-readable description.
    pub message: String,
}

impl Diagnostic {
    /// Creates a warning diagnostic.
    #[must_use]
    pub fn warning(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    /// Creates an error diagnostic.
    #[must_use]
    pub fn error(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}: {}", self.line, self.severity, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let d = Diagnostic::warning(12, "ignoring invalid cadence");
        assert_eq!(d.to_string(), "line 12: warning: ignoring invalid cadence");

        let d = Diagnostic::error(3, "row needs a non-empty Name");
        assert_eq!(d.severity, Severity::Error);
        assert!(d.to_string().starts_with("line 3: error:"));
    }
}
