//! Diagnostic types for inspection results.

use serde::{Deserialize, Serialize};

use hdlint_syntax::{Location, Span};

/// Severity level for diagnostics.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Error - must be fixed.
    #[default]
    Error,
    /// Warning - should be reviewed.
    Warning,
    /// Info - informational message.
    Info,
}

/// A problem reported by an inspection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The rule that generated this diagnostic.
    pub rule_id: String,

    /// The diagnostic message.
    pub message: String,

    /// Anchor span in the source, typically the declaration keyword.
    pub span: Span,

    /// Line/column location, when the host supplies one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,

    /// Severity level.
    #[serde(default)]
    pub severity: Severity,
}

impl Diagnostic {
    /// Creates a new error-severity diagnostic.
    pub fn new(rule_id: impl Into<String>, message: impl Into<String>, span: Span) -> Self {
        Self {
            rule_id: rule_id.into(),
            message: message.into(),
            span,
            loc: None,
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the location.
    pub fn with_location(mut self, loc: Location) -> Self {
        self.loc = Some(loc);
        self
    }
}

/// The host's problem accumulator.
///
/// Inspections push into a sink and never read it back; the host drains it
/// after the traversal returns.
pub trait ReportSink {
    /// Registers a problem.
    fn register_problem(&mut self, diagnostic: Diagnostic);
}

impl ReportSink for Vec<Diagnostic> {
    fn register_problem(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
