//! Analysis error types.

use thiserror::Error;

/// Errors that can occur while assembling an analysis pass.
///
/// The checks themselves are total and never fail; registration is the only
/// fallible step.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// An inspection with the same rule id is already registered.
    #[error("Rule '{0}' is already registered")]
    DuplicateRule(String),
}
