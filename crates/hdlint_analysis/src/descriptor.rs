//! Rule metadata the host queries once at registration.

use serde::Serialize;

use crate::Severity;

/// Static metadata for an inspection rule.
///
/// The host reads these fields for its rule-settings UI; none of them affect
/// the check itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleDescriptor {
    /// Stable rule identifier (e.g., "module-as-class").
    pub id: &'static str,

    /// Human-readable display name.
    pub display_name: &'static str,

    /// One-line rule description.
    pub description: &'static str,

    /// Default severity when the host has no override.
    pub default_severity: Severity,
}
