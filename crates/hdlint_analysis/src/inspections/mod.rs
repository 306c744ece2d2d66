//! Declaration inspections.
//!
//! An inspection is a stateless check over one declaration node. The host
//! (or [`crate::AnalysisPass`]) invokes `check` once per declaration it
//! encounters; the inspection either registers exactly one problem or stays
//! silent.

mod declaration_style;

pub use declaration_style::DeclarationStyle;

use hdlint_syntax::DeclarationNode;

use crate::{ReportSink, RuleDescriptor};

/// A stateless inspection over class-or-object declarations.
pub trait Inspection: Send + Sync {
    /// Static metadata the host queries at registration.
    fn descriptor(&self) -> &'static RuleDescriptor;

    /// Checks one declaration, registering at most one problem.
    fn check(&self, declaration: &DeclarationNode, sink: &mut dyn ReportSink);
}

/// Returns the inspections shipped with this crate.
pub fn builtin_inspections() -> Vec<Box<dyn Inspection>> {
    vec![Box::new(DeclarationStyle)]
}
