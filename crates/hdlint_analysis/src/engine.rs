//! Analysis pass driver.
//!
//! The IDE host runs its own traversal and calls the inspections and the
//! annotator directly. [`AnalysisPass`] reproduces that traversal over a
//! document-ordered node slice, which is how headless hosts and tests run
//! the analyses end to end.

use std::ops::ControlFlow;

use tracing::{debug, trace};

use hdlint_syntax::{DeclarationNode, SyntaxNode, VisitResult, Visitor, walk_nodes};

use crate::inspections::{Inspection, builtin_inspections};
use crate::{Annotation, AnalysisError, Diagnostic, RuleDescriptor, highlight};

/// Everything one pass produced.
#[derive(Debug, Default)]
pub struct PassResult {
    /// Inspection problems, in document order.
    pub diagnostics: Vec<Diagnostic>,
    /// Highlighting annotations, in document order.
    pub annotations: Vec<Annotation>,
}

/// A configured set of analyses, reusable across files.
///
/// Holds no per-file state: each [`run`](AnalysisPass::run) starts from
/// empty sinks, so one pass can serve any number of invocations.
pub struct AnalysisPass {
    inspections: Vec<Box<dyn Inspection>>,
}

impl AnalysisPass {
    /// Creates a pass with no inspections registered.
    pub fn new() -> Self {
        Self {
            inspections: Vec::new(),
        }
    }

    /// Creates a pass preloaded with the built-in inspections.
    ///
    /// Built-in rule ids are unique, so this cannot collide.
    pub fn with_builtin_rules() -> Self {
        Self {
            inspections: builtin_inspections(),
        }
    }

    /// Registers an inspection.
    ///
    /// Fails if an inspection with the same rule id is already registered.
    pub fn register(&mut self, inspection: Box<dyn Inspection>) -> Result<(), AnalysisError> {
        let id = inspection.descriptor().id;
        if self.inspections.iter().any(|i| i.descriptor().id == id) {
            return Err(AnalysisError::DuplicateRule(id.to_string()));
        }
        self.inspections.push(inspection);
        Ok(())
    }

    /// Returns the metadata of every registered inspection.
    pub fn descriptors(&self) -> impl Iterator<Item = &'static RuleDescriptor> + '_ {
        self.inspections.iter().map(|i| i.descriptor())
    }

    /// Runs all analyses over a document-ordered node slice.
    pub fn run(&self, nodes: &[SyntaxNode]) -> PassResult {
        debug!(nodes = nodes.len(), rules = self.inspections.len(), "running analysis pass");

        let mut visitor = PassVisitor {
            pass: self,
            result: PassResult::default(),
        };
        let _ = walk_nodes(&mut visitor, nodes);

        trace!(
            diagnostics = visitor.result.diagnostics.len(),
            annotations = visitor.result.annotations.len(),
            "analysis pass finished"
        );
        visitor.result
    }
}

impl Default for AnalysisPass {
    fn default() -> Self {
        Self::new()
    }
}

struct PassVisitor<'p> {
    pass: &'p AnalysisPass,
    result: PassResult,
}

impl Visitor for PassVisitor<'_> {
    fn enter_node(&mut self, node: &SyntaxNode) -> VisitResult {
        highlight::annotate(node, &mut self.result.annotations);
        ControlFlow::Continue(())
    }

    fn visit_declaration(&mut self, node: &DeclarationNode) -> VisitResult {
        for inspection in &self.pass.inspections {
            inspection.check(node, &mut self.result.diagnostics);
        }
        ControlFlow::Continue(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use hdlint_syntax::{
        DeclarationNode, KeywordToken, NameRefNode, Span, SyntaxNode, TypeRefNode,
    };

    use crate::inspections::DeclarationStyle;
    use crate::{Severity, StyleTag};

    use super::*;

    fn object_module(span_offset: u32) -> SyntaxNode {
        SyntaxNode::Declaration(
            DeclarationNode::new(Span::new(span_offset, span_offset + 30))
                .with_keyword(KeywordToken::new("object", Span::new(span_offset, span_offset + 6)))
                .with_supertype("Module()"),
        )
    }

    #[test]
    fn pass_collects_diagnostics_and_annotations() {
        let nodes = vec![
            object_module(0),
            SyntaxNode::NameRef(NameRefNode::new("unknown", Span::new(40, 47))),
            SyntaxNode::TypeRef(TypeRefNode::new("`8`", Span::new(50, 53))),
        ];

        let result = AnalysisPass::with_builtin_rules().run(&nodes);

        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].severity, Severity::Error);
        // Two split annotations each for the keyword and the cardinal type.
        assert_eq!(result.annotations.len(), 4);
        assert_eq!(result.annotations[0].style, StyleTag::Keyword);
        assert_eq!(result.annotations[2].style, StyleTag::Number);
    }

    #[test]
    fn empty_pass_reports_nothing() {
        let result = AnalysisPass::new().run(&[object_module(0)]);
        assert!(result.diagnostics.is_empty());
        assert!(result.annotations.is_empty());
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let mut pass = AnalysisPass::with_builtin_rules();
        let err = pass.register(Box::new(DeclarationStyle)).unwrap_err();

        assert!(matches!(err, AnalysisError::DuplicateRule(ref id) if id == "module-as-class"));
    }

    #[test]
    fn descriptors_expose_registered_metadata() {
        let pass = AnalysisPass::with_builtin_rules();
        let ids: Vec<&str> = pass.descriptors().map(|d| d.id).collect();
        assert_eq!(ids, vec!["module-as-class"]);
    }

    #[test]
    fn pass_is_reusable_across_runs() {
        let pass = AnalysisPass::with_builtin_rules();
        let nodes = vec![object_module(0)];

        let first = pass.run(&nodes);
        let second = pass.run(&nodes);

        assert_eq!(first.diagnostics, second.diagnostics);
        assert_eq!(first.diagnostics.len(), 1);
    }

    #[test]
    fn diagnostics_follow_document_order() {
        let nodes = vec![object_module(0), object_module(100)];
        let result = AnalysisPass::with_builtin_rules().run(&nodes);

        assert_eq!(result.diagnostics.len(), 2);
        assert!(result.diagnostics[0].span.start < result.diagnostics[1].span.start);
    }
}
