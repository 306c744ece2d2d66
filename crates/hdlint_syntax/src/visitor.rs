//! Visitor dispatch over [`SyntaxNode`] shapes.
//!
//! The host traversal hands the analyses one node at a time, in document
//! order. [`walk_node`] dispatches a node to the matching `visit_*` method;
//! [`walk_nodes`] runs a whole document-ordered slice. Every method defaults
//! to a no-op, so a visitor overrides only the kinds it cares about.
//!
//! # Example
//!
//! ```rust
//! use std::ops::ControlFlow;
//! use hdlint_syntax::{NameRefNode, Span, SyntaxNode};
//! use hdlint_syntax::visitor::{VisitResult, Visitor, walk_nodes};
//!
//! struct NameCollector {
//!     names: Vec<String>,
//! }
//!
//! impl Visitor for NameCollector {
//!     fn visit_name_ref(&mut self, node: &NameRefNode) -> VisitResult {
//!         self.names.push(node.name.clone());
//!         ControlFlow::Continue(())
//!     }
//! }
//!
//! let nodes = [SyntaxNode::NameRef(NameRefNode::new("unknown", Span::new(0, 7)))];
//! let mut collector = NameCollector { names: Vec::new() };
//! walk_nodes(&mut collector, &nodes);
//! assert_eq!(collector.names, vec!["unknown"]);
//! ```

use std::ops::ControlFlow;

use crate::node::{
    DeclarationNode, NameRefNode, OperatorRefNode, StringTemplateNode, SyntaxNode, TypeRefNode,
};

/// Result type for visitor methods to control traversal.
///
/// - `ControlFlow::Continue(())` - keep visiting
/// - `ControlFlow::Break(())` - stop the pass early
pub type VisitResult = ControlFlow<()>;

/// Read-only visitor over the recognized node shapes.
pub trait Visitor: Sized {
    /// Called before dispatching any node.
    #[inline]
    fn enter_node(&mut self, _node: &SyntaxNode) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Visit a class-or-object declaration.
    fn visit_declaration(&mut self, _node: &DeclarationNode) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Visit an infix operator reference.
    fn visit_operator_ref(&mut self, _node: &OperatorRefNode) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Visit a type reference.
    fn visit_type_ref(&mut self, _node: &TypeRefNode) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Visit a simple name reference.
    fn visit_name_ref(&mut self, _node: &NameRefNode) -> VisitResult {
        ControlFlow::Continue(())
    }

    /// Visit a string template.
    fn visit_string_template(&mut self, _node: &StringTemplateNode) -> VisitResult {
        ControlFlow::Continue(())
    }
}

/// Dispatches a node to the matching type-specific visitor method.
pub fn walk_node<V>(visitor: &mut V, node: &SyntaxNode) -> VisitResult
where
    V: Visitor,
{
    visitor.enter_node(node)?;

    match node {
        SyntaxNode::Declaration(decl) => visitor.visit_declaration(decl),
        SyntaxNode::OperatorRef(op) => visitor.visit_operator_ref(op),
        SyntaxNode::TypeRef(ty) => visitor.visit_type_ref(ty),
        SyntaxNode::NameRef(name) => visitor.visit_name_ref(name),
        SyntaxNode::StringTemplate(template) => visitor.visit_string_template(template),
    }
}

/// Walks a document-ordered slice of nodes, stopping on `Break`.
#[inline]
pub fn walk_nodes<V>(visitor: &mut V, nodes: &[SyntaxNode]) -> VisitResult
where
    V: Visitor,
{
    for node in nodes {
        walk_node(visitor, node)?;
    }
    ControlFlow::Continue(())
}
