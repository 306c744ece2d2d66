//! # hdlint_syntax
//!
//! Host-independent syntax views for HDLint.
//!
//! The IDE host owns the real parse tree. This crate defines the narrow,
//! read-only views the analyses need: byte spans, a handful of node shapes,
//! and a visitor seam for dispatching over them. A host adapter builds these
//! views per analysis pass; tests build them by hand.
//!
//! ## Architecture
//!
//! - Node shapes are a closed tagged union ([`SyntaxNode`]), so dispatch is
//!   an exhaustive `match` rather than an open class hierarchy
//! - Views carry only the capabilities the rules read (keyword token,
//!   supertype texts, marker names, enclosing-call context)
//! - No references back into the host tree are retained after a pass
//!
//! ## Example
//!
//! ```rust
//! use hdlint_syntax::{NameRefNode, Span, SyntaxNode};
//!
//! let node = SyntaxNode::NameRef(NameRefNode::new("unknown", Span::new(4, 11)));
//! assert_eq!(node.span(), Span::new(4, 11));
//! ```

mod node;
mod span;
pub mod visitor;

pub use node::{
    DeclarationNode, EnclosingCall, KeywordToken, NameRefNode, NodeKind, OperatorRefNode,
    StringTemplateNode, SyntaxNode, TypeRefNode,
};
pub use span::{Location, Position, Span};

// Re-export commonly used visitor items for convenience
pub use visitor::{VisitResult, Visitor, walk_node, walk_nodes};
