//! # hdlint_analysis
//!
//! Static analyses for a hardware-description DSL, written to run under an
//! IDE-style host that owns parsing and rendering.
//!
//! This crate provides:
//! - The declaration-style inspection (`Module` supertypes must be declared
//!   as classes, not singleton objects)
//! - The semantic annotator (custom infix operators, cardinal types,
//!   reserved value keywords, bit literals)
//! - The [`AnalysisPass`] driver that runs both over a document-ordered
//!   node slice and collects the results
//!
//! Both analyses are stateless: each invocation reads one node view and
//! pushes into a sink, holding nothing across calls.
//!
//! ## Example
//!
//! ```rust
//! use hdlint_analysis::AnalysisPass;
//! use hdlint_syntax::{DeclarationNode, KeywordToken, Span, SyntaxNode};
//!
//! let decl = DeclarationNode::new(Span::new(0, 35))
//!     .with_keyword(KeywordToken::new("object", Span::new(0, 6)))
//!     .with_supertype("Module()");
//!
//! let pass = AnalysisPass::with_builtin_rules();
//! let result = pass.run(&[SyntaxNode::Declaration(decl)]);
//! assert_eq!(result.diagnostics.len(), 1);
//! ```

mod annotation;
mod descriptor;
mod diagnostic;
mod engine;
mod error;
pub mod highlight;
pub mod inspections;

pub use annotation::{Annotation, AnnotationSink, StyleTag, split_highlight};
pub use descriptor::RuleDescriptor;
pub use diagnostic::{Diagnostic, ReportSink, Severity};
pub use engine::{AnalysisPass, PassResult};
pub use error::AnalysisError;
