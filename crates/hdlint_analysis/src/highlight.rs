//! Semantic annotator.
//!
//! Adds highlighting to four constructs the host's default lexer-based
//! coloring misses: custom infix operators, backtick cardinal types,
//! reserved value keywords, and bit-literal strings. Dispatch is a single
//! exhaustive match on node kind; the sub-rules are mutually exclusive.

use hdlint_syntax::{
    NameRefNode, OperatorRefNode, StringTemplateNode, SyntaxNode, TypeRefNode,
};

use crate::{Annotation, AnnotationSink, StyleTag, split_highlight};

/// Operator texts the language defines by convention. Infix operators
/// outside this set are calls to named functions.
const CONVENTION_OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "%", "==", "!=", "<", ">", "<=", ">=", "&&", "||", "!", "=", "+=", "-=",
    "*=", "/=", "%=", "..", "?:",
];

/// Names that read as keywords in hardware descriptions but are plain
/// identifiers to the host lexer.
const RESERVED_VALUE_KEYWORDS: &[&str] = &["unknown", "floating"];

/// Callee names of the signed/unsigned bit-literal constructors.
const BIT_LITERAL_CALLEES: &[&str] = &["u", "s"];

/// Wildcard body of a cardinal type (`` `*` ``).
const WIDTH_WILDCARD: &str = "*";

/// Annotates one node, dispatching on its kind.
pub fn annotate(node: &SyntaxNode, sink: &mut dyn AnnotationSink) {
    match node {
        SyntaxNode::OperatorRef(op) => annotate_operator(op, sink),
        SyntaxNode::TypeRef(ty) => annotate_cardinal_type(ty, sink),
        SyntaxNode::NameRef(name) => annotate_reserved_keyword(name, sink),
        SyntaxNode::StringTemplate(template) => annotate_bit_literal(template, sink),
        SyntaxNode::Declaration(_) => {}
    }
}

/// Highlights a named infix function used as an operator.
///
/// Built-in convention operators and fixed-lexeme tokens keep the host's
/// default operator coloring.
fn annotate_operator(op: &OperatorRefNode, sink: &mut dyn AnnotationSink) {
    if op.fixed_lexeme || CONVENTION_OPERATORS.contains(&op.text.as_str()) {
        return;
    }
    sink.annotate(Annotation::new(op.span, StyleTag::ExtensionFunctionCall));
}

/// Highlights a backtick-quoted bit-width type such as `` `8` `` or `` `*` ``.
fn annotate_cardinal_type(ty: &TypeRefNode, sink: &mut dyn AnnotationSink) {
    let Some(body) = backtick_body(&ty.text) else {
        return;
    };
    if body == WIDTH_WILDCARD || body.parse::<i64>().is_ok() {
        split_highlight(ty.span, StyleTag::Number, sink);
    }
}

/// Highlights the reserved value keywords `unknown` and `floating`.
fn annotate_reserved_keyword(name: &NameRefNode, sink: &mut dyn AnnotationSink) {
    if RESERVED_VALUE_KEYWORDS.contains(&name.name.as_str()) {
        split_highlight(name.span, StyleTag::Keyword, sink);
    }
}

/// Highlights the string argument of a `u"..."` / `s"..."` bit literal.
fn annotate_bit_literal(template: &StringTemplateNode, sink: &mut dyn AnnotationSink) {
    let Some(call) = &template.enclosing_call else {
        return;
    };
    if BIT_LITERAL_CALLEES.contains(&call.callee.as_str()) {
        split_highlight(template.span, StyleTag::Number, sink);
    }
}

/// Returns the text between backtick quotes, or `None` when the text is not
/// backtick-quoted.
fn backtick_body(text: &str) -> Option<&str> {
    text.strip_prefix('`')?.strip_suffix('`')
}
