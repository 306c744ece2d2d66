//! End-to-end scenarios: host-shaped node slices through a full pass.

use pretty_assertions::assert_eq;

use hdlint_analysis::{AnalysisPass, Severity, StyleTag};
use hdlint_syntax::{
    DeclarationNode, EnclosingCall, KeywordToken, NameRefNode, OperatorRefNode, Span,
    StringTemplateNode, SyntaxNode, TypeRefNode,
};

/// `object Counter : Module() { }`
fn counter_object() -> SyntaxNode {
    SyntaxNode::Declaration(
        DeclarationNode::new(Span::new(0, 29))
            .with_keyword(KeywordToken::new("object", Span::new(0, 6)))
            .with_supertype("Module()"),
    )
}

#[test]
fn object_module_is_reported_at_the_keyword() {
    let result = AnalysisPass::with_builtin_rules().run(&[counter_object()]);

    assert_eq!(result.diagnostics.len(), 1);
    let diagnostic = &result.diagnostics[0];
    assert_eq!(diagnostic.message, "Module must be declared as class");
    assert_eq!(diagnostic.span, Span::new(0, 6));
    assert_eq!(diagnostic.severity, Severity::Error);
}

#[test]
fn sim_top_object_module_is_accepted() {
    // `@SimTop object Top : Module() { }`
    let node = SyntaxNode::Declaration(
        DeclarationNode::new(Span::new(0, 33))
            .with_marker("SimTop")
            .with_keyword(KeywordToken::new("object", Span::new(8, 14)))
            .with_supertype("Module()"),
    );

    let result = AnalysisPass::with_builtin_rules().run(&[node]);
    assert!(result.diagnostics.is_empty());
}

#[test]
fn class_module_is_accepted() {
    // `class Counter : Module { }`
    let node = SyntaxNode::Declaration(
        DeclarationNode::new(Span::new(0, 26))
            .with_keyword(KeywordToken::new("class", Span::new(0, 5)))
            .with_supertype("Module"),
    );

    let result = AnalysisPass::with_builtin_rules().run(&[node]);
    assert!(result.diagnostics.is_empty());
}

#[test]
fn mixed_file_gets_all_highlighting() {
    // A file body with one of each highlighted construct:
    //   a isBefore b
    //   val w: `8`
    //   out := unknown
    //   val bits = u"101"
    let nodes = vec![
        SyntaxNode::OperatorRef(OperatorRefNode::new("isBefore", false, Span::new(2, 10))),
        SyntaxNode::TypeRef(TypeRefNode::new("`8`", Span::new(22, 25))),
        SyntaxNode::NameRef(NameRefNode::new("unknown", Span::new(33, 40))),
        SyntaxNode::StringTemplate(
            StringTemplateNode::new(Span::new(53, 58)).with_enclosing_call(EnclosingCall::new("u")),
        ),
    ];

    let result = AnalysisPass::with_builtin_rules().run(&nodes);

    assert!(result.diagnostics.is_empty());
    let styles: Vec<StyleTag> = result.annotations.iter().map(|a| a.style).collect();
    assert_eq!(
        styles,
        vec![
            StyleTag::ExtensionFunctionCall,
            StyleTag::Number,
            StyleTag::Number,
            StyleTag::Keyword,
            StyleTag::Keyword,
            StyleTag::Number,
            StyleTag::Number,
        ]
    );

    // Split pairs: zero-width anchor first, body second.
    assert_eq!(result.annotations[1].span, Span::new(22, 22));
    assert_eq!(result.annotations[2].span, Span::new(23, 25));
    assert_eq!(result.annotations[5].span, Span::new(53, 53));
    assert_eq!(result.annotations[6].span, Span::new(54, 58));
}

#[test]
fn unremarkable_file_is_silent() {
    let nodes = vec![
        SyntaxNode::Declaration(
            DeclarationNode::new(Span::new(0, 20))
                .with_keyword(KeywordToken::new("class", Span::new(0, 5)))
                .with_supertype("Component"),
        ),
        SyntaxNode::OperatorRef(OperatorRefNode::new("+", true, Span::new(25, 26))),
        SyntaxNode::TypeRef(TypeRefNode::new("Int", Span::new(30, 33))),
        SyntaxNode::NameRef(NameRefNode::new("clock", Span::new(40, 45))),
        SyntaxNode::StringTemplate(StringTemplateNode::new(Span::new(50, 55))),
    ];

    let result = AnalysisPass::with_builtin_rules().run(&nodes);
    assert!(result.diagnostics.is_empty());
    assert!(result.annotations.is_empty());
}
