//! Syntax node views.
//!
//! Each view captures the slice of a host tree node that the analyses
//! actually read. The host adapter fills them in during its traversal; test
//! code builds them directly.

use crate::Span;

/// A single keyword token, such as the `class` or `object` that introduces a
/// declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordToken {
    /// Literal token text.
    pub text: String,
    /// Byte span of the token.
    pub span: Span,
}

impl KeywordToken {
    /// Creates a new keyword token.
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }
}

/// A class-or-object declaration.
///
/// The keyword is optional: incomplete syntax mid-edit can leave it absent,
/// and the host still offers the node for inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationNode {
    /// The `class`/`object` keyword, when present.
    pub keyword: Option<KeywordToken>,
    /// Supertype reference texts, in source order.
    pub supertypes: Vec<String>,
    /// Short names of attached annotation markers.
    pub markers: Vec<String>,
    /// Span of the whole declaration.
    pub span: Span,
}

impl DeclarationNode {
    /// Creates a declaration with no keyword, supertypes, or markers.
    pub fn new(span: Span) -> Self {
        Self {
            keyword: None,
            supertypes: Vec::new(),
            markers: Vec::new(),
            span,
        }
    }

    /// Sets the declaration keyword.
    pub fn with_keyword(mut self, keyword: KeywordToken) -> Self {
        self.keyword = Some(keyword);
        self
    }

    /// Appends a supertype reference text.
    pub fn with_supertype(mut self, text: impl Into<String>) -> Self {
        self.supertypes.push(text.into());
        self
    }

    /// Appends an annotation marker short name.
    pub fn with_marker(mut self, name: impl Into<String>) -> Self {
        self.markers.push(name.into());
        self
    }

    /// Returns the keyword text, if the keyword is present.
    #[inline]
    pub fn keyword_text(&self) -> Option<&str> {
        self.keyword.as_ref().map(|k| k.text.as_str())
    }

    /// Returns true if a marker with the given short name is attached.
    #[inline]
    pub fn has_marker(&self, name: &str) -> bool {
        self.markers.iter().any(|m| m == name)
    }
}

/// The operator token of an infix expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorRefNode {
    /// Literal operator text (`+`, or the name of a custom infix function).
    pub text: String,
    /// True when the host lexer produced this operator from a single
    /// fixed-lexeme punctuation token rather than an identifier.
    pub fixed_lexeme: bool,
    /// Byte span of the operator token.
    pub span: Span,
}

impl OperatorRefNode {
    /// Creates an operator reference.
    pub fn new(text: impl Into<String>, fixed_lexeme: bool, span: Span) -> Self {
        Self {
            text: text.into(),
            fixed_lexeme,
            span,
        }
    }
}

/// A type reference element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRefNode {
    /// Literal type text, including any backtick quoting.
    pub text: String,
    /// Byte span of the reference.
    pub span: Span,
}

impl TypeRefNode {
    /// Creates a type reference.
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }
}

/// A simple name-reference expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRefNode {
    /// The referenced name.
    pub name: String,
    /// Byte span of the reference.
    pub span: Span,
}

impl NameRefNode {
    /// Creates a name reference.
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Self {
            name: name.into(),
            span,
        }
    }
}

/// The call expression enclosing a string template, when the host adapter
/// finds one in the expected ancestor position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnclosingCall {
    /// Callee reference text of the call.
    pub callee: String,
}

impl EnclosingCall {
    /// Creates an enclosing-call context.
    pub fn new(callee: impl Into<String>) -> Self {
        Self {
            callee: callee.into(),
        }
    }
}

/// A string-template expression (quoted literal, possibly interpolated).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringTemplateNode {
    /// The call whose argument list holds this literal, taken from the
    /// ancestor three levels above the template. `None` when that ancestor
    /// is absent or not a call.
    pub enclosing_call: Option<EnclosingCall>,
    /// Byte span of the template, delimiters included.
    pub span: Span,
}

impl StringTemplateNode {
    /// Creates a bare string template with no enclosing call.
    pub fn new(span: Span) -> Self {
        Self {
            enclosing_call: None,
            span,
        }
    }

    /// Sets the enclosing-call context.
    pub fn with_enclosing_call(mut self, call: EnclosingCall) -> Self {
        self.enclosing_call = Some(call);
        self
    }
}

/// Discriminant for [`SyntaxNode`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Class-or-object declaration.
    Declaration,
    /// Infix operator reference.
    OperatorRef,
    /// Type reference.
    TypeRef,
    /// Simple name reference.
    NameRef,
    /// String template.
    StringTemplate,
}

/// The closed set of node shapes the analyses recognize.
///
/// The host tree is far richer than this; the adapter maps the handful of
/// shapes the rules care about and skips everything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNode {
    /// Class-or-object declaration.
    Declaration(DeclarationNode),
    /// Infix operator reference.
    OperatorRef(OperatorRefNode),
    /// Type reference.
    TypeRef(TypeRefNode),
    /// Simple name reference.
    NameRef(NameRefNode),
    /// String template.
    StringTemplate(StringTemplateNode),
}

impl SyntaxNode {
    /// Returns the kind discriminant for this node.
    #[inline]
    pub const fn kind(&self) -> NodeKind {
        match self {
            SyntaxNode::Declaration(_) => NodeKind::Declaration,
            SyntaxNode::OperatorRef(_) => NodeKind::OperatorRef,
            SyntaxNode::TypeRef(_) => NodeKind::TypeRef,
            SyntaxNode::NameRef(_) => NodeKind::NameRef,
            SyntaxNode::StringTemplate(_) => NodeKind::StringTemplate,
        }
    }

    /// Returns the byte span of the node.
    #[inline]
    pub const fn span(&self) -> Span {
        match self {
            SyntaxNode::Declaration(node) => node.span,
            SyntaxNode::OperatorRef(node) => node.span,
            SyntaxNode::TypeRef(node) => node.span,
            SyntaxNode::NameRef(node) => node.span,
            SyntaxNode::StringTemplate(node) => node.span,
        }
    }
}
