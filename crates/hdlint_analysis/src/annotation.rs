//! Highlighting annotations emitted by the semantic annotator.

use serde::{Deserialize, Serialize};

use hdlint_syntax::Span;

use crate::Severity;

/// Text-attribute tag the host maps to an editor color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleTag {
    /// Custom infix function used as an operator.
    ExtensionFunctionCall,
    /// Numeric literal styling (cardinal types, bit literals).
    Number,
    /// Language keyword styling.
    Keyword,
}

/// A single silent highlighting annotation.
///
/// "Silent" means the annotation colors text without surfacing a message in
/// the host's problem view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Byte span to style. May be zero-width (a styling boundary anchor).
    pub span: Span,

    /// The style tag.
    pub style: StyleTag,

    /// Severity of the annotation; informational for pure highlighting.
    #[serde(default)]
    pub severity: Severity,
}

impl Annotation {
    /// Creates a silent informational annotation.
    pub fn new(span: Span, style: StyleTag) -> Self {
        Self {
            span,
            style,
            severity: Severity::Info,
        }
    }
}

/// The host's annotation accumulator.
pub trait AnnotationSink {
    /// Emits one annotation. Purely additive.
    fn annotate(&mut self, annotation: Annotation);
}

impl AnnotationSink for Vec<Annotation> {
    fn annotate(&mut self, annotation: Annotation) {
        self.push(annotation);
    }
}

/// Emits the two-piece split highlighting for a node span.
///
/// The host renders the first character of these constructs (a quote or
/// backtick delimiter) in its own pass, so the styling is split: a
/// zero-width annotation anchors the boundary at `start`, and the remainder
/// `[start+1, end)` carries the body color. Always emits exactly two
/// annotations with the same style tag.
pub fn split_highlight(span: Span, style: StyleTag, sink: &mut dyn AnnotationSink) {
    sink.annotate(Annotation::new(Span::zero_width(span.start), style));
    sink.annotate(Annotation::new(span.tail(), style));
}
