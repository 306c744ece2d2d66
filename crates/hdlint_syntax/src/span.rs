//! Span and position types for source locations.
//!
//! Spans are byte offsets into the file the host is analyzing. The host's
//! editor layer owns line/column mapping; [`Position`] and [`Location`] exist
//! for hosts that report both forms.

use serde::{Deserialize, Serialize};

/// A position in source text.
///
/// Lines are 1-indexed and columns 0-indexed, matching the conventions of
/// the editor hosts this crate targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (0-indexed).
    pub column: u32,
}

impl Position {
    /// Creates a new position.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// A half-open byte range `[start, end)` in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: u32,
    /// End byte offset (exclusive).
    pub end: u32,
}

impl Span {
    /// Creates a new span.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Creates a zero-width span at the given offset.
    #[inline]
    pub const fn zero_width(offset: u32) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Returns the length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Returns true if the span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if this span contains the given offset.
    #[inline]
    pub const fn contains(&self, offset: u32) -> bool {
        self.start <= offset && offset < self.end
    }

    /// Returns the span without its first byte.
    ///
    /// For an empty or single-byte span the result is empty, anchored at the
    /// original end offset.
    #[inline]
    pub const fn tail(&self) -> Span {
        let next = self.start.saturating_add(1);
        let start = if next < self.end { next } else { self.end };
        Span {
            start,
            end: self.end,
        }
    }

    /// Merges two spans into one that covers both.
    #[inline]
    pub const fn merge(&self, other: &Span) -> Span {
        Span {
            start: if self.start < other.start {
                self.start
            } else {
                other.start
            },
            end: if self.end > other.end {
                self.end
            } else {
                other.end
            },
        }
    }
}

/// Start and end positions of a node, for hosts that report line/column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Location {
    /// Start position.
    pub start: Position,
    /// End position.
    pub end: Position,
}

impl Location {
    /// Creates a new location.
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn span_basics() {
        let span = Span::new(10, 20);
        assert_eq!(span.len(), 10);
        assert!(!span.is_empty());
        assert!(span.contains(10));
        assert!(span.contains(15));
        assert!(!span.contains(20));
    }

    #[test]
    fn zero_width_span_contains_nothing() {
        let span = Span::zero_width(5);
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
        assert!(!span.contains(5));
    }

    #[rstest]
    #[case::drops_first_byte(Span::new(10, 15), Span::new(11, 15))]
    #[case::single_byte_becomes_empty(Span::new(10, 11), Span::new(11, 11))]
    #[case::empty_stays_empty(Span::new(5, 5), Span::new(5, 5))]
    #[case::empty_at_offset_limit(Span::new(u32::MAX, u32::MAX), Span::new(u32::MAX, u32::MAX))]
    fn tail_clamps_to_span_end(#[case] span: Span, #[case] expected: Span) {
        assert_eq!(span.tail(), expected);
    }

    #[test]
    fn merge_covers_both_spans() {
        let merged = Span::new(10, 20).merge(&Span::new(15, 30));
        assert_eq!(merged, Span::new(10, 30));

        let merged = Span::new(20, 30).merge(&Span::new(10, 15));
        assert_eq!(merged, Span::new(10, 30));
    }

    #[test]
    fn location_pairs_positions() {
        let loc = Location::new(Position::new(1, 0), Position::new(1, 10));
        assert_eq!(loc.start.line, 1);
        assert_eq!(loc.end.column, 10);
    }

    #[test]
    fn span_serialization_round_trip() {
        let span = Span::new(5, 15);
        let json = serde_json::to_string(&span).unwrap();
        let back: Span = serde_json::from_str(&json).unwrap();
        assert_eq!(back, span);
    }
}
