//! Byte spans over identifier text.
//!
//! The segmenter and the compliance checker communicate in terms of
//! half-open byte ranges into the identifier being analyzed. Spans are
//! transient analysis artifacts and are never persisted.

/// Half-open byte range `[start, end)` into an identifier.
///
/// Span boundaries always fall on `char` boundaries of the text the span
/// was produced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextSpan {
    start: usize,
    end: usize,
}

impl TextSpan {
    /// Create a span from byte bounds. `start` must not exceed `end`.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "span start {start} exceeds end {end}");
        Self { start, end }
    }

    /// Create an empty span positioned at `offset`.
    pub fn empty_at(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Start offset (inclusive).
    pub fn start(&self) -> usize {
        self.start
    }

    /// End offset (exclusive).
    pub fn end(&self) -> usize {
        self.end
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the span covers no text.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The text this span covers.
    ///
    /// Panics if the span does not lie on char boundaries of `text`; spans
    /// are only meaningful against the string they were produced from.
    pub fn slice_of<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}
