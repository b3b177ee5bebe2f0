//! Common types used by libdecint.

/// Describes the byte span of a substring in a text.
///
/// For example, in "12a45", "a" has the span (2, 3).
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub struct Span {
    /// Inclusive lower bound index of the span
    pub lo: usize,
    /// Exclusive upper bound index of the span
    pub hi: usize,
}

impl Span {
    /// Moves the span right by `offset` bytes, e.g. to place a span over one literal into a line
    /// holding several literals.
    pub fn shift(self, offset: usize) -> Self {
        Self {
            lo: self.lo + offset,
            hi: self.hi + offset,
        }
    }
}

impl From<(usize, usize)> for Span {
    fn from(span: (usize, usize)) -> Self {
        Self {
            lo: span.0,
            hi: span.1,
        }
    }
}

impl From<std::ops::Range<usize>> for Span {
    fn from(span: std::ops::Range<usize>) -> Self {
        Self {
            lo: span.start,
            hi: span.end,
        }
    }
}

impl From<Span> for (usize, usize) {
    fn from(span: Span) -> Self {
        (span.lo, span.hi)
    }
}
