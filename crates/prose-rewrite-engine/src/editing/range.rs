use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::parsing::rope::Span;

/// A `[from, to)` span of document offsets. `from == to` is a caret.
///
/// Validity against a particular document (`to <= len`, character
/// boundaries) is checked by the document, not by this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TextRange {
    pub from: usize,
    pub to: usize,
}

impl TextRange {
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    pub const fn caret(at: usize) -> Self {
        Self { from: at, to: at }
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.to.saturating_sub(self.from)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.from >= self.to
    }

    /// `from <= to <= len`.
    #[must_use]
    pub fn is_within(self, len: usize) -> bool {
        self.from <= self.to && self.to <= len
    }

    pub fn as_range(self) -> Range<usize> {
        self.from..self.to
    }
}

impl From<Range<usize>> for TextRange {
    fn from(r: Range<usize>) -> Self {
        Self::new(r.start, r.end)
    }
}

impl From<TextRange> for Range<usize> {
    fn from(r: TextRange) -> Self {
        r.as_range()
    }
}

impl From<Span> for TextRange {
    fn from(sp: Span) -> Self {
        Self::new(sp.start, sp.end)
    }
}

impl fmt::Display for TextRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caret_is_empty() {
        assert!(TextRange::caret(4).is_empty());
        assert_eq!(TextRange::caret(4).len(), 0);
    }

    #[test]
    fn inverted_range_is_empty_and_never_within() {
        let r = TextRange::new(5, 3);
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert!(!r.is_within(10));
    }

    #[test]
    fn within_checks_upper_bound() {
        assert!(TextRange::new(0, 10).is_within(10));
        assert!(!TextRange::new(0, 11).is_within(10));
    }

    #[test]
    fn converts_to_and_from_std_range() {
        let r: TextRange = (2..7).into();
        assert_eq!(r, TextRange::new(2, 7));
        assert_eq!(Range::from(r), 2..7);
        assert_eq!(r.to_string(), "2..7");
    }
}
