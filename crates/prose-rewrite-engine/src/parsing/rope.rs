//! Rope helpers shared by the block parser and the editing layer.

use xi_rope::Rope;

/// A byte range `[start, end)` into the rope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// True if `offset` lies in `[start, end]`; a caret sitting just after
    /// the last byte still belongs to the span.
    #[must_use]
    pub fn touches(self, offset: usize) -> bool {
        self.start <= offset && offset <= self.end
    }
}

/// A single physical line of the rope.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of the line, including its newline if present.
    pub span: Span,
    pub text: String,
}

/// Iterates the rope line by line, keeping newline characters so that the
/// spans tile the whole buffer.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        offset += line.len();
        LineRef {
            span: Span { start, end: offset },
            text: line.into_owned(),
        }
    })
}

/// Truncates `text` to at most `max_chars` characters, never splitting a
/// character.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_tile_the_buffer() {
        let rope = Rope::from("one\ntwo\n\nthree");
        let spans: Vec<Span> = lines_with_spans(&rope).map(|l| l.span).collect();

        assert_eq!(
            spans,
            vec![
                Span { start: 0, end: 4 },
                Span { start: 4, end: 8 },
                Span { start: 8, end: 9 },
                Span { start: 9, end: 14 },
            ]
        );
    }

    #[test]
    fn span_touches_is_inclusive_at_both_ends() {
        let sp = Span { start: 2, end: 5 };
        assert!(sp.touches(2));
        assert!(sp.touches(5));
        assert!(!sp.touches(6));
        assert!(!sp.touches(1));
    }

    #[test]
    fn truncate_short_text_unchanged() {
        assert_eq!(truncate_chars("hello", 10), "hello");
        assert_eq!(truncate_chars("hello", 5), "hello");
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        assert_eq!(truncate_chars("héllo wörld", 4), "héll");
        assert_eq!(truncate_chars("🦀🦀🦀", 2), "🦀🦀");
    }

    #[test]
    fn truncate_to_zero() {
        assert_eq!(truncate_chars("hello", 0), "");
    }
}
