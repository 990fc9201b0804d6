use crate::parsing::rope::{LineRef, Span};

use super::kinds::{BlockQuote, CodeFence, FenceKind};

/// Local facts about a single line, computed without reference to the
/// surrounding lines.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Full byte span of this line in the rope, newline included.
    pub line: Span,
    /// Whether the line is blank after stripping quote prefixes.
    pub is_blank: bool,
    /// Number of blockquote `>` prefixes found.
    pub quote_depth: u8,
    /// Line content after quote prefixes, newline excluded.
    pub remainder_span: Span,
    pub remainder_text: String,
    /// Set if the remainder looks like a fence opener/closer.
    pub fence_sig: Option<FenceKind>,
}

pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        let trimmed = lr.text.trim_end_matches(['\r', '\n']);

        let (quote_depth, idx) = BlockQuote::strip_prefixes(trimmed);
        let remainder = &trimmed[idx..];
        let remainder_span = Span {
            start: lr.span.start + idx,
            end: lr.span.start + trimmed.len(),
        };

        LineClass {
            line: lr.span,
            is_blank: remainder.trim().is_empty(),
            quote_depth,
            remainder_span,
            remainder_text: remainder.to_string(),
            fence_sig: CodeFence::sig(remainder),
        }
    }
}
