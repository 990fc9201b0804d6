use crate::parsing::rope::Span;

use super::kinds::{FenceKind, ListMarker};

/// A container wrapping leaf blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerFrame {
    BlockQuote {
        /// How many `>` prefixes (1 = single quote, 2 = nested, etc.)
        depth: u8,
    },
}

/// The kind of a leaf block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    Paragraph,
    Heading { level: u8 },
    ListItem { marker: ListMarker, depth: usize },
    FencedCode { kind: FenceKind },
}

/// A parsed leaf block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNode {
    pub containers: Vec<ContainerFrame>,
    pub kind: BlockKind,
    /// Full byte span including prefixes, fences and the trailing newline.
    pub span: Span,
    /// The block's own text: no heading/list/quote prefix on the first line,
    /// no fence lines, no trailing newline.
    pub content_span: Span,
}
