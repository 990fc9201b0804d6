use crate::parsing::rope::Span;

use super::{
    classify::LineClass,
    containers::ContainerPath,
    kinds::{CodeFence, FenceKind},
    open::{BlockOpen, try_open_leaf},
    types::{BlockKind, BlockNode},
};

/// The leaf currently being accumulated.
#[derive(Debug, Clone)]
enum LeafState {
    None,
    Text {
        kind: BlockKind,
        quote_depth: u8,
        start: usize,
        content: Span,
        line_end: usize,
    },
    Fence {
        kind: FenceKind,
        quote_depth: u8,
        start: usize,
        body: Option<Span>,
        line_end: usize,
    },
}

pub struct BlockBuilder {
    leaf: LeafState,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: &LineClass) {
        if self.in_fence() {
            self.consume_fence_line(c);
            return;
        }

        if c.is_blank {
            self.flush_leaf();
            return;
        }

        if self.open_quote_depth().is_some_and(|d| d != c.quote_depth) {
            self.flush_leaf();
        }

        if let Some(open) = try_open_leaf(&c.remainder_text) {
            self.flush_leaf();
            self.open_leaf(open, c);
            return;
        }

        self.extend_text(c);
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        self.flush_leaf();
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn open_quote_depth(&self) -> Option<u8> {
        match self.leaf {
            LeafState::None => None,
            LeafState::Text { quote_depth, .. } | LeafState::Fence { quote_depth, .. } => {
                Some(quote_depth)
            }
        }
    }

    fn open_leaf(&mut self, open: BlockOpen, c: &LineClass) {
        let rs = c.remainder_span;
        match open {
            BlockOpen::FencedCode { kind } => {
                self.leaf = LeafState::Fence {
                    kind,
                    quote_depth: c.quote_depth,
                    start: c.line.start,
                    body: None,
                    line_end: c.line.end,
                };
            }
            BlockOpen::Heading {
                level,
                content_offset,
            } => {
                // Headings are single-line; emit straight away.
                self.out.push(BlockNode {
                    containers: ContainerPath::for_quote_depth(c.quote_depth).0,
                    kind: BlockKind::Heading { level },
                    span: c.line,
                    content_span: Span {
                        start: (rs.start + content_offset).min(rs.end),
                        end: rs.end,
                    },
                });
            }
            BlockOpen::ListItem(item) => {
                self.leaf = LeafState::Text {
                    kind: BlockKind::ListItem {
                        depth: item.depth(),
                        marker: item.marker,
                    },
                    quote_depth: c.quote_depth,
                    start: c.line.start,
                    content: Span {
                        start: (rs.start + item.content_offset).min(rs.end),
                        end: rs.end,
                    },
                    line_end: c.line.end,
                };
            }
        }
    }

    fn consume_fence_line(&mut self, c: &LineClass) {
        let LeafState::Fence {
            kind,
            quote_depth,
            start,
            body,
            ..
        } = self.leaf
        else {
            return;
        };

        if CodeFence::closes(kind, c.fence_sig) {
            let content_span = body.unwrap_or(Span {
                start: c.line.start,
                end: c.line.start,
            });
            self.out.push(BlockNode {
                containers: ContainerPath::for_quote_depth(quote_depth).0,
                kind: BlockKind::FencedCode { kind },
                span: Span {
                    start,
                    end: c.line.end,
                },
                content_span,
            });
            self.leaf = LeafState::None;
            return;
        }

        let body = match body {
            Some(b) => Span {
                start: b.start,
                end: c.remainder_span.end,
            },
            None => c.remainder_span,
        };
        self.leaf = LeafState::Fence {
            kind,
            quote_depth,
            start,
            body: Some(body),
            line_end: c.line.end,
        };
    }

    /// Continues the open paragraph or list item, or starts a new paragraph.
    fn extend_text(&mut self, c: &LineClass) {
        if let LeafState::Text {
            content, line_end, ..
        } = &mut self.leaf
        {
            content.end = c.remainder_span.end;
            *line_end = c.line.end;
            return;
        }

        let lead = c.remainder_text.len() - c.remainder_text.trim_start().len();
        self.leaf = LeafState::Text {
            kind: BlockKind::Paragraph,
            quote_depth: c.quote_depth,
            start: c.line.start,
            content: Span {
                start: c.remainder_span.start + lead,
                end: c.remainder_span.end,
            },
            line_end: c.line.end,
        };
    }

    fn flush_leaf(&mut self) {
        match std::mem::replace(&mut self.leaf, LeafState::None) {
            LeafState::None => {}
            LeafState::Text {
                kind,
                quote_depth,
                start,
                content,
                line_end,
            } => self.out.push(BlockNode {
                containers: ContainerPath::for_quote_depth(quote_depth).0,
                kind,
                span: Span {
                    start,
                    end: line_end,
                },
                content_span: content,
            }),
            LeafState::Fence {
                kind,
                quote_depth,
                start,
                body,
                line_end,
            } => {
                // Unterminated fence: emit it anyway, running to EOF.
                self.out.push(BlockNode {
                    containers: ContainerPath::for_quote_depth(quote_depth).0,
                    kind: BlockKind::FencedCode { kind },
                    span: Span {
                        start,
                        end: line_end,
                    },
                    content_span: body.unwrap_or(Span {
                        start: line_end,
                        end: line_end,
                    }),
                });
            }
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
