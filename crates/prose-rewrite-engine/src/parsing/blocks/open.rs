use super::kinds::{CodeFence, FenceKind, Heading, ListItem};

/// A leaf block opener detected at the start of a line remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockOpen {
    FencedCode { kind: FenceKind },
    Heading { level: u8, content_offset: usize },
    ListItem(ListItem),
}

/// Precedence: fence, then heading, then list item.
pub fn try_open_leaf(remainder: &str) -> Option<BlockOpen> {
    if let Some(kind) = CodeFence::sig(remainder) {
        return Some(BlockOpen::FencedCode { kind });
    }
    if let Some((level, content_offset)) = Heading::parse(remainder) {
        return Some(BlockOpen::Heading {
            level,
            content_offset,
        });
    }
    ListItem::parse(remainder).map(BlockOpen::ListItem)
}
