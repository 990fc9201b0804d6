pub mod blocks;
pub mod rope;

use xi_rope::Rope;

use blocks::{BlockBuilder, BlockNode, MarkdownLineClassifier};
use rope::lines_with_spans;

#[derive(Debug)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockNode>,
}

impl ParsedDoc {
    /// The leaf block an offset belongs to.
    ///
    /// A block owns every offset of its content span, end included, so a caret
    /// parked after the last character still resolves to the block. Offsets in
    /// a block's prefix (`# `, `- `, `> `) resolve to that block too. Offsets on
    /// blank lines between blocks belong to nothing.
    pub fn block_at(&self, offset: usize) -> Option<&BlockNode> {
        self.blocks
            .iter()
            .find(|b| b.content_span.touches(offset))
            .or_else(|| {
                self.blocks
                    .iter()
                    .find(|b| b.span.start <= offset && offset < b.span.end)
            })
    }
}

pub fn parse_document(rope: &Rope) -> ParsedDoc {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for lr in lines_with_spans(rope) {
        let lc = classifier.classify(&lr);
        builder.push(&lc);
    }

    ParsedDoc {
        blocks: builder.finish(),
    }
}

#[cfg(test)]
mod tests;
