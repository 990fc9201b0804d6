//! Block parser tests: span invariants plus the block shapes selection
//! fallback relies on.


use pretty_assertions::assert_eq;
use xi_rope::Rope;

use crate::parsing::{
    blocks::{BlockKind, ContainerFrame, kinds::{FenceKind, ListMarker}},
    parse_document,
    rope::Span,
};

fn parse(md: &str) -> (Rope, crate::parsing::ParsedDoc) {
    let rope = Rope::from(md);
    let doc = parse_document(&rope);
    invariants::check(&rope, &doc.blocks);
    (rope, doc)
}

fn contents(rope: &Rope, doc: &crate::parsing::ParsedDoc) -> Vec<String> {
    doc.blocks
        .iter()
        .map(|b| {
            rope.slice_to_cow(b.content_span.start..b.content_span.end)
                .into_owned()
        })
        .collect()
}

#[test]
fn paragraphs_are_split_by_blank_lines() {
    let (rope, doc) = parse("Hello world\n\nSecond line");

    assert_eq!(contents(&rope, &doc), vec!["Hello world", "Second line"]);
    assert_eq!(doc.blocks[1].content_span, Span { start: 13, end: 24 });
    assert!(doc.blocks.iter().all(|b| b.kind == BlockKind::Paragraph));
}

#[test]
fn soft_wrapped_paragraph_is_one_block() {
    let (rope, doc) = parse("first line\nstill same paragraph\n");

    assert_eq!(doc.blocks.len(), 1);
    assert_eq!(contents(&rope, &doc), vec!["first line\nstill same paragraph"]);
    assert_eq!(doc.blocks[0].span, Span { start: 0, end: 32 });
}

#[test]
fn heading_content_excludes_marker() {
    let (rope, doc) = parse("## Section title\nBody text\n");

    assert_eq!(contents(&rope, &doc), vec!["Section title", "Body text"]);
    assert_eq!(doc.blocks[0].kind, BlockKind::Heading { level: 2 });
    assert_eq!(doc.blocks[1].kind, BlockKind::Paragraph);
}

#[test]
fn list_items_are_separate_blocks() {
    let (rope, doc) = parse("- Item 1\n- Item 2\n  - Nested\n1. Numbered\n");

    assert_eq!(
        contents(&rope, &doc),
        vec!["Item 1", "Item 2", "Nested", "Numbered"]
    );
    assert_eq!(
        doc.blocks[2].kind,
        BlockKind::ListItem {
            marker: ListMarker::Dash,
            depth: 1
        }
    );
    assert_eq!(
        doc.blocks[3].kind,
        BlockKind::ListItem {
            marker: ListMarker::Numbered("1.".to_string()),
            depth: 0
        }
    );
}

#[test]
fn list_item_absorbs_lazy_continuation() {
    let (rope, doc) = parse("- wrapped item\ncontinues here\n");

    assert_eq!(doc.blocks.len(), 1);
    assert_eq!(contents(&rope, &doc), vec!["wrapped item\ncontinues here"]);
}

#[test]
fn fenced_code_content_excludes_fences() {
    let (rope, doc) = parse("```rust\nfn main() {}\nlet x = 1;\n```\nafter\n");

    assert_eq!(
        contents(&rope, &doc),
        vec!["fn main() {}\nlet x = 1;", "after"]
    );
    assert_eq!(
        doc.blocks[0].kind,
        BlockKind::FencedCode {
            kind: FenceKind::Backticks
        }
    );
}

#[test]
fn fence_is_a_raw_zone() {
    let (_rope, doc) = parse("~~~\n# not a heading\n- not a list\n~~~\n");

    assert_eq!(doc.blocks.len(), 1);
}

#[test]
fn unterminated_fence_runs_to_eof() {
    let (rope, doc) = parse("```\ncode\nmore");

    assert_eq!(doc.blocks.len(), 1);
    assert_eq!(doc.blocks[0].span.end, rope.len());
    assert_eq!(contents(&rope, &doc), vec!["code\nmore"]);
}

#[test]
fn empty_fence_has_empty_content() {
    let (_rope, doc) = parse("```\n```\n");

    assert_eq!(doc.blocks.len(), 1);
    assert!(doc.blocks[0].content_span.is_empty());
}

#[test]
fn quoted_paragraph_records_container() {
    let (rope, doc) = parse("> quoted text\n> more\n\nplain\n");

    assert_eq!(contents(&rope, &doc), vec!["quoted text\n> more", "plain"]);
    assert_eq!(
        doc.blocks[0].containers,
        vec![ContainerFrame::BlockQuote { depth: 1 }]
    );
    assert!(doc.blocks[1].containers.is_empty());
}

#[test]
fn quote_depth_change_starts_new_block() {
    let (_rope, doc) = parse("> outer\n>> inner\n");

    assert_eq!(doc.blocks.len(), 2);
    assert_eq!(
        doc.blocks[1].containers,
        vec![ContainerFrame::BlockQuote { depth: 2 }]
    );
}

#[test]
fn crlf_newlines_are_not_content() {
    let (rope, doc) = parse("one\r\n\r\ntwo\r\n");

    assert_eq!(contents(&rope, &doc), vec!["one", "two"]);
}

#[test]
fn empty_document_has_no_blocks() {
    let (_rope, doc) = parse("");
    assert!(doc.blocks.is_empty());
}

#[test]
fn block_at_resolves_content_prefix_and_gaps() {
    let (_rope, doc) = parse("# Title\n\nBody\n");

    // Inside content, at content end, and inside the `# ` prefix.
    assert_eq!(doc.block_at(4).map(|b| b.content_span), Some(Span { start: 2, end: 7 }));
    assert_eq!(doc.block_at(7).map(|b| b.content_span), Some(Span { start: 2, end: 7 }));
    assert_eq!(doc.block_at(0).map(|b| b.content_span), Some(Span { start: 2, end: 7 }));
    // The blank line between the blocks.
    assert_eq!(doc.block_at(8), None);
    assert_eq!(doc.block_at(9).map(|b| b.content_span), Some(Span { start: 9, end: 13 }));
}
