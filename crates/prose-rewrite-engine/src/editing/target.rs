use serde::{Deserialize, Serialize};

use crate::editing::{Document, TextRange};
use crate::error::RewriteError;
use crate::parsing::rope::truncate_chars;

/// Preview length used when the caller doesn't configure one.
pub const DEFAULT_PREVIEW_CHARS: usize = 160;

/// What the user is currently pointing at, resolved to offsets plus the text
/// found there at resolution time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetRange {
    pub from: usize,
    pub to: usize,
    pub selected_text: String,
}

impl TargetRange {
    pub fn range(&self) -> TextRange {
        TextRange::new(self.from, self.to)
    }

    pub fn is_empty(&self) -> bool {
        self.range().is_empty()
    }
}

/// The range a selection targets.
///
/// A non-empty selection targets itself. A caret targets the content of the
/// block around it; off any block (blank line, empty document) it targets
/// the empty range at the caret.
pub fn target_range(doc: &Document, selection: TextRange) -> Result<TextRange, RewriteError> {
    doc.check_range(selection)?;
    if !selection.is_empty() {
        return Ok(selection);
    }
    Ok(doc
        .block_bounds_at(selection.from)
        .unwrap_or(TextRange::caret(selection.from)))
}

pub fn resolve_target(doc: &Document, selection: TextRange) -> Result<TargetRange, RewriteError> {
    let range = target_range(doc, selection)?;
    Ok(TargetRange {
        from: range.from,
        to: range.to,
        selected_text: doc.text_in(range)?,
    })
}

/// First `max_chars` characters of the target, or `""` if there is none.
pub fn preview(doc: &Document, selection: TextRange, max_chars: usize) -> String {
    match resolve_target(doc, selection) {
        Ok(target) => truncate_chars(&target.selected_text, max_chars).to_string(),
        Err(e) => {
            log::debug!("no preview: {e}");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn explicit_selection_wins() {
        let doc = Document::from("Hello world\n\nSecond line");
        assert_eq!(
            resolve_target(&doc, TextRange::new(6, 11)).unwrap(),
            TargetRange {
                from: 6,
                to: 11,
                selected_text: "world".into()
            }
        );
    }

    #[test]
    fn selection_may_span_blocks() {
        let doc = Document::from("Hello world\n\nSecond line");
        let target = resolve_target(&doc, TextRange::new(6, 19)).unwrap();
        assert_eq!(target.selected_text, "world\n\nSecond");
    }

    #[rstest]
    #[case::start_of_block(13)]
    #[case::middle_of_block(18)]
    #[case::end_of_document(24)]
    fn caret_falls_back_to_enclosing_block(#[case] caret: usize) {
        let doc = Document::from("Hello world\n\nSecond line");
        let target = resolve_target(&doc, TextRange::caret(caret)).unwrap();

        assert_eq!(target.range(), TextRange::new(13, 24));
        assert_eq!(target.selected_text, "Second line");
    }

    #[test]
    fn caret_in_list_item_excludes_marker() {
        let doc = Document::from("- first\n- second\n");
        let target = resolve_target(&doc, TextRange::caret(12)).unwrap();
        assert_eq!(target.selected_text, "second");
    }

    #[test]
    fn caret_on_blank_line_targets_nothing() {
        let doc = Document::from("Hello world\n\nSecond line");
        let target = resolve_target(&doc, TextRange::caret(12)).unwrap();

        assert_eq!(target.range(), TextRange::caret(12));
        assert!(target.is_empty());
        assert_eq!(target.selected_text, "");
    }

    #[test]
    fn empty_document_targets_nothing() {
        let doc = Document::new();
        let target = resolve_target(&doc, TextRange::caret(0)).unwrap();
        assert!(target.is_empty());
    }

    #[test]
    fn invalid_selection_is_a_range_error() {
        let doc = Document::from("short");
        assert!(matches!(
            resolve_target(&doc, TextRange::new(2, 40)),
            Err(RewriteError::Range { .. })
        ));
    }

    #[test]
    fn resolution_is_idempotent() {
        let doc = Document::from("# Heading\n\nBody text here.");
        let sel = TextRange::caret(15);
        assert_eq!(
            resolve_target(&doc, sel).unwrap(),
            resolve_target(&doc, sel).unwrap()
        );
    }

    #[test]
    fn preview_truncates_by_characters() {
        let doc = Document::from("日本語のテキストです");
        assert_eq!(preview(&doc, TextRange::caret(0), 3), "日本語");
    }

    #[test]
    fn preview_of_invalid_selection_is_empty() {
        let doc = Document::from("short");
        assert_eq!(preview(&doc, TextRange::new(3, 1), DEFAULT_PREVIEW_CHARS), "");
    }
}
