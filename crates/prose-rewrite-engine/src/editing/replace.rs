use crate::editing::{Cmd, Document, EditStep, Patch, TextRange, Transaction};
use crate::error::RewriteError;

/// The single step that swaps `range` for `text`.
pub fn replacement_step(range: TextRange, text: &str) -> EditStep {
    EditStep::replacement(range, text.len())
}

/// Replaces `range` with `replacement` as one atomic edit and clears the
/// highlight.
///
/// A range that no longer fits the document fails with
/// [`RewriteError::StaleRange`] before anything is touched. The highlight is
/// re-mapped through the step like any other edit before being cleared, so
/// observers see a consistent sequence.
pub fn replace(
    doc: &mut Document,
    range: TextRange,
    replacement: &str,
) -> Result<Patch, RewriteError> {
    if doc.check_range(range).is_err() {
        return Err(RewriteError::stale(Some(range), doc.len()));
    }

    let tx = Transaction::new(Cmd::ReplaceRange {
        range,
        text: replacement.to_string(),
    })
    .clearing_highlight();

    let patch = doc.apply_transaction(tx)?;
    log::info!(
        "replaced {range} with {} bytes (version {})",
        replacement.len(),
        patch.version
    );
    Ok(patch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn replaces_and_clears_highlight() {
        let mut doc = Document::from("Make it concise.");
        doc.pin_highlight(TextRange::new(0, 16)).unwrap();

        let patch = replace(&mut doc, TextRange::new(0, 16), "Be brief.").unwrap();

        assert_eq!(doc.text(), "Be brief.");
        assert_eq!(doc.highlight(), None);
        assert_eq!(patch.steps, vec![replacement_step(TextRange::new(0, 16), "Be brief.")]);
        assert_eq!(patch.changed, vec![TextRange::new(0, 9)]);
    }

    #[test]
    fn observers_are_notified_once() {
        let calls = Rc::new(Cell::new(0));
        let mut doc = Document::from("one two three");
        let counter = Rc::clone(&calls);
        doc.subscribe(move |_| counter.set(counter.get() + 1));

        replace(&mut doc, TextRange::new(4, 7), "2").unwrap();

        assert_eq!(doc.text(), "one 2 three");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn stale_range_fails_closed() {
        let mut doc = Document::from("MN");
        let err = replace(&mut doc, TextRange::new(5, 10), "x").unwrap_err();

        assert_eq!(
            err,
            RewriteError::StaleRange {
                range: Some(TextRange::new(5, 10)),
                len: 2
            }
        );
        assert_eq!(doc.text(), "MN");
        assert_eq!(doc.version(), 0);
    }

    #[test]
    fn empty_replacement_deletes() {
        let mut doc = Document::from("drop this word");
        replace(&mut doc, TextRange::new(5, 10), "").unwrap();
        assert_eq!(doc.text(), "drop word");
    }
}
