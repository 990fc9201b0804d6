use crate::editing::{EditStep, TextRange, mapping};
use crate::error::RewriteError;

/// What an edit did to the pinned highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightChange {
    /// Nothing was pinned.
    Idle,
    Unchanged,
    Moved(TextRange),
    /// The edit destroyed the pinned range; the tracker is now idle.
    Collapsed,
}

/// Owns at most one pinned range and keeps it in step with the buffer.
///
/// Two states: idle (`pinned == None`) and pinned. Every edit step applied to
/// the owning document is fed to [`on_edit`](Self::on_edit) in application
/// order; the document does this itself, so a pinned range can never miss a
/// step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightTracker {
    pinned: Option<TextRange>,
}

impl HighlightTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins `range`, replacing any earlier pin.
    pub fn pin(&mut self, range: TextRange, doc_len: usize) -> Result<(), RewriteError> {
        if range.is_empty() || !range.is_within(doc_len) {
            return Err(RewriteError::range(range, doc_len));
        }
        if let Some(prev) = self.pinned.replace(range) {
            log::debug!("highlight {prev} replaced by {range}");
        } else {
            log::debug!("highlight pinned at {range}");
        }
        Ok(())
    }

    pub fn on_edit(&mut self, step: &EditStep) -> HighlightChange {
        let Some(current) = self.pinned else {
            return HighlightChange::Idle;
        };

        match mapping::map_range(step, current) {
            Some(mapped) if !mapped.is_empty() => {
                self.pinned = Some(mapped);
                if mapped == current {
                    HighlightChange::Unchanged
                } else {
                    HighlightChange::Moved(mapped)
                }
            }
            _ => {
                log::debug!(
                    "highlight {current} collapsed by edit {}..{} (+{})",
                    step.delete_from,
                    step.delete_to,
                    step.inserted_len
                );
                self.pinned = None;
                HighlightChange::Collapsed
            }
        }
    }

    /// Forces the tracker idle, returning what was pinned.
    pub fn clear(&mut self) -> Option<TextRange> {
        self.pinned.take()
    }

    pub fn current(&self) -> Option<TextRange> {
        self.pinned
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned.is_some()
    }
}
