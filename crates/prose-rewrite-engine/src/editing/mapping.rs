//! Position mapping through edit steps.
//!
//! Every document mutation is a sequence of [`EditStep`]s. A step deletes
//! `[delete_from, delete_to)` and inserts `inserted_len` bytes at
//! `delete_from`. The functions here map offsets and ranges taken *before* a
//! step to where they end up *after* it.
//!
//! Boundary policy: an offset exactly at `delete_from` or `delete_to` is never
//! inside the deleted span. A range whose endpoints bracket a replacement
//! therefore survives it, resized to the inserted content. This is what lets a
//! highlight follow its own text through the replacement that resolves it.

use serde::{Deserialize, Serialize};

use crate::editing::TextRange;

/// One atomic document change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EditStep {
    pub delete_from: usize,
    pub delete_to: usize,
    pub inserted_len: usize,
}

impl EditStep {
    /// # Panics
    /// Debug builds panic if `delete_from > delete_to`.
    pub fn new(delete_from: usize, delete_to: usize, inserted_len: usize) -> Self {
        debug_assert!(
            delete_from <= delete_to,
            "edit step deletes backwards: {delete_from}..{delete_to}"
        );
        Self {
            delete_from,
            delete_to,
            inserted_len,
        }
    }

    pub fn insertion(at: usize, inserted_len: usize) -> Self {
        Self::new(at, at, inserted_len)
    }

    pub fn deletion(range: TextRange) -> Self {
        Self::new(range.from, range.to, 0)
    }

    pub fn replacement(range: TextRange, inserted_len: usize) -> Self {
        Self::new(range.from, range.to, inserted_len)
    }

    pub fn deleted_len(&self) -> usize {
        self.delete_to - self.delete_from
    }

    pub fn is_pure_insertion(&self) -> bool {
        self.delete_from == self.delete_to
    }

    /// Where the inserted content lives after the step is applied.
    pub fn inserted_range(&self) -> TextRange {
        TextRange::new(self.delete_from, self.delete_from + self.inserted_len)
    }

    pub fn map_offset(&self, offset: usize, bias: Bias) -> MappedOffset {
        map_offset(self, offset, bias)
    }

    pub fn map_range(&self, range: TextRange) -> Option<TextRange> {
        map_range(self, range)
    }
}

/// Tie-break for an offset sitting exactly where content is inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Bias {
    /// Stay in front of the inserted content.
    Before,
    /// Move past the inserted content.
    #[default]
    After,
}

/// Result of mapping one offset through a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappedOffset {
    Offset(usize),
    /// The offset was strictly inside deleted content.
    Deleted,
}

impl MappedOffset {
    pub fn offset(self) -> Option<usize> {
        match self {
            MappedOffset::Offset(o) => Some(o),
            MappedOffset::Deleted => None,
        }
    }

    pub fn is_deleted(self) -> bool {
        matches!(self, MappedOffset::Deleted)
    }
}

/// Maps a pre-step offset to its post-step position.
///
/// - `offset <= delete_from`: unchanged
/// - `offset >= delete_to`: shifted by `inserted_len - deleted_len`
/// - strictly between: [`MappedOffset::Deleted`]
///
/// A pure insertion at exactly `offset` matches both of the first two rules;
/// `bias` picks the side.
pub fn map_offset(step: &EditStep, offset: usize, bias: Bias) -> MappedOffset {
    if step.is_pure_insertion() && offset == step.delete_from {
        return match bias {
            Bias::Before => MappedOffset::Offset(offset),
            Bias::After => MappedOffset::Offset(offset + step.inserted_len),
        };
    }

    if offset <= step.delete_from {
        MappedOffset::Offset(offset)
    } else if offset >= step.delete_to {
        MappedOffset::Offset(offset - step.deleted_len() + step.inserted_len)
    } else {
        MappedOffset::Deleted
    }
}

/// Like [`map_offset`] but never fails: a deleted offset lands on the edge of
/// the inserted content selected by `bias`. Used for carets, which must
/// always point somewhere.
pub fn map_offset_lossy(step: &EditStep, offset: usize, bias: Bias) -> usize {
    match map_offset(step, offset, bias) {
        MappedOffset::Offset(o) => o,
        MappedOffset::Deleted => match bias {
            Bias::Before => step.delete_from,
            Bias::After => step.delete_from + step.inserted_len,
        },
    }
}

/// Maps a range through a step.
///
/// `from` maps with [`Bias::After`] and `to` with [`Bias::Before`], so
/// insertions touching either edge stay outside the range. Returns `None` if
/// either endpoint was deleted or the range turned inside out.
pub fn map_range(step: &EditStep, range: TextRange) -> Option<TextRange> {
    let from = map_offset(step, range.from, Bias::After).offset()?;
    let to = map_offset(step, range.to, Bias::Before).offset()?;
    (from <= to).then_some(TextRange::new(from, to))
}

/// Folds [`map_range`] over `steps` in application order.
pub fn map_range_through<'a>(
    steps: impl IntoIterator<Item = &'a EditStep>,
    range: TextRange,
) -> Option<TextRange> {
    steps
        .into_iter()
        .try_fold(range, |acc, step| map_range(step, acc))
}
