use std::fmt;

use xi_rope::Rope;
use xi_rope::delta::Builder;

use crate::editing::commands::{StepEdit, compile_command};
use crate::editing::highlight::{HighlightChange, HighlightTracker};
use crate::editing::mapping::{Bias, map_offset_lossy};
use crate::editing::{Cmd, EditStep, Patch, TextRange, Transaction};
use crate::error::RewriteError;
use crate::parsing::{blocks::BlockNode, parse_document};

type StepObserver = Box<dyn FnMut(&EditStep)>;

/// Markdown source held in a single `xi_rope::Rope`, plus the state that has
/// to move with it: the editing selection and the pinned highlight.
///
/// All mutation goes through [`apply`](Self::apply) /
/// [`apply_transaction`](Self::apply_transaction). A command compiles to one or
/// more [`EditStep`]s; for each step, in order, the rope is updated, the
/// version bumped, the selection and highlight re-mapped, then subscribers
/// notified. Nothing is applied unless the whole command validates.
///
/// Offsets are UTF-8 byte offsets and must sit on character boundaries.
pub struct Document {
    pub(crate) buffer: Rope,
    pub(crate) selection: TextRange,
    pub(crate) version: u64,
    pub(crate) highlight: HighlightTracker,
    subscribers: Vec<StepObserver>,
}

impl Document {
    pub fn new() -> Self {
        Self::from("")
    }

    /// Create a new document from raw bytes
    pub fn from_bytes(bytes: &[u8]) -> anyhow::Result<Self> {
        let text = std::str::from_utf8(bytes)?;
        Ok(Self::from(text))
    }

    /// Get the document's content as raw bytes (exact round-trip)
    pub fn to_bytes(&self) -> Vec<u8> {
        self.text().into_bytes()
    }

    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn is_char_boundary(&self, offset: usize) -> bool {
        if offset == 0 || offset == self.len() {
            return true;
        }
        offset < self.len() && self.buffer.is_codepoint_boundary(offset)
    }

    /// Fails with [`RewriteError::Range`] unless `range` lies inside the
    /// document with both ends on character boundaries.
    pub fn check_range(&self, range: TextRange) -> Result<(), RewriteError> {
        let len = self.len();
        if range.is_within(len)
            && self.is_char_boundary(range.from)
            && self.is_char_boundary(range.to)
        {
            Ok(())
        } else {
            Err(RewriteError::range(range, len))
        }
    }

    pub fn text_between(&self, from: usize, to: usize) -> Result<String, RewriteError> {
        self.text_in(TextRange::new(from, to))
    }

    pub fn text_in(&self, range: TextRange) -> Result<String, RewriteError> {
        self.check_range(range)?;
        Ok(self.buffer.slice_to_cow(range.as_range()).into_owned())
    }

    /// Parsed leaf blocks, in document order.
    pub fn blocks(&self) -> Vec<BlockNode> {
        parse_document(&self.buffer).blocks
    }

    /// Content bounds of the block containing `offset`: block prefixes and the
    /// terminating newline excluded. `None` on blank lines and past the end.
    pub fn block_bounds_at(&self, offset: usize) -> Option<TextRange> {
        if offset > self.len() {
            return None;
        }
        parse_document(&self.buffer)
            .block_at(offset)
            .map(|b| b.content_span.into())
    }

    pub fn selection(&self) -> TextRange {
        self.selection
    }

    pub fn set_selection(&mut self, selection: TextRange) -> Result<(), RewriteError> {
        self.check_range(selection)?;
        self.selection = selection;
        Ok(())
    }

    pub fn highlight(&self) -> Option<TextRange> {
        self.highlight.current()
    }

    /// Pins the highlight to `range`, replacing any earlier pin.
    pub fn pin_highlight(&mut self, range: TextRange) -> Result<(), RewriteError> {
        self.check_range(range)?;
        self.highlight.pin(range, self.len())
    }

    pub fn clear_highlight(&mut self) -> Option<TextRange> {
        self.highlight.clear()
    }

    /// Registers an observer called with every applied step, after the
    /// highlight has been re-mapped.
    pub fn subscribe(&mut self, observer: impl FnMut(&EditStep) + 'static) {
        self.subscribers.push(Box::new(observer));
    }

    pub fn apply(&mut self, cmd: Cmd) -> Result<Patch, RewriteError> {
        self.apply_transaction(Transaction::new(cmd))
    }

    pub fn apply_transaction(&mut self, tx: Transaction) -> Result<Patch, RewriteError> {
        let edits = compile_command(self, &tx.cmd)?;

        let mut steps = Vec::with_capacity(edits.len());
        let mut changed: Vec<TextRange> = Vec::with_capacity(edits.len());
        let mut highlight_collapsed = false;

        for StepEdit { step, text } in edits {
            self.apply_step(&step, &text);

            for r in &mut changed {
                *r = TextRange::new(
                    map_offset_lossy(&step, r.from, Bias::Before),
                    map_offset_lossy(&step, r.to, Bias::After),
                );
            }
            changed.push(step.inserted_range());

            self.selection = map_selection(&step, self.selection);
            if self.highlight.on_edit(&step) == HighlightChange::Collapsed {
                highlight_collapsed = true;
            }
            for observer in &mut self.subscribers {
                observer(&step);
            }
            steps.push(step);
        }

        if tx.clear_highlight
            && let Some(cleared) = self.highlight.clear()
        {
            log::debug!("highlight {cleared} cleared by transaction");
        }

        Ok(Patch {
            steps,
            changed,
            new_selection: self.selection,
            version: self.version,
            highlight: self.highlight.current(),
            highlight_collapsed,
        })
    }

    fn apply_step(&mut self, step: &EditStep, text: &str) {
        let mut builder = Builder::new(self.buffer.len());
        let iv = step.delete_from..step.delete_to;
        if text.is_empty() {
            builder.delete(iv);
        } else {
            builder.replace(iv, Rope::from(text));
        }
        self.buffer = builder.build().apply(&self.buffer);
        self.version += 1;
    }
}

/// Carets follow inserted text; a selection whose content was deleted
/// collapses to a caret after the insertion.
fn map_selection(step: &EditStep, sel: TextRange) -> TextRange {
    let from = map_offset_lossy(step, sel.from, Bias::After);
    if sel.is_empty() {
        return TextRange::caret(from);
    }
    let to = map_offset_lossy(step, sel.to, Bias::Before);
    if from <= to {
        TextRange::new(from, to)
    } else {
        TextRange::caret(from)
    }
}

impl From<&str> for Document {
    /// Cursor starts at the end of the document.
    fn from(text: &str) -> Self {
        let buffer = Rope::from(text);
        let len = buffer.len();
        Self {
            buffer,
            selection: TextRange::caret(len),
            version: 0,
            highlight: HighlightTracker::new(),
            subscribers: Vec::new(),
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("len", &self.len())
            .field("selection", &self.selection)
            .field("version", &self.version)
            .field("highlight", &self.highlight.current())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
