use crate::editing::{EditStep, TextRange};

/// Result of applying a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Steps in the order they were applied.
    pub steps: Vec<EditStep>,
    /// Inserted ranges, in post-edit coordinates.
    pub changed: Vec<TextRange>,
    pub new_selection: TextRange,
    pub version: u64,
    /// The highlight after the edit.
    pub highlight: Option<TextRange>,
    /// Set when this edit destroyed a pinned highlight.
    pub highlight_collapsed: bool,
}

impl Patch {
    pub fn is_noop(&self) -> bool {
        self.steps.is_empty()
    }
}
