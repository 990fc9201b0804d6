use crate::editing::{Document, EditStep, TextRange};
use crate::error::RewriteError;

/// Inline formatting that [`Cmd::ToggleMark`] can add or remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Strong,
    Emphasis,
    Code,
}

impl Mark {
    pub fn delimiter(self) -> &'static str {
        match self {
            Mark::Strong => "**",
            Mark::Emphasis => "_",
            Mark::Code => "`",
        }
    }
}

/// Edit commands accepted by [`Document::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    InsertText { at: usize, text: String },
    DeleteRange { range: TextRange },
    ReplaceRange { range: TextRange, text: String },
    /// Wraps `range` in the mark's delimiters, or strips them if the range is
    /// already wrapped.
    ToggleMark { range: TextRange, mark: Mark },
}

/// A command plus metadata for the document's built-in observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub cmd: Cmd,
    /// Clear the pinned highlight once the steps have been applied.
    pub clear_highlight: bool,
}

impl Transaction {
    pub fn new(cmd: Cmd) -> Self {
        Self {
            cmd,
            clear_highlight: false,
        }
    }

    pub fn clearing_highlight(mut self) -> Self {
        self.clear_highlight = true;
        self
    }
}

impl From<Cmd> for Transaction {
    fn from(cmd: Cmd) -> Self {
        Self::new(cmd)
    }
}

/// One step together with the text it inserts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StepEdit {
    pub step: EditStep,
    pub text: String,
}

impl StepEdit {
    fn new(range: TextRange, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            step: EditStep::replacement(range, text.len()),
            text,
        }
    }
}

/// Compiles `cmd` into ordered steps against the current state of `doc`.
///
/// Each step is expressed in the coordinates produced by the steps before it.
/// All validation happens here, so a command either applies in full or not at
/// all. No-op steps (nothing deleted, nothing inserted) are dropped.
pub(crate) fn compile_command(doc: &Document, cmd: &Cmd) -> Result<Vec<StepEdit>, RewriteError> {
    let edits = match cmd {
        Cmd::InsertText { at, text } => {
            let range = TextRange::caret(*at);
            doc.check_range(range)?;
            vec![StepEdit::new(range, text.as_str())]
        }
        Cmd::DeleteRange { range } => {
            doc.check_range(*range)?;
            vec![StepEdit::new(*range, "")]
        }
        Cmd::ReplaceRange { range, text } => {
            doc.check_range(*range)?;
            vec![StepEdit::new(*range, text.as_str())]
        }
        Cmd::ToggleMark { range, mark } => {
            doc.check_range(*range)?;
            toggle_mark(doc, *range, *mark)
        }
    };

    Ok(edits
        .into_iter()
        .filter(|e| e.step.deleted_len() > 0 || e.step.inserted_len > 0)
        .collect())
}

fn toggle_mark(doc: &Document, range: TextRange, mark: Mark) -> Vec<StepEdit> {
    let delim = mark.delimiter();
    let k = delim.len();

    if is_wrapped(doc, range, delim) {
        // Opening delimiter goes first, which pulls the closing one back by k.
        vec![
            StepEdit::new(TextRange::new(range.from - k, range.from), ""),
            StepEdit::new(TextRange::new(range.to - k, range.to), ""),
        ]
    } else {
        vec![
            StepEdit::new(TextRange::caret(range.from), delim),
            StepEdit::new(TextRange::caret(range.to + k), delim),
        ]
    }
}

fn is_wrapped(doc: &Document, range: TextRange, delim: &str) -> bool {
    let k = delim.len();
    if range.from < k || range.to + k > doc.len() {
        return false;
    }
    let before = doc.text_between(range.from - k, range.from);
    let after = doc.text_between(range.to, range.to + k);
    matches!((before, after), (Ok(b), Ok(a)) if b == delim && a == delim)
}
