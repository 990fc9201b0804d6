use crate::editing::{self, Cmd, DEFAULT_PREVIEW_CHARS, Document, Patch, TargetRange, TextRange};
use crate::error::{RewriteError, ServiceError};
use crate::rewrite::Rewriter;

/// A submission handed out by [`RewriteSession::begin_rewrite`].
///
/// Carries what to send to the rewriter. The ticket ties the eventual result
/// back to this submission; results for superseded or cancelled tickets are
/// discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRewrite {
    ticket: u64,
    target: TextRange,
    text: String,
    instructions: String,
}

impl PendingRewrite {
    pub fn ticket(&self) -> u64 {
        self.ticket
    }

    /// The highlighted range at submission time.
    pub fn target(&self) -> TextRange {
        self.target
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn instructions(&self) -> &str {
        &self.instructions
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteOutcome {
    Applied(Patch),
    /// The submission was cancelled or superseded; the document is untouched.
    Discarded,
}

/// Caller-facing API over a [`Document`]: target resolution, highlight
/// pinning, and rewrite submissions with at most one in flight.
///
/// The rewrite round trip is split into [`begin_rewrite`](Self::begin_rewrite)
/// and [`finish_rewrite`](Self::finish_rewrite) so edits can keep arriving
/// while the rewriter works. [`rewrite_with`](Self::rewrite_with) runs both
/// halves back to back.
#[derive(Debug)]
pub struct RewriteSession {
    doc: Document,
    in_flight: Option<u64>,
    next_ticket: u64,
    preview_chars: usize,
}

impl RewriteSession {
    pub fn new(doc: Document) -> Self {
        Self {
            doc,
            in_flight: None,
            next_ticket: 1,
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }

    pub fn with_preview_chars(mut self, preview_chars: usize) -> Self {
        self.preview_chars = preview_chars;
        self
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn into_document(self) -> Document {
        self.doc
    }

    /// Edit from the editing surface. The highlight follows along.
    pub fn apply(&mut self, cmd: Cmd) -> Result<Patch, RewriteError> {
        self.doc.apply(cmd)
    }

    pub fn set_selection(&mut self, selection: TextRange) -> Result<(), RewriteError> {
        self.doc.set_selection(selection)
    }

    pub fn resolve_target(&self) -> Result<TargetRange, RewriteError> {
        editing::resolve_target(&self.doc, self.doc.selection())
    }

    pub fn preview(&self) -> String {
        editing::preview(&self.doc, self.doc.selection(), self.preview_chars)
    }

    /// Pins the highlight to the current target.
    ///
    /// Returns `Ok(None)` without touching the highlight when the target is
    /// empty (caret on a blank line, empty document). A new pin abandons any
    /// outstanding submission: its result belongs to the old range.
    pub fn pin_current_target(&mut self) -> Result<Option<TargetRange>, RewriteError> {
        let target = self.resolve_target()?;
        if target.is_empty() {
            log::debug!("nothing to pin at {}", target.range());
            return Ok(None);
        }
        self.doc.pin_highlight(target.range())?;
        if let Some(ticket) = self.in_flight.take() {
            log::debug!("rewrite #{ticket} superseded by new pin at {}", target.range());
        }
        Ok(Some(target))
    }

    /// Replaces the highlighted range with `text`.
    ///
    /// Fails with [`RewriteError::StaleRange`] if the highlight is gone. Any
    /// outstanding submission is released; its result will be discarded.
    pub fn submit_replacement(&mut self, text: &str) -> Result<Patch, RewriteError> {
        let range = self
            .doc
            .highlight()
            .ok_or_else(|| RewriteError::stale(None, self.doc.len()))?;
        self.in_flight = None;
        editing::replace(&mut self.doc, range, text)
    }

    /// Drops the highlight and abandons any outstanding submission.
    pub fn cancel(&mut self) -> Option<TextRange> {
        if let Some(ticket) = self.in_flight.take() {
            log::debug!("rewrite #{ticket} cancelled");
        }
        self.doc.clear_highlight()
    }

    pub fn current_highlight(&self) -> Option<TextRange> {
        self.doc.highlight()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Starts a submission for the highlighted range, pinning the current
    /// target first if nothing is highlighted.
    pub fn begin_rewrite(&mut self, instructions: &str) -> Result<PendingRewrite, RewriteError> {
        if self.in_flight.is_some() {
            return Err(RewriteError::AlreadyInFlight);
        }

        let target = match self.doc.highlight() {
            Some(range) => range,
            None => {
                let resolved = self.pin_current_target()?;
                resolved
                    .map(|t| t.range())
                    .ok_or_else(|| RewriteError::range(self.doc.selection(), self.doc.len()))?
            }
        };

        let text = self.doc.text_in(target)?;
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.in_flight = Some(ticket);
        log::debug!("rewrite #{ticket} started for {target}");

        Ok(PendingRewrite {
            ticket,
            target,
            text,
            instructions: instructions.to_string(),
        })
    }

    /// Completes a submission with whatever the rewriter produced.
    pub fn finish_rewrite(
        &mut self,
        pending: PendingRewrite,
        result: Result<String, ServiceError>,
    ) -> Result<RewriteOutcome, RewriteError> {
        if self.in_flight != Some(pending.ticket) {
            log::debug!("discarding result of rewrite #{}", pending.ticket);
            return Ok(RewriteOutcome::Discarded);
        }
        self.in_flight = None;

        let text = match result {
            Ok(text) if text.is_empty() => {
                log::warn!("rewrite #{} returned no text", pending.ticket);
                return Err(ServiceError::empty_result().into());
            }
            Ok(text) => text,
            Err(e) => {
                log::warn!("rewrite #{} failed: {e}", pending.ticket);
                return Err(e.into());
            }
        };

        self.submit_replacement(&text).map(RewriteOutcome::Applied)
    }

    /// Runs a whole submission against `rewriter`.
    pub async fn rewrite_with<R: Rewriter>(
        &mut self,
        rewriter: &R,
        instructions: &str,
    ) -> Result<RewriteOutcome, RewriteError> {
        let pending = self.begin_rewrite(instructions)?;
        let result = rewriter.rewrite(pending.text(), pending.instructions()).await;
        self.finish_rewrite(pending, result)
    }
}
