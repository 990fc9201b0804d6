use std::fmt;

use thiserror::Error;

use crate::editing::TextRange;

/// Failure reported by a [`Rewriter`](crate::rewrite::Rewriter).
///
/// Covers transport, authentication and empty-result problems alike; the
/// engine never inspects it beyond logging and handing it back.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct ServiceError {
    /// Status code, when the collaborator has one (HTTP status, process exit code).
    pub status: Option<u16>,
    pub message: String,
}

impl ServiceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: message.into(),
        }
    }

    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            message: message.into(),
        }
    }

    pub fn empty_result() -> Self {
        Self::new("rewrite service returned no text")
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "rewrite service failed ({status}): {}", self.message),
            None => write!(f, "rewrite service failed: {}", self.message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RewriteError {
    /// Caller passed offsets that don't describe a range of the current document.
    #[error("range {from}..{to} is not valid in a document of length {len}")]
    Range { from: usize, to: usize, len: usize },

    /// The range a replacement was aimed at no longer exists: the highlight
    /// was cleared, collapsed by an edit, or the offsets went out of bounds.
    #[error("{}", stale_message(.range, .len))]
    StaleRange {
        range: Option<TextRange>,
        len: usize,
    },

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("a rewrite is already in flight")]
    AlreadyInFlight,
}

impl RewriteError {
    pub(crate) fn range(range: TextRange, len: usize) -> Self {
        Self::Range {
            from: range.from,
            to: range.to,
            len,
        }
    }

    pub(crate) fn stale(range: Option<TextRange>, len: usize) -> Self {
        Self::StaleRange { range, len }
    }

    /// True for errors the user can recover from by retrying the flow.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Range { .. })
    }
}

fn stale_message(range: &Option<TextRange>, len: &usize) -> String {
    match range {
        Some(r) => format!("target range {r} is stale in a document of length {len}"),
        None => "target range no longer exists".to_string(),
    }
}
