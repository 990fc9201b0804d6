//! Seam to whatever produces replacement text.

use std::future::Future;

use crate::error::ServiceError;

/// Turns a piece of text plus free-form instructions into replacement text.
///
/// Implementations own transport, credentials and retries (if any), and any
/// policy stricter than "non-empty". An empty result should be reported as
/// [`ServiceError::empty_result`]; the session rejects it either way.
pub trait Rewriter {
    fn rewrite(
        &self,
        text: &str,
        instructions: &str,
    ) -> impl Future<Output = Result<String, ServiceError>>;
}

impl<R: Rewriter> Rewriter for &R {
    fn rewrite(
        &self,
        text: &str,
        instructions: &str,
    ) -> impl Future<Output = Result<String, ServiceError>> {
        (**self).rewrite(text, instructions)
    }
}
