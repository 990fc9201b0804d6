pub mod editing;
pub mod error;
pub mod parsing;
pub mod rewrite;
pub mod session;

// Re-export key types for easier usage
pub use editing::{Cmd, Document, EditStep, Mark, Patch, TargetRange, TextRange, Transaction};
pub use error::{RewriteError, ServiceError};
pub use rewrite::Rewriter;
pub use session::{PendingRewrite, RewriteOutcome, RewriteSession};
