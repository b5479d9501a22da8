//! Processing errors.

use thiserror::Error;

/// Failure raised while processing a record.
///
/// Decorators propagate these verbatim: a failure observed by the caller of
/// a chain is exactly the failure the terminal handler raised, never
/// wrapped or swallowed along the way.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Domain failure raised by a record handler.
    #[error("handler failure: {message}")]
    Handler { message: String },

    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed record payload: {0}")]
    Format(#[from] serde_json::Error),
}

impl ProcessError {
    pub fn handler(message: impl Into<String>) -> Self {
        Self::Handler {
            message: message.into(),
        }
    }
}
