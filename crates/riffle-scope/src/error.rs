//! Scope access errors.

use thiserror::Error;

/// Failure accessing the request-scoped store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScopeError {
    /// No scope is active on the calling thread.
    #[error("no request scope is active on this thread")]
    NotActive,

    /// The scope is active but holds no value of the requested type.
    #[error("request scope holds no value of type {0}")]
    Missing(&'static str),
}
