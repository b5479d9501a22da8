//! Request-scoped execution context.
//!
//! A *scope* is a unit-of-work-bound storage area for request-scoped
//! collaborators, valid only between an explicit `activate` and the
//! matching `terminate`. Record-feed infrastructure runs outside any
//! request, so a decorator brackets each record's processing with this
//! lifecycle; collaborators resolved during the call then behave as if a
//! request were in flight.
//!
//! The scope is bound to the calling thread. Concurrent records on
//! different threads each get their own activation state and store, so
//! their activate/terminate pairings cannot corrupt each other.

pub mod error;
pub mod guard;
pub mod local;

pub use error::ScopeError;
pub use guard::ScopeGuard;
pub use local::ThreadLocalScope;

/// Handle on the process-wide request-scope lifecycle.
///
/// Contract: `activate` must not be called while the scope is already
/// active, and `terminate` must only be called by the owner of the current
/// activation. Brackets uphold this by branching once on `is_active` at
/// entry; a pre-existing scope is cleaned up by whoever activated it
/// further up the call stack, never by a nested bracket.
pub trait RequestScope: Send + Sync {
    /// Whether a scope is active on the calling thread.
    fn is_active(&self) -> bool;

    /// Open a scope on the calling thread.
    fn activate(&self);

    /// Close the scope on the calling thread, dropping its store.
    fn terminate(&self);
}
