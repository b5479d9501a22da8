//! Riffle decorator chain.
//!
//! Decorators add cross-cutting behavior around a terminal record handler
//! without altering its result: the request-scope bracket opens and closes
//! a scoped context per record, the trace bracket spans each call. The
//! [`DecoratorStack`] assembles them around the terminal handler in an
//! explicit, priority-ordered sequence at startup.

pub mod bracket;
pub mod priorities;
pub mod stack;
pub mod trace;

pub use bracket::{ScopeBracket, ScopeLayer};
pub use stack::{DecoratorLayer, DecoratorStack};
pub use trace::{TraceBracket, TraceLayer};
