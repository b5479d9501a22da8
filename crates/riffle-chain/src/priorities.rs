//! Chain positions for the built-in decorators.
//!
//! Lower value = outer layer: a layer with priority 100 wraps one with
//! priority 200. Positions are spaced so deployments can slot their own
//! decorators between the built-ins.

/// Request-scope bracket. Strictly outermost relative to every decorator
/// that resolves request-scoped collaborators — anything that depends on
/// an active scope must register with a value greater than this.
pub const REQUEST_SCOPE: i32 = 100;

/// Per-record tracing span. Inside the scope bracket so the span covers
/// exactly the scoped window.
pub const TRACING: i32 = 200;
