//! Request-scope bracket — opens and closes a scoped context per record.

use std::sync::Arc;

use riffle_api::{ProcessError, Processor, Record};
use riffle_scope::{RequestScope, ScopeGuard};
use tracing::trace;

use crate::stack::DecoratorLayer;

/// Brackets each record's processing with the request-scope lifecycle.
///
/// Record feeds run outside any request, so request-scoped collaborators
/// have no context to resolve against. This decorator activates a scope
/// before delegating and terminates it afterward, on every exit path.
///
/// When a scope is already active on entry, the bracket delegates directly
/// and leaves the scope alone: a pre-existing activation is owned by
/// whoever opened it further up the call stack, and terminating state this
/// invocation did not create would corrupt the owner's pairing. The branch
/// is chosen once at entry and never re-evaluated mid-call.
///
/// Must be assembled outermost relative to any decorator that resolves
/// scoped collaborators — see [`crate::priorities`].
pub struct ScopeBracket {
    inner: Box<dyn Processor>,
    scope: Arc<dyn RequestScope>,
}

impl ScopeBracket {
    /// Wrap `inner`, bracketing it with `scope`'s lifecycle.
    ///
    /// Both collaborators are fixed here for the bracket's lifetime; the
    /// scope is an explicit dependency, never resolved from a global
    /// registry inside `process`.
    pub fn new(inner: Box<dyn Processor>, scope: Arc<dyn RequestScope>) -> Self {
        Self { inner, scope }
    }
}

impl Processor for ScopeBracket {
    fn process(&self, record: &Record) -> Result<(), ProcessError> {
        if self.scope.is_active() {
            // The activation's owner cleans it up.
            self.inner.process(record)
        } else {
            trace!("opening request scope for record");
            let _guard = ScopeGuard::enter(self.scope.as_ref());
            self.inner.process(record)
        }
    }

    fn name(&self) -> &str {
        "request-scope"
    }
}

/// Assembles a [`ScopeBracket`] into a chain.
pub struct ScopeLayer {
    scope: Arc<dyn RequestScope>,
}

impl ScopeLayer {
    pub fn new(scope: Arc<dyn RequestScope>) -> Self {
        Self { scope }
    }
}

impl DecoratorLayer for ScopeLayer {
    fn wrap(&self, inner: Box<dyn Processor>) -> Box<dyn Processor> {
        Box::new(ScopeBracket::new(inner, Arc::clone(&self.scope)))
    }

    fn name(&self) -> &str {
        "request-scope"
    }
}
