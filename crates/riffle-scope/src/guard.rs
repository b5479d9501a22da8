//! RAII guard pairing `activate` with a guaranteed `terminate`.

use crate::RequestScope;

/// Owns one scope activation and terminates it on drop.
///
/// `enter` activates the scope; the guard's `Drop` terminates it on every
/// exit path of the bracketed call — normal return, `?` propagation, or
/// unwinding. A missed `terminate` would leak scope state into unrelated
/// work on the same thread, so the pairing is never left to manual calls.
#[must_use = "dropping the guard terminates the scope immediately"]
pub struct ScopeGuard<'a> {
    scope: &'a dyn RequestScope,
}

impl<'a> ScopeGuard<'a> {
    /// Activate `scope` and take ownership of the activation.
    ///
    /// The scope must be inactive on the calling thread.
    pub fn enter(scope: &'a dyn RequestScope) -> Self {
        scope.activate();
        Self { scope }
    }
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        self.scope.terminate();
    }
}
