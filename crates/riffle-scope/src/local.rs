//! Thread-local scope implementation.
//!
//! Activation state and the typed value store live in thread-local
//! storage: `ThreadLocalScope` itself is a stateless process-wide handle,
//! cheap to share behind an `Arc`, and two threads bracketing records
//! concurrently never observe each other's scope.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;

use tracing::debug;

use crate::error::ScopeError;
use crate::RequestScope;

type Store = HashMap<TypeId, Box<dyn Any>>;

thread_local! {
    static STORE: RefCell<Option<Store>> = const { RefCell::new(None) };
}

/// Request scope backed by thread-local storage.
///
/// Misuse of the lifecycle (activating an already-active scope,
/// terminating an inactive one) is a programming-contract violation and
/// asserts in debug builds. Release builds keep the original advisory
/// behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadLocalScope;

impl ThreadLocalScope {
    pub const fn new() -> Self {
        Self
    }

    /// Store a value in the active scope, replacing any previous value of
    /// the same type.
    pub fn put<T: 'static>(value: T) -> Result<(), ScopeError> {
        STORE.with(|s| {
            let mut slot = s.borrow_mut();
            let store = slot.as_mut().ok_or(ScopeError::NotActive)?;
            store.insert(TypeId::of::<T>(), Box::new(value));
            Ok(())
        })
    }

    /// Borrow a value from the active scope.
    pub fn with<T: 'static, R>(f: impl FnOnce(&T) -> R) -> Result<R, ScopeError> {
        STORE.with(|s| {
            let slot = s.borrow();
            let store = slot.as_ref().ok_or(ScopeError::NotActive)?;
            let value = store
                .get(&TypeId::of::<T>())
                .and_then(|v| v.downcast_ref::<T>())
                .ok_or(ScopeError::Missing(std::any::type_name::<T>()))?;
            Ok(f(value))
        })
    }

    /// Remove a value from the active scope.
    pub fn take<T: 'static>() -> Result<T, ScopeError> {
        STORE.with(|s| {
            let mut slot = s.borrow_mut();
            let store = slot.as_mut().ok_or(ScopeError::NotActive)?;
            let boxed = store
                .remove(&TypeId::of::<T>())
                .ok_or(ScopeError::Missing(std::any::type_name::<T>()))?;
            // TypeId match above guarantees the downcast.
            Ok(*boxed.downcast::<T>().unwrap_or_else(|_| unreachable!()))
        })
    }
}

impl RequestScope for ThreadLocalScope {
    fn is_active(&self) -> bool {
        STORE.with(|s| s.borrow().is_some())
    }

    fn activate(&self) {
        STORE.with(|s| {
            let mut slot = s.borrow_mut();
            debug_assert!(
                slot.is_none(),
                "request scope activated while already active"
            );
            *slot = Some(Store::new());
        });
        debug!("request scope activated");
    }

    fn terminate(&self) {
        STORE.with(|s| {
            let mut slot = s.borrow_mut();
            debug_assert!(
                slot.is_some(),
                "request scope terminated while inactive"
            );
            *slot = None;
        });
        debug!("request scope terminated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_by_default() {
        let scope = ThreadLocalScope::new();
        assert!(!scope.is_active());
    }

    #[test]
    fn activate_then_terminate() {
        let scope = ThreadLocalScope::new();
        scope.activate();
        assert!(scope.is_active());
        scope.terminate();
        assert!(!scope.is_active());
    }

    #[test]
    fn store_valid_only_while_active() {
        let scope = ThreadLocalScope::new();
        assert_eq!(ThreadLocalScope::put(7u32), Err(ScopeError::NotActive));

        scope.activate();
        ThreadLocalScope::put(7u32).unwrap();
        assert_eq!(ThreadLocalScope::with(|v: &u32| *v), Ok(7));
        scope.terminate();

        assert_eq!(
            ThreadLocalScope::with(|v: &u32| *v),
            Err(ScopeError::NotActive)
        );
    }

    #[test]
    fn terminate_drops_store() {
        let scope = ThreadLocalScope::new();
        scope.activate();
        ThreadLocalScope::put(String::from("collaborator")).unwrap();
        scope.terminate();

        // A fresh activation starts with an empty store.
        scope.activate();
        assert_eq!(
            ThreadLocalScope::with(|v: &String| v.clone()),
            Err(ScopeError::Missing(std::any::type_name::<String>()))
        );
        scope.terminate();
    }

    #[test]
    fn take_removes_value() {
        let scope = ThreadLocalScope::new();
        scope.activate();
        ThreadLocalScope::put(5i64).unwrap();
        assert_eq!(ThreadLocalScope::take::<i64>(), Ok(5));
        assert_eq!(
            ThreadLocalScope::take::<i64>(),
            Err(ScopeError::Missing(std::any::type_name::<i64>()))
        );
        scope.terminate();
    }

    #[test]
    fn threads_are_isolated() {
        let scope = ThreadLocalScope::new();
        scope.activate();

        let seen = std::thread::spawn(move || scope.is_active())
            .join()
            .unwrap();
        assert!(!seen, "activation leaked across threads");

        scope.terminate();
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "already active")]
    fn double_activate_asserts() {
        let scope = ThreadLocalScope::new();
        scope.activate();
        scope.activate();
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "while inactive")]
    fn foreign_terminate_asserts() {
        ThreadLocalScope::new().terminate();
    }
}
