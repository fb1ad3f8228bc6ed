//! Shared entity handles.
//!
//! A store hands out [`Shared`] handles instead of copies, so every holder of
//! a handle (a customer's cart, for instance) observes mutations made through
//! any other holder.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Reference-counted, lock-guarded handle to an entity.
pub struct Shared<T>(Arc<RwLock<T>>);

impl<T> Shared<T> {
    pub fn new(value: T) -> Self {
        Self(Arc::new(RwLock::new(value)))
    }

    /// Read access. A poisoned lock is recovered: entity state is plain data
    /// and is never left half-written by the store.
    pub fn read(&self) -> RwLockReadGuard<'_, T> {
        self.0.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Write access; see [`Shared::read`] regarding poisoning.
    pub fn write(&self) -> RwLockWriteGuard<'_, T> {
        self.0.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` against the current value with mutable access.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.write())
    }

    /// Whether both handles point at the same entity (identity, not value).
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: Clone> Shared<T> {
    /// Copy of the current value, detached from the handle.
    pub fn snapshot(&self) -> T {
        self.read().clone()
    }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for Shared<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("Shared").field(&*self.read()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_alias_the_same_value() {
        let a = Shared::new(1_u32);
        let b = a.clone();
        b.with_mut(|v| *v = 5);

        assert_eq!(*a.read(), 5);
        assert!(a.ptr_eq(&b));
    }

    #[test]
    fn equal_values_are_not_the_same_handle() {
        let a = Shared::new("x".to_string());
        let b = Shared::new("x".to_string());

        assert_eq!(a.snapshot(), b.snapshot());
        assert!(!a.ptr_eq(&b));
    }
}
