//! Generic in-memory entity store.
//!
//! Backs the product and customer repositories. The store owns the id
//! sequence and the ordered collection of entity handles; every
//! scan-and-mutate runs under one guard.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::entity::{Draft, Entity};
use crate::id::EntityId;
use crate::shared::Shared;

#[derive(Debug)]
struct StoreState<E> {
    next_id: EntityId,
    rows: Vec<Shared<E>>,
}

/// In-memory, insertion-ordered entity store.
///
/// Absence is never an error here: lookups return `None` and mutations of
/// unknown ids are no-ops reported through a `bool`.
#[derive(Debug)]
pub struct InMemoryStore<E> {
    inner: RwLock<StoreState<E>>,
}

impl<E> InMemoryStore<E> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreState {
                next_id: EntityId::FIRST,
                rows: Vec::new(),
            }),
        }
    }

    fn state(&self) -> RwLockReadGuard<'_, StoreState<E>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn state_mut(&self) -> RwLockWriteGuard<'_, StoreState<E>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of stored entities, active or not.
    pub fn len(&self) -> usize {
        self.state().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state().rows.is_empty()
    }
}

impl<E> Default for InMemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> InMemoryStore<E> {
    /// Assign the next identifier to `draft`, append it and return its handle.
    pub fn save<D>(&self, draft: D) -> Shared<E>
    where
        D: Draft<Entity = E>,
    {
        let mut state = self.state_mut();
        let id = state.next_id;
        state.next_id = id.next();

        let handle = Shared::new(draft.into_entity(E::Id::from(id)));
        state.rows.push(handle.clone());
        tracing::trace!(%id, "entity stored");
        handle
    }

    /// Handles of every stored entity, in insertion order.
    pub fn find_all(&self) -> Vec<Shared<E>> {
        self.state().rows.clone()
    }

    pub fn find_by_id(&self, id: E::Id) -> Option<Shared<E>> {
        self.state()
            .rows
            .iter()
            .find(|row| row.read().id() == id)
            .cloned()
    }

    /// Mutate the first entity with `id` in place. Returns whether it was found.
    pub fn update_with(&self, id: E::Id, f: impl FnOnce(&mut E)) -> bool {
        let state = self.state_mut();
        match state.rows.iter().find(|row| row.read().id() == id) {
            Some(row) => {
                row.with_mut(f);
                true
            }
            None => false,
        }
    }

    /// Physically remove the first entity with `id`. Returns whether it was found.
    ///
    /// Handles already held elsewhere stay valid; the identifier is not reused.
    pub fn delete_by_id(&self, id: E::Id) -> bool {
        let mut state = self.state_mut();
        match state.rows.iter().position(|row| row.read().id() == id) {
            Some(index) => {
                state.rows.remove(index);
                tracing::trace!(?id, "entity purged");
                true
            }
            None => false,
        }
    }
}
