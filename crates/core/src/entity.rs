//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug + From<crate::EntityId>;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}

/// Not-yet-stored entity: everything but the identifier.
///
/// Stores turn drafts into entities by allocating the next identifier.
pub trait Draft {
    type Entity: Entity;

    fn into_entity(self, id: <Self::Entity as Entity>::Id) -> Self::Entity;
}
