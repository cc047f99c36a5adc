//! Entity trait: identity + continuity across the collection.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Identifier that is unique within the owning collection.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
