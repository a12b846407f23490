//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two entities with the same identifier denote the same thing, even when
/// their other attributes differ (e.g. a product before and after a price
/// change).
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Whether `other` refers to the same entity.
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
