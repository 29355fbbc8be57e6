//! Entity trait: identity key, independent of the entity's contents.

/// Entity marker + minimal interface.
///
/// `id()` is the key callers use to decide whether two values denote the same
/// menu item. It is deliberately separate from any structural comparison the
/// type may also offer.
pub trait Entity {
    /// Identity key type.
    type Id: ?Sized + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the identity key.
    fn id(&self) -> &Self::Id;

    /// True when both entities share the same identity key.
    fn same_identity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}
