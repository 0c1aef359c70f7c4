//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Stores look entities up by `id()`; two entities with equal ids are the same
/// record even when their other fields differ.
pub trait Entity {
    /// Identifier type. Unsized ids (e.g. `str`) are allowed.
    type Id: Eq + core::hash::Hash + core::fmt::Debug + ?Sized;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
