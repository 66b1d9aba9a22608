use std::fmt;
use std::hash::Hash;

use crate::domain::value_objects::EntityKind;

/// Capability shared by every stored domain object.
///
/// The layered chain is written once against this trait and instantiated per
/// entity kind. `key` is the extractor the uniqueness policy compares on;
/// value equality (`PartialEq`) is what `remove` matches on.
pub trait Entity: Clone + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Identifying key type.
    type Key: Copy + Eq + Hash + fmt::Display + fmt::Debug + Send + Sync + 'static;

    /// Which collection this entity lives in.
    const KIND: EntityKind;

    /// Extract the identifying key.
    fn key(&self) -> Self::Key;

    /// `true` if both entities carry the same key, regardless of attributes.
    fn same_key(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}
