//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the services need from storage.
//! The `campus-adapters` crate provides implementations.

use crate::domain::Entity;
use crate::error::CampusResult;

/// Port for CRUD access to one entity collection.
///
/// Implemented by:
/// - `campus_adapters::repository::InMemoryRepository` (shared in-memory store)
///
/// ## Contract
///
/// Repositories are invariant-agnostic: `add` appends even when the key is
/// already present. Uniqueness belongs to the service layer.
pub trait Repository<E: Entity>: Send + Sync {
    /// Append to the collection unconditionally.
    fn add(&self, entity: E) -> CampusResult<()>;

    /// Remove the first value-equal match.
    ///
    /// Fails with `ApplicationError::NotFound` when nothing matches; the
    /// collection is left unchanged.
    fn remove(&self, entity: &E) -> CampusResult<()>;

    /// Update an entity, returning it.
    ///
    /// Whether the stored collection changes depends on the adapter's
    /// `UpdateMode`.
    fn update(&self, entity: E) -> CampusResult<E>;

    /// Copy of the collection, in insertion order.
    fn get_all(&self) -> CampusResult<Vec<E>>;
}
