//! Driving (input) ports - implemented by the application services.
//!
//! Controllers depend on this trait, never on `CrudService` directly, so the
//! business layer can be swapped without touching the boundary.

use crate::domain::Entity;
use crate::error::CampusResult;

/// Use-case contract for one entity kind.
pub trait EntityService<E: Entity>: Send + Sync {
    /// Add an entity, enforcing the service's key policy.
    fn add(&self, entity: E) -> CampusResult<()>;

    /// Remove an entity.
    fn remove(&self, entity: &E) -> CampusResult<()>;

    /// Update an entity.
    fn update(&self, entity: E) -> CampusResult<E>;

    /// List every stored entity in insertion order.
    fn get_all(&self) -> CampusResult<Vec<E>>;
}
