//! CRUD Service - the invariant-owning layer.
//!
//! Wraps one repository and exposes the same four operations. `add` is the
//! only operation with logic of its own:
//! 1. Read the collection through the repository
//! 2. Apply the key policy (`DomainValidator::validate_new_key`)
//! 3. Forward to the repository only if the key is acceptable
//!
//! Steps 1-3 run under a per-service mutex so the check and the append are a
//! single critical section. The mutex belongs to the service, not to the
//! collection: uniqueness under concurrent adds holds only while one
//! service instance fronts each collection.

use std::sync::{Mutex, MutexGuard};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{EntityService, Repository},
    },
    domain::{Course, DomainValidator as validator, Entity, KeyPolicy, Student, Trainer},
    error::CampusResult,
};

/// Business-rule layer for one entity kind.
///
/// Build exactly one per collection. Two services over the same store each
/// hold their own lock and can race a duplicate key past each other.
pub struct CrudService<E: Entity> {
    repository: Box<dyn Repository<E>>,
    policy: KeyPolicy,
    write_lock: Mutex<()>,
}

pub type StudentService = CrudService<Student>;
pub type CourseService = CrudService<Course>;
pub type TrainerService = CrudService<Trainer>;

impl<E: Entity> CrudService<E> {
    /// Create a service that rejects duplicate keys.
    pub fn new(repository: Box<dyn Repository<E>>) -> Self {
        Self::with_policy(repository, KeyPolicy::default())
    }

    /// Create a service with an explicit key policy.
    pub fn with_policy(repository: Box<dyn Repository<E>>, policy: KeyPolicy) -> Self {
        Self {
            repository,
            policy,
            write_lock: Mutex::new(()),
        }
    }

    /// The key policy this service enforces.
    pub fn policy(&self) -> KeyPolicy {
        self.policy
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Enter the mutation critical section for this collection.
    fn exclusive(&self) -> CampusResult<MutexGuard<'_, ()>> {
        self.write_lock
            .lock()
            .map_err(|_| ApplicationError::StoreLock { kind: E::KIND }.into())
    }
}

impl<E: Entity> EntityService<E> for CrudService<E> {
    #[instrument(skip_all, fields(kind = E::KIND.as_str(), key = %entity.key()))]
    fn add(&self, entity: E) -> CampusResult<()> {
        debug!(layer = "service", policy = %self.policy, "Checking if {} can be added", E::KIND);

        let _guard = self.exclusive()?;

        if self.policy.enforces_uniqueness() {
            let existing = self.repository.get_all()?;
            if let Err(e) = validator::validate_new_key(&existing, &entity, self.policy) {
                warn!(layer = "service", "{} id already exists, add rejected", E::KIND);
                return Err(e.into());
            }
        }

        self.repository.add(entity)?;
        info!(layer = "service", "{} added successfully", E::KIND);
        Ok(())
    }

    #[instrument(skip_all, fields(kind = E::KIND.as_str(), key = %entity.key()))]
    fn remove(&self, entity: &E) -> CampusResult<()> {
        debug!(layer = "service", "Removing {}", E::KIND);
        let _guard = self.exclusive()?;
        self.repository.remove(entity)
    }

    #[instrument(skip_all, fields(kind = E::KIND.as_str(), key = %entity.key()))]
    fn update(&self, entity: E) -> CampusResult<E> {
        debug!(layer = "service", "Updating {}", E::KIND);
        let _guard = self.exclusive()?;
        self.repository.update(entity)
    }

    #[instrument(skip_all, fields(kind = E::KIND.as_str()))]
    fn get_all(&self) -> CampusResult<Vec<E>> {
        debug!(layer = "service", "Retrieving all {}", E::KIND.plural());
        self.repository.get_all()
    }
}
