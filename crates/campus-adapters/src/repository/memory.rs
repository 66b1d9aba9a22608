//! Repository over one collection of the shared in-memory store.

use std::{
    marker::PhantomData,
    sync::{Arc, RwLockReadGuard, RwLockWriteGuard},
};

use tracing::{debug, trace};

use campus_core::{
    application::{ApplicationError, ports::Repository},
    domain::{Course, Entity, Student, Trainer, UpdateMode},
    error::CampusResult,
};

use crate::store::{Collection, InMemoryStore};

/// Thread-safe repository translating CRUD calls into collection mutations.
///
/// Invariant-agnostic: `add` appends even when the key is already stored.
pub struct InMemoryRepository<E: Entity> {
    store: Arc<InMemoryStore>,
    update_mode: UpdateMode,
    _entity: PhantomData<fn() -> E>,
}

pub type StudentRepository = InMemoryRepository<Student>;
pub type CourseRepository = InMemoryRepository<Course>;
pub type TrainerRepository = InMemoryRepository<Trainer>;

impl<E> InMemoryRepository<E>
where
    E: Entity,
    InMemoryStore: Collection<E>,
{
    /// Create a repository with the pass-through `update` contract.
    pub fn new(store: Arc<InMemoryStore>) -> Self {
        Self::with_update_mode(store, UpdateMode::default())
    }

    /// Create a repository with an explicit `update` contract.
    pub fn with_update_mode(store: Arc<InMemoryStore>, update_mode: UpdateMode) -> Self {
        Self {
            store,
            update_mode,
            _entity: PhantomData,
        }
    }

    pub fn update_mode(&self) -> UpdateMode {
        self.update_mode
    }

    fn read(&self) -> CampusResult<RwLockReadGuard<'_, Vec<E>>> {
        Collection::<E>::collection(self.store.as_ref())
            .read()
            .map_err(|_| ApplicationError::StoreLock { kind: E::KIND }.into())
    }

    fn write(&self) -> CampusResult<RwLockWriteGuard<'_, Vec<E>>> {
        Collection::<E>::collection(self.store.as_ref())
            .write()
            .map_err(|_| ApplicationError::StoreLock { kind: E::KIND }.into())
    }

    fn not_found(entity: &E) -> ApplicationError {
        ApplicationError::NotFound {
            kind: E::KIND,
            key: entity.key().to_string(),
        }
    }
}

impl<E> Repository<E> for InMemoryRepository<E>
where
    E: Entity,
    InMemoryStore: Collection<E>,
{
    fn add(&self, entity: E) -> CampusResult<()> {
        debug!(layer = "repository", key = %entity.key(), "Adding {} to store", E::KIND);
        self.write()?.push(entity);
        Ok(())
    }

    fn remove(&self, entity: &E) -> CampusResult<()> {
        debug!(layer = "repository", key = %entity.key(), "Removing {} from store", E::KIND);
        let mut rows = self.write()?;

        let index = rows
            .iter()
            .position(|row| row == entity)
            .ok_or_else(|| Self::not_found(entity))?;

        // `Vec::remove` shifts the tail left, keeping the remaining order.
        rows.remove(index);
        Ok(())
    }

    fn update(&self, entity: E) -> CampusResult<E> {
        match self.update_mode {
            UpdateMode::Passthrough => {
                debug!(
                    layer = "repository",
                    key = %entity.key(),
                    "Updating {} in store (pass-through)",
                    E::KIND
                );
                Ok(entity)
            }
            UpdateMode::Replace => {
                debug!(layer = "repository", key = %entity.key(), "Replacing {} in store", E::KIND);
                let mut rows = self.write()?;

                let slot = rows
                    .iter_mut()
                    .find(|row| row.same_key(&entity))
                    .ok_or_else(|| Self::not_found(&entity))?;

                *slot = entity.clone();
                Ok(entity)
            }
        }
    }

    fn get_all(&self) -> CampusResult<Vec<E>> {
        let rows = self.read()?;
        trace!(layer = "repository", count = rows.len(), "Fetching all {}", E::KIND.plural());
        Ok(rows.clone())
    }
}

#[cfg(test)]
mod tests {
    use campus_core::{domain::EntityKind, error::CampusError};

    use super::*;

    fn student(id: u32, name: &str) -> Student {
        Student::new(id, name, format!("{}@example.com", name.to_lowercase()))
    }

    fn names(repo: &StudentRepository) -> Vec<String> {
        repo.get_all()
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect()
    }

    #[test]
    fn add_appends_in_order() {
        let repo = StudentRepository::new(InMemoryStore::shared());
        repo.add(student(1, "Rashed")).unwrap();
        repo.add(student(2, "Shuvo")).unwrap();
        repo.add(student(3, "Mitu")).unwrap();

        assert_eq!(names(&repo), ["Rashed", "Shuvo", "Mitu"]);
    }

    #[test]
    fn repository_accepts_duplicate_keys() {
        let repo = StudentRepository::new(InMemoryStore::shared());
        repo.add(student(1, "Rashed")).unwrap();
        repo.add(student(1, "DuplicateRashed")).unwrap();

        assert_eq!(repo.get_all().unwrap().len(), 2);
    }

    #[test]
    fn remove_deletes_one_match_without_reordering() {
        let repo = StudentRepository::new(InMemoryStore::shared());
        for (id, name) in [(1, "Rashed"), (2, "Shuvo"), (3, "Mitu"), (4, "Tania")] {
            repo.add(student(id, name)).unwrap();
        }

        repo.remove(&student(2, "Shuvo")).unwrap();

        assert_eq!(names(&repo), ["Rashed", "Mitu", "Tania"]);
    }

    #[test]
    fn remove_takes_only_the_first_equal_entry() {
        let repo = StudentRepository::new(InMemoryStore::shared());
        repo.add(student(1, "Rashed")).unwrap();
        repo.add(student(2, "Shuvo")).unwrap();
        repo.add(student(1, "Rashed")).unwrap();

        repo.remove(&student(1, "Rashed")).unwrap();

        assert_eq!(names(&repo), ["Shuvo", "Rashed"]);
    }

    #[test]
    fn remove_matches_on_value_not_just_key() {
        let repo = StudentRepository::new(InMemoryStore::shared());
        repo.add(student(1, "Rashed")).unwrap();

        let err = repo.remove(&student(1, "SomeoneElse")).unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(names(&repo), ["Rashed"]);
    }

    #[test]
    fn remove_absent_leaves_collection_unchanged() {
        let repo = StudentRepository::new(InMemoryStore::shared());
        repo.add(student(1, "Rashed")).unwrap();

        let err = repo.remove(&student(9, "Ghost")).unwrap_err();

        assert_eq!(
            err,
            CampusError::from(ApplicationError::NotFound {
                kind: EntityKind::Student,
                key: "9".into(),
            })
        );
        assert_eq!(names(&repo), ["Rashed"]);
    }

    #[test]
    fn passthrough_update_returns_entity_and_leaves_store_alone() {
        let repo = StudentRepository::new(InMemoryStore::shared());
        repo.add(student(1, "Rashed")).unwrap();

        let renamed = student(1, "Rashed Khan");
        assert_eq!(repo.update(renamed.clone()).unwrap(), renamed);
        assert_eq!(names(&repo), ["Rashed"]);

        // Pass-through does not even require the key to exist.
        let ghost = student(9, "Ghost");
        assert_eq!(repo.update(ghost.clone()).unwrap(), ghost);
    }

    #[test]
    fn replace_update_swaps_in_place() {
        let repo = StudentRepository::with_update_mode(InMemoryStore::shared(), UpdateMode::Replace);
        repo.add(student(1, "Rashed")).unwrap();
        repo.add(student(2, "Shuvo")).unwrap();

        repo.update(student(1, "Rashed Khan")).unwrap();

        assert_eq!(names(&repo), ["Rashed Khan", "Shuvo"]);
    }

    #[test]
    fn replace_update_of_unknown_key_is_not_found() {
        let repo = TrainerRepository::with_update_mode(InMemoryStore::shared(), UpdateMode::Replace);
        repo.add(Trainer::new(1, "Mondol", "Python")).unwrap();

        let err = repo.update(Trainer::new(5, "Ali", "Data Science")).unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(repo.get_all().unwrap(), [Trainer::new(1, "Mondol", "Python")]);
    }

    #[test]
    fn get_all_returns_a_copy() {
        let repo = CourseRepository::new(InMemoryStore::shared());
        repo.add(Course::new(1, "Python Basics", 1)).unwrap();

        let mut snapshot = repo.get_all().unwrap();
        snapshot.clear();

        assert_eq!(repo.get_all().unwrap().len(), 1);
    }

    #[test]
    fn repositories_share_one_store() {
        let store = InMemoryStore::shared();
        let writer = CourseRepository::new(store.clone());
        let reader = CourseRepository::new(store);

        writer.add(Course::new(1, "Python Basics", 1)).unwrap();

        assert_eq!(reader.get_all().unwrap().len(), 1);
    }
}
