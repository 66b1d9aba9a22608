//! The in-memory store: three ordered collections, nothing else.

use std::sync::{Arc, PoisonError, RwLock};

use campus_core::domain::{Course, Entity, Student, Trainer};

/// Process-lifetime container for every entity collection.
///
/// Each collection has its own lock, so work on students never waits on
/// trainers. Insertion order is preserved and observable.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    students: RwLock<Vec<Student>>,
    courses: RwLock<Vec<Course>>,
    trainers: RwLock<Vec<Trainer>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store ready to be shared between repositories.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Number of stored entities of kind `E`, duplicates included.
    ///
    /// Reads through a poisoned lock: a count never needs the data to be
    /// consistent with an interrupted writer.
    pub fn len<E: Entity>(&self) -> usize
    where
        Self: Collection<E>,
    {
        Collection::<E>::collection(self)
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// `true` when no entity of kind `E` is stored.
    pub fn is_empty<E: Entity>(&self) -> bool
    where
        Self: Collection<E>,
    {
        self.len::<E>() == 0
    }
}

/// Hands a repository the raw collection for its entity kind.
///
/// Repositories work on the sequence directly; the store itself has no
/// behaviour.
pub trait Collection<E: Entity>: Send + Sync {
    fn collection(&self) -> &RwLock<Vec<E>>;
}

impl Collection<Student> for InMemoryStore {
    fn collection(&self) -> &RwLock<Vec<Student>> {
        &self.students
    }
}

impl Collection<Course> for InMemoryStore {
    fn collection(&self) -> &RwLock<Vec<Course>> {
        &self.courses
    }
}

impl Collection<Trainer> for InMemoryStore {
    fn collection(&self) -> &RwLock<Vec<Trainer>> {
        &self.trainers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_store_is_empty() {
        let store = InMemoryStore::new();

        assert!(store.is_empty::<Student>());
        assert!(store.is_empty::<Course>());
        assert!(store.is_empty::<Trainer>());
    }

    #[test]
    fn collections_are_independent() {
        let store = InMemoryStore::new();

        Collection::<Student>::collection(&store)
            .write()
            .unwrap()
            .push(Student::new(1, "Rashed", "rashed@example.com"));

        assert_eq!(store.len::<Student>(), 1);
        assert!(store.is_empty::<Course>());
        assert!(store.is_empty::<Trainer>());
    }

    #[test]
    fn len_counts_duplicates() {
        let store = InMemoryStore::new();
        {
            let mut trainers = Collection::<Trainer>::collection(&store).write().unwrap();
            trainers.push(Trainer::new(1, "Mondol", "Python"));
            trainers.push(Trainer::new(1, "Mondol", "Python"));
        }

        assert_eq!(store.len::<Trainer>(), 2);
        assert!(!store.is_empty::<Trainer>());
    }

    #[test]
    fn len_reads_through_a_poisoned_lock() {
        let store = Arc::new(InMemoryStore::new());
        let writer = Arc::clone(&store);
        let _ = std::thread::spawn(move || {
            let mut courses = Collection::<Course>::collection(&*writer).write().unwrap();
            courses.push(Course::new(1, "Python Basics", 1));
            panic!("writer interrupted");
        })
        .join();

        assert!(Collection::<Course>::collection(&*store).is_poisoned());
        assert_eq!(store.len::<Course>(), 1);
    }
}
