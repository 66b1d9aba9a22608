//! Composition root for the layered chain.
//!
//! Builds one shared store and, for each entity kind, the
//! Repository -> Service -> Controller stack on top of it.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use campus_core::{
    application::CrudService,
    domain::{Entity, EntityKind, KeyPolicy, UpdateMode},
    presentation::{Controller, CourseController, StudentController, TrainerController},
};

use crate::{
    repository::InMemoryRepository,
    store::{Collection, InMemoryStore},
};

/// How the chain is wired: key policy per kind plus the repository
/// `update` contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampusSettings {
    pub students: KeyPolicy,
    pub courses: KeyPolicy,
    pub trainers: KeyPolicy,
    pub update_mode: UpdateMode,
}

impl Default for CampusSettings {
    fn default() -> Self {
        Self {
            students: KeyPolicy::Unique,
            courses: KeyPolicy::Unique,
            trainers: KeyPolicy::Unique,
            update_mode: UpdateMode::Passthrough,
        }
    }
}

impl CampusSettings {
    /// Uniqueness for students only; courses and trainers accept repeats.
    pub fn students_only() -> Self {
        Self {
            courses: KeyPolicy::Permissive,
            trainers: KeyPolicy::Permissive,
            ..Self::default()
        }
    }

    /// Enforce uniqueness exactly for the listed kinds.
    pub fn unique_for(kinds: &[EntityKind], update_mode: UpdateMode) -> Self {
        let policy = |kind| {
            if kinds.contains(&kind) {
                KeyPolicy::Unique
            } else {
                KeyPolicy::Permissive
            }
        };

        Self {
            students: policy(EntityKind::Student),
            courses: policy(EntityKind::Course),
            trainers: policy(EntityKind::Trainer),
            update_mode,
        }
    }

    pub fn policy_for(&self, kind: EntityKind) -> KeyPolicy {
        match kind {
            EntityKind::Student => self.students,
            EntityKind::Course => self.courses,
            EntityKind::Trainer => self.trainers,
        }
    }
}

/// The three controllers over one shared in-memory store.
///
/// Owns the only service per collection, which is what keeps concurrent
/// adds of one key from both succeeding. Share a `Campus` (for example
/// behind an `Arc`) instead of wiring a second chain over the same store.
pub struct Campus {
    settings: CampusSettings,
    students: StudentController,
    courses: CourseController,
    trainers: TrainerController,
}

impl Campus {
    /// Wire a fresh in-memory campus.
    pub fn in_memory(settings: CampusSettings) -> Self {
        let store = InMemoryStore::shared();
        info!(
            students = %settings.students,
            courses = %settings.courses,
            trainers = %settings.trainers,
            update_mode = %settings.update_mode,
            "Wiring in-memory campus"
        );

        Self {
            settings,
            students: wire(&store, &settings),
            courses: wire(&store, &settings),
            trainers: wire(&store, &settings),
        }
    }

    pub fn settings(&self) -> &CampusSettings {
        &self.settings
    }

    pub fn students(&self) -> &StudentController {
        &self.students
    }

    pub fn courses(&self) -> &CourseController {
        &self.courses
    }

    pub fn trainers(&self) -> &TrainerController {
        &self.trainers
    }
}

impl Default for Campus {
    fn default() -> Self {
        Self::in_memory(CampusSettings::default())
    }
}

fn wire<E>(store: &Arc<InMemoryStore>, settings: &CampusSettings) -> Controller<E>
where
    E: Entity,
    InMemoryStore: Collection<E>,
{
    let policy = settings.policy_for(E::KIND);
    debug!(kind = %E::KIND, %policy, "Wiring controller");

    let repository = InMemoryRepository::<E>::with_update_mode(store.clone(), settings.update_mode);
    let service = CrudService::with_policy(Box::new(repository), policy);
    Controller::new(Box::new(service))
}
