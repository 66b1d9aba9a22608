//! Boundary-facing controllers.
//!
//! Presentation code (the CLI today, an HTTP handler tomorrow) calls these.
//! A controller forwards every call to its service unchanged.

use tracing::{debug, instrument};

use crate::{
    application::ports::EntityService,
    domain::{Course, Entity, Student, Trainer},
    error::CampusResult,
};

/// Façade over one entity service.
pub struct Controller<E: Entity> {
    service: Box<dyn EntityService<E>>,
}

pub type StudentController = Controller<Student>;
pub type CourseController = Controller<Course>;
pub type TrainerController = Controller<Trainer>;

impl<E: Entity> Controller<E> {
    pub fn new(service: Box<dyn EntityService<E>>) -> Self {
        Self { service }
    }

    #[instrument(skip_all, fields(kind = E::KIND.as_str()))]
    pub fn add(&self, entity: E) -> CampusResult<()> {
        debug!(layer = "controller", "Request received to add {}", E::KIND);
        self.service.add(entity)
    }

    #[instrument(skip_all, fields(kind = E::KIND.as_str()))]
    pub fn remove(&self, entity: &E) -> CampusResult<()> {
        debug!(layer = "controller", "Request received to remove {}", E::KIND);
        self.service.remove(entity)
    }

    #[instrument(skip_all, fields(kind = E::KIND.as_str()))]
    pub fn update(&self, entity: E) -> CampusResult<E> {
        debug!(layer = "controller", "Request received to update {}", E::KIND);
        self.service.update(entity)
    }

    #[instrument(skip_all, fields(kind = E::KIND.as_str()))]
    pub fn get_all(&self) -> CampusResult<Vec<E>> {
        debug!(layer = "controller", "Request received to list {}", E::KIND.plural());
        self.service.get_all()
    }
}
