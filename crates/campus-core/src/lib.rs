//! Campus Core - Onion Architecture Implementation
//!
//! This crate provides the domain, application and presentation rings of a
//! layered CRUD mediator over three entity kinds: students, courses and
//! trainers.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           campus-cli (CLI)              │
//! │        (Composition root, I/O)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Presentation (Controller<E>)       │
//! │          Pure delegation façade         │
//! └──────────────────┬──────────────────────┘
//!                    │ EntityService<E>
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application (CrudService<E>)     │
//! │     Owns the key uniqueness invariant   │
//! └──────────────────┬──────────────────────┘
//!                    │ Repository<E>
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    campus-adapters (InMemoryRepository) │
//! │          over InMemoryStore             │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use campus_core::prelude::*;
//!
//! # fn wire(repository: Box<dyn Repository<Student>>) -> CampusResult<()> {
//! let service = StudentService::new(repository);
//! let controller = StudentController::new(Box::new(service));
//!
//! controller.add(Student::new(1, "Rashed", "rashed@example.com"))?;
//! let duplicate = controller.add(Student::new(1, "DuplicateRashed", "duplicate@example.com"));
//! assert!(duplicate.unwrap_err().is_duplicate_key());
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod presentation;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CourseService, CrudService, StudentService, TrainerService,
        ports::{EntityService, Repository},
    };
    pub use crate::domain::{
        Course, CourseId, Entity, EntityKind, KeyPolicy, Student, StudentId, Trainer, TrainerId,
        UpdateMode,
    };
    pub use crate::error::{CampusError, CampusResult};
    pub use crate::presentation::{
        Controller, CourseController, StudentController, TrainerController,
    };
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
