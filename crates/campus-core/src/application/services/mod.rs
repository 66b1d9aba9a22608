//! Application services - own the business rules.
//!
//! One generic service serves all three entity kinds; the aliases name the
//! concrete instantiations.

pub mod crud_service;

pub use crud_service::{CourseService, CrudService, StudentService, TrainerService};
