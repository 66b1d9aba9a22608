//! Application layer for Campus.
//!
//! This layer contains:
//! - **Services**: Use cases per entity kind (`CrudService<E>`)
//! - **Ports**: Interface definitions (traits) for both sides of the services
//! - **Errors**: Application-specific error types
//!
//! The key uniqueness rule itself lives in `crate::domain`; services decide
//! when to apply it.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{CourseService, CrudService, StudentService, TrainerService};

// Re-export port traits (for adapter implementation)
pub use ports::{EntityService, Repository};

pub use error::ApplicationError;
