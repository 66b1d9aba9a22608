//! Infrastructure adapters for Campus.
//!
//! This crate implements the driven ports defined in
//! `campus-core::application::ports` and wires the full layered chain.

pub mod campus;
pub mod repository;
pub mod store;

// Re-export commonly used adapters
pub use campus::{Campus, CampusSettings};
pub use repository::{CourseRepository, InMemoryRepository, StudentRepository, TrainerRepository};
pub use store::InMemoryStore;
