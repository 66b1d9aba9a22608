//! Repository adapters.

mod memory;

pub use memory::{CourseRepository, InMemoryRepository, StudentRepository, TrainerRepository};
