pub mod course;
pub mod entity;
pub mod student;
pub mod trainer;

pub use crate::domain::DomainError;
pub use course::Course;
pub use entity::Entity;
pub use student::Student;
pub use trainer::Trainer;
