//! Presentation layer: the stable boundary callers talk to.

pub mod controller;

pub use controller::{Controller, CourseController, StudentController, TrainerController};
