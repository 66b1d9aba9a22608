use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::Entity,
    value_objects::{CourseId, EntityKind, TrainerId},
};

/// A course taught by a trainer.
///
/// `trainer_id` is a soft reference: nothing checks that the trainer exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub course_id: CourseId,
    pub title: String,
    pub trainer_id: TrainerId,
}

impl Course {
    pub fn new(course_id: u32, title: impl Into<String>, trainer_id: u32) -> Self {
        Self {
            course_id: CourseId(course_id),
            title: title.into(),
            trainer_id: TrainerId(trainer_id),
        }
    }
}

impl Entity for Course {
    type Key = CourseId;
    const KIND: EntityKind = EntityKind::Course;

    fn key(&self) -> CourseId {
        self.course_id
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Title: {} | Trainer ID: {}",
            self.course_id, self.title, self.trainer_id
        )
    }
}
