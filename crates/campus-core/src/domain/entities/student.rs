use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::Entity,
    value_objects::{EntityKind, StudentId},
};

/// A student enrolled on the campus.
///
/// Identity is `student_id`; `name` and `email` are free attributes with no
/// validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub student_id: StudentId,
    pub name: String,
    pub email: String,
}

impl Student {
    pub fn new(student_id: u32, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            student_id: StudentId(student_id),
            name: name.into(),
            email: email.into(),
        }
    }
}

impl Entity for Student {
    type Key = StudentId;
    const KIND: EntityKind = EntityKind::Student;

    fn key(&self) -> StudentId {
        self.student_id
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Name: {} | Email: {}",
            self.student_id, self.name, self.email
        )
    }
}
