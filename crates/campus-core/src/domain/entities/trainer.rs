use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{
    entities::Entity,
    value_objects::{EntityKind, TrainerId},
};

/// A trainer and their area of expertise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trainer {
    pub trainer_id: TrainerId,
    pub name: String,
    pub expertise: String,
}

impl Trainer {
    pub fn new(trainer_id: u32, name: impl Into<String>, expertise: impl Into<String>) -> Self {
        Self {
            trainer_id: TrainerId(trainer_id),
            name: name.into(),
            expertise: expertise.into(),
        }
    }
}

impl Entity for Trainer {
    type Key = TrainerId;
    const KIND: EntityKind = EntityKind::Trainer;

    fn key(&self) -> TrainerId {
        self.trainer_id
    }
}

impl fmt::Display for Trainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Name: {} | Expertise: {}",
            self.trainer_id, self.name, self.expertise
        )
    }
}
