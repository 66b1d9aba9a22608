//! Operation scripts.
//!
//! A script is a JSON array of operations, one per controller method:
//!
//! ```json
//! [
//!   {"op": "add",    "record": {"trainer": {"trainer_id": 1, "name": "Mondol", "expertise": "Python"}}},
//!   {"op": "update", "record": {"course":  {"course_id": 1, "title": "Rust", "trainer_id": 1}}},
//!   {"op": "list",   "entity": "trainer"}
//! ]
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use campus_adapters::Campus;
use campus_core::prelude::*;

/// One entity of any kind, tagged by kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Record {
    Student(Student),
    Course(Course),
    Trainer(Trainer),
}

impl Record {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Student(_) => EntityKind::Student,
            Self::Course(_) => EntityKind::Course,
            Self::Trainer(_) => EntityKind::Trainer,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Student(s) => write!(f, "student {s}"),
            Self::Course(c) => write!(f, "course {c}"),
            Self::Trainer(t) => write!(f, "trainer {t}"),
        }
    }
}

/// A single scripted call on the campus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Operation {
    Add { record: Record },
    Remove { record: Record },
    Update { record: Record },
    List { entity: EntityKind },
}

/// What a successful operation produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Added(Record),
    Removed(Record),
    Updated(Record),
    Listed(Listing),
}

/// A snapshot of one collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    Students(Vec<Student>),
    Courses(Vec<Course>),
    Trainers(Vec<Trainer>),
}

impl Listing {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Students(_) => EntityKind::Student,
            Self::Courses(_) => EntityKind::Course,
            Self::Trainers(_) => EntityKind::Trainer,
        }
    }

    pub fn rows(&self) -> usize {
        match self {
            Self::Students(v) => v.len(),
            Self::Courses(v) => v.len(),
            Self::Trainers(v) => v.len(),
        }
    }
}

impl Operation {
    /// Short verb used in messages and errors.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::Remove { .. } => "remove",
            Self::Update { .. } => "update",
            Self::List { .. } => "list",
        }
    }

    /// The collection this operation touches.
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Add { record } | Self::Remove { record } | Self::Update { record } => {
                record.kind()
            }
            Self::List { entity } => *entity,
        }
    }

    /// Run this operation through the matching controller.
    pub fn apply(&self, campus: &Campus) -> CampusResult<Outcome> {
        match self {
            Self::Add { record } => {
                match record.clone() {
                    Record::Student(s) => campus.students().add(s)?,
                    Record::Course(c) => campus.courses().add(c)?,
                    Record::Trainer(t) => campus.trainers().add(t)?,
                }
                Ok(Outcome::Added(record.clone()))
            }
            Self::Remove { record } => {
                match record {
                    Record::Student(s) => campus.students().remove(s)?,
                    Record::Course(c) => campus.courses().remove(c)?,
                    Record::Trainer(t) => campus.trainers().remove(t)?,
                }
                Ok(Outcome::Removed(record.clone()))
            }
            Self::Update { record } => {
                let updated = match record.clone() {
                    Record::Student(s) => Record::Student(campus.students().update(s)?),
                    Record::Course(c) => Record::Course(campus.courses().update(c)?),
                    Record::Trainer(t) => Record::Trainer(campus.trainers().update(t)?),
                };
                Ok(Outcome::Updated(updated))
            }
            Self::List { entity } => Ok(Outcome::Listed(list(campus, *entity)?)),
        }
    }
}

/// Read one collection through its controller.
pub fn list(campus: &Campus, kind: EntityKind) -> CampusResult<Listing> {
    Ok(match kind {
        EntityKind::Student => Listing::Students(campus.students().get_all()?),
        EntityKind::Course => Listing::Courses(campus.courses().get_all()?),
        EntityKind::Trainer => Listing::Trainers(campus.trainers().get_all()?),
    })
}

/// The sample scenario: two trainers, two courses taught by them, three
/// students where the third reuses the first student's id, then one listing
/// per kind.
pub fn sample() -> Vec<Operation> {
    let add = |record| Operation::Add { record };

    vec![
        add(Record::Trainer(Trainer::new(1, "Mondol", "Python"))),
        add(Record::Trainer(Trainer::new(2, "Ali", "Data Science"))),
        add(Record::Course(Course::new(1, "Python Basics", 1))),
        add(Record::Course(Course::new(2, "Machine Learning", 2))),
        add(Record::Student(Student::new(1, "Rashed", "rashed@example.com"))),
        add(Record::Student(Student::new(2, "Shuvo", "shuvo@example.com"))),
        add(Record::Student(Student::new(
            1,
            "DuplicateRashed",
            "duplicate@example.com",
        ))),
        Operation::List {
            entity: EntityKind::Student,
        },
        Operation::List {
            entity: EntityKind::Trainer,
        },
        Operation::List {
            entity: EntityKind::Course,
        },
    ]
}
