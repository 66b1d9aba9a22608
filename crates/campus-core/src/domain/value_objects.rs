//! Domain value objects: entity keys, `EntityKind`, and the two policy knobs
//! (`KeyPolicy`, `UpdateMode`) that decide how the layered chain behaves.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! Keys are `u32` newtypes so a `CourseId` can never be passed where a
//! `TrainerId` is expected, and they serialise as bare numbers.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Keys ─────────────────────────────────────────────────────────────────────

/// Identifier of a [`Student`](crate::domain::Student).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StudentId(pub u32);

/// Identifier of a [`Course`](crate::domain::Course).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(pub u32);

/// Identifier of a [`Trainer`](crate::domain::Trainer).
///
/// Also used by `Course::trainer_id` as an unchecked soft reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrainerId(pub u32);

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for TrainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── EntityKind ───────────────────────────────────────────────────────────────

/// The three entity collections the store holds.
///
/// Serialises as the lowercase singular name. Deserialisation goes through
/// [`FromStr`], so config files and scripts accept the same spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum EntityKind {
    Student,
    Course,
    Trainer,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [Self::Student, Self::Course, Self::Trainer];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Course => "course",
            Self::Trainer => "trainer",
        }
    }

    /// Plural form used for collection names in listings.
    pub const fn plural(&self) -> &'static str {
        match self {
            Self::Student => "students",
            Self::Course => "courses",
            Self::Trainer => "trainers",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "student" | "students" => Ok(Self::Student),
            "course" | "courses" => Ok(Self::Course),
            "trainer" | "trainers" => Ok(Self::Trainer),
            _ => Err(DomainError::UnknownEntityKind(s.to_string())),
        }
    }
}

impl TryFrom<String> for EntityKind {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ── KeyPolicy ────────────────────────────────────────────────────────────────

/// Whether a service rejects an `add` whose key is already stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyPolicy {
    /// Reject duplicate keys with `DomainError::DuplicateKey`.
    #[default]
    Unique,
    /// Forward every `add` to the repository unchecked.
    Permissive,
}

impl KeyPolicy {
    pub const fn enforces_uniqueness(self) -> bool {
        matches!(self, Self::Unique)
    }
}

impl fmt::Display for KeyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unique => f.write_str("unique"),
            Self::Permissive => f.write_str("permissive"),
        }
    }
}

// ── UpdateMode ───────────────────────────────────────────────────────────────

/// What `Repository::update` does with the entity it receives.
///
/// Parsed case-insensitively; `noop` is accepted as a synonym for
/// `passthrough`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum UpdateMode {
    /// Return the entity unchanged; the stored collection is not touched.
    #[default]
    Passthrough,
    /// Replace the first stored entity with the same key, in place.
    Replace,
}

impl fmt::Display for UpdateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Passthrough => f.write_str("passthrough"),
            Self::Replace => f.write_str("replace"),
        }
    }
}

impl FromStr for UpdateMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "passthrough" | "noop" => Ok(Self::Passthrough),
            "replace" => Ok(Self::Replace),
            _ => Err(DomainError::InvalidSetting(format!("unknown update mode: {s}"))),
        }
    }
}

impl TryFrom<String> for UpdateMode {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
