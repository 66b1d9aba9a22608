//! Core domain layer for Campus.
//!
//! This module contains the entities and the single business rule (key
//! uniqueness) with no I/O. Storage concerns are reached through the
//! `Repository` port defined in the application layer.
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Value entities**: All domain objects are Clone + PartialEq

// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Private implementation details - not visible outside domain
mod validation;

// Re-exports for convenience
pub use entities::{Course, Entity, Student, Trainer};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{CourseId, EntityKind, KeyPolicy, StudentId, TrainerId, UpdateMode};

pub use validation::DomainValidator;

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn entity_kind_parses_singular_and_plural() {
        assert_eq!(EntityKind::from_str("student").unwrap(), EntityKind::Student);
        assert_eq!(EntityKind::from_str("Courses").unwrap(), EntityKind::Course);
        assert_eq!(EntityKind::from_str("TRAINER").unwrap(), EntityKind::Trainer);
        assert!(matches!(
            EntityKind::from_str("lecturer"),
            Err(DomainError::UnknownEntityKind(_))
        ));
    }

    #[test]
    fn entity_kind_display_round_trips_through_from_str() {
        for kind in EntityKind::ALL {
            assert_eq!(EntityKind::from_str(&kind.to_string()).unwrap(), kind);
        }
    }

    #[test]
    fn policies_default_to_unique_and_passthrough() {
        assert_eq!(KeyPolicy::default(), KeyPolicy::Unique);
        assert_eq!(UpdateMode::default(), UpdateMode::Passthrough);
        assert!(KeyPolicy::Unique.enforces_uniqueness());
        assert!(!KeyPolicy::Permissive.enforces_uniqueness());
    }

    #[test]
    fn update_mode_rejects_unknown_values() {
        assert_eq!(UpdateMode::from_str("replace").unwrap(), UpdateMode::Replace);
        assert!(matches!(
            UpdateMode::from_str("merge"),
            Err(DomainError::InvalidSetting(_))
        ));
    }

    #[test]
    fn serde_accepts_the_same_spellings_as_from_str() {
        let kinds: Vec<EntityKind> =
            serde_json::from_str(r#"["Students", "course", "TRAINERS"]"#).unwrap();
        assert_eq!(kinds, EntityKind::ALL);

        let mode: UpdateMode = serde_json::from_str(r#""noop""#).unwrap();
        assert_eq!(mode, UpdateMode::Passthrough);
    }

    #[test]
    fn serde_reports_the_domain_error_for_unknown_values() {
        let err = serde_json::from_str::<EntityKind>(r#""lecturer""#).unwrap_err();
        assert!(err.to_string().contains("Unknown entity kind: lecturer"));

        let err = serde_json::from_str::<UpdateMode>(r#""merge""#).unwrap_err();
        assert!(err.to_string().contains("unknown update mode: merge"));
    }

    #[test]
    fn serialised_names_are_lowercase_singular() {
        assert_eq!(serde_json::to_string(&EntityKind::Course).unwrap(), r#""course""#);
        assert_eq!(serde_json::to_string(&UpdateMode::Passthrough).unwrap(), r#""passthrough""#);
    }

    // ========================================================================
    // Entity Tests
    // ========================================================================

    #[test]
    fn entities_expose_their_keys_and_kinds() {
        let student = Student::new(1, "Rashed", "rashed@example.com");
        let course = Course::new(7, "Python Basics", 1);
        let trainer = Trainer::new(3, "Mondol", "Python");

        assert_eq!(student.key(), StudentId(1));
        assert_eq!(course.key(), CourseId(7));
        assert_eq!(trainer.key(), TrainerId(3));
        assert_eq!(Student::KIND, EntityKind::Student);
        assert_eq!(Course::KIND, EntityKind::Course);
        assert_eq!(Trainer::KIND, EntityKind::Trainer);
    }

    #[test]
    fn same_key_ignores_attributes() {
        let original = Student::new(1, "Rashed", "rashed@example.com");
        let impostor = Student::new(1, "DuplicateRashed", "duplicate@example.com");

        assert!(original.same_key(&impostor));
        assert_ne!(original, impostor);
    }

    #[test]
    fn display_matches_listing_format() {
        let course = Course::new(2, "Machine Learning", 2);
        assert_eq!(
            course.to_string(),
            "ID: 2 | Title: Machine Learning | Trainer ID: 2"
        );
    }

    #[test]
    fn keys_serialise_as_bare_numbers() {
        let trainer = Trainer::new(2, "Ali", "Data Science");
        let json = serde_json::to_value(&trainer).unwrap();
        assert_eq!(json["trainer_id"], 2);

        let back: Trainer = serde_json::from_value(json).unwrap();
        assert_eq!(back, trainer);
    }

    // ========================================================================
    // Validator Tests
    // ========================================================================

    #[test]
    fn validator_rejects_duplicate_key_under_unique_policy() {
        let stored = vec![Student::new(1, "Rashed", "rashed@example.com")];
        let candidate = Student::new(1, "DuplicateRashed", "duplicate@example.com");

        let err = DomainValidator::validate_new_key(&stored, &candidate, KeyPolicy::Unique)
            .unwrap_err();

        assert_eq!(
            err,
            DomainError::DuplicateKey {
                kind: EntityKind::Student,
                key: "1".into()
            }
        );
        assert_eq!(err.category(), ErrorCategory::Conflict);
    }

    #[test]
    fn validator_accepts_fresh_key() {
        let stored = vec![Trainer::new(1, "Mondol", "Python")];
        let candidate = Trainer::new(2, "Ali", "Data Science");

        assert!(DomainValidator::validate_new_key(&stored, &candidate, KeyPolicy::Unique).is_ok());
    }

    #[test]
    fn validator_ignores_duplicates_under_permissive_policy() {
        let stored = vec![Course::new(1, "Python Basics", 1)];
        let candidate = Course::new(1, "Python Basics (again)", 1);

        assert!(
            DomainValidator::validate_new_key(&stored, &candidate, KeyPolicy::Permissive).is_ok()
        );
    }
}
