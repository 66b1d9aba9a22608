//! Unified error handling for Campus Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Campus Core operations.
///
/// Errors cross Repository -> Service -> Controller unchanged; this enum is
/// the single type every layer returns.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CampusError {
    /// Errors from the domain layer (business rule violations).
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (collection access failures).
    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),
}

impl CampusError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Conflict => ErrorCategory::Conflict,
            },
            Self::Application(e) => e.category(),
        }
    }

    /// `true` for a rejected add (HTTP 409 analogue).
    pub fn is_duplicate_key(&self) -> bool {
        matches!(self, Self::Domain(DomainError::DuplicateKey { .. }))
    }

    /// `true` for a missing entity (HTTP 404 analogue).
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::NotFound { .. }))
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type CampusResult<T> = Result<T, CampusError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EntityKind;

    #[test]
    fn duplicate_key_is_a_conflict() {
        let err: CampusError = DomainError::DuplicateKey {
            kind: EntityKind::Student,
            key: "1".into(),
        }
        .into();

        assert_eq!(err.category(), ErrorCategory::Conflict);
        assert!(err.is_duplicate_key());
        assert!(!err.is_not_found());
        assert_eq!(
            err.to_string(),
            "Domain error: student with id 1 already exists"
        );
    }

    #[test]
    fn not_found_keeps_its_category() {
        let err: CampusError = ApplicationError::NotFound {
            kind: EntityKind::Trainer,
            key: "9".into(),
        }
        .into();

        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.is_not_found());
        assert!(err.suggestions().iter().any(|s| s.contains("trainers")));
    }

    #[test]
    fn store_lock_is_internal() {
        let err: CampusError = ApplicationError::StoreLock {
            kind: EntityKind::Course,
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert!(!err.is_duplicate_key());
        assert!(!err.is_not_found());
    }

    #[test]
    fn unknown_entity_kind_is_a_validation_error() {
        let err = CampusError::from(DomainError::UnknownEntityKind("lecturer".into()));
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.to_string(), "Domain error: Unknown entity kind: lecturer");
    }
}
