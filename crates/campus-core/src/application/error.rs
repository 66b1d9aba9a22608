//! Application layer errors.
//!
//! These errors represent failures reaching or mutating a collection, not
//! business rule violations. Rule violations are `DomainError` from
//! `crate::domain`.

use thiserror::Error;

use crate::domain::EntityKind;
use crate::error::ErrorCategory;

/// Errors that occur between the services and the store.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The entity to remove or replace is not in its collection.
    #[error("{kind} with id {key} not found")]
    NotFound { kind: EntityKind, key: String },

    /// Store access failed (lock poisoned).
    #[error("{kind} collection is unavailable")]
    StoreLock { kind: EntityKind },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::NotFound { kind, key } => vec![
                format!("No stored {kind} matches id {key}"),
                format!("List the {} to see what is stored", kind.plural()),
            ],
            Self::StoreLock { .. } => vec![
                "A previous operation panicked while holding the collection".into(),
                "Restart the process to get a fresh store".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::StoreLock { .. } => ErrorCategory::Internal,
        }
    }
}
