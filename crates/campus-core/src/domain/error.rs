// ============================================================================
// domain/error.rs - BUSINESS RULE VIOLATIONS
// ============================================================================

use thiserror::Error;

use super::value_objects::EntityKind;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they cross layer boundaries by value)
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Conflict Errors (409-level equivalent)
    // ========================================================================
    #[error("{kind} with id {key} already exists")]
    DuplicateKey { kind: EntityKind, key: String },

    // ========================================================================
    // Validation Errors (400-level equivalent)
    // ========================================================================
    #[error("Unknown entity kind: {0}")]
    UnknownEntityKind(String),

    #[error("Invalid setting: {0}")]
    InvalidSetting(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DuplicateKey { kind, key } => vec![
                format!("A {kind} with id {key} is already stored"),
                format!("Pick an unused {kind} id, or remove the existing {kind} first"),
            ],
            Self::UnknownEntityKind(kind) => vec![
                format!("'{kind}' is not an entity kind"),
                "Use one of: student, course, trainer".into(),
            ],
            Self::InvalidSetting(_) => vec!["Check the [rules] section of your config".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DuplicateKey { .. } => ErrorCategory::Conflict,
            Self::UnknownEntityKind(_) | Self::InvalidSetting(_) => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
}
