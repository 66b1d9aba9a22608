use crate::domain::{entities::Entity, error::DomainError, value_objects::KeyPolicy};

/// Centralized domain validation.
///
/// The only business rule in the system lives here: key uniqueness within a
/// collection. Services call it; repositories never do.
pub struct DomainValidator;

impl DomainValidator {
    /// Check that `candidate` may join `existing` under `policy`.
    pub fn validate_new_key<E: Entity>(
        existing: &[E],
        candidate: &E,
        policy: KeyPolicy,
    ) -> Result<(), DomainError> {
        if !policy.enforces_uniqueness() {
            return Ok(());
        }

        match existing.iter().find(|stored| stored.same_key(candidate)) {
            Some(_) => Err(DomainError::DuplicateKey {
                kind: E::KIND,
                key: candidate.key().to_string(),
            }),
            None => Ok(()),
        }
    }
}
