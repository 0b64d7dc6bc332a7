//! Domain-level error types.

use thiserror::Error;
use uuid::Uuid;

/// Failures the domain itself raises. Conflicts and infrastructure faults
/// enter the taxonomy at the boundary, from [`RepoError`] instead.
#[derive(Debug, Error)]
pub enum DomainError {
    /// One or more input rules violated; carries every violation at once.
    #[error("Invalid input: {}", .0.join(", "))]
    Validation(Vec<String>),

    /// No, invalid, or expired credential.
    #[error("Not authenticated")]
    Unauthenticated,

    /// Valid credential, but the caller is not the resource's owner.
    #[error("Not authorized")]
    Unauthorized,

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: Uuid },
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: Uuid) -> Self {
        Self::NotFound { entity, id }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Entity not found")]
    NotFound,

    #[error("Constraint violation: {0}")]
    Constraint(String),
}
