//! Outcomes of repository operations other than success.

use inventory_core::error::CoreError;
use inventory_core::types::DbId;

/// PostgreSQL SQLSTATE for `unique_violation`.
pub const UNIQUE_VIOLATION: &str = "23505";

/// Failure modes of [`crate::repositories::EntityRepo`] operations.
///
/// Success is always `Ok(snapshot)`; each variant here is a distinct,
/// caller-recoverable outcome.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// The identifier did not match any row.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A partial update carried no present fields. Raised before any
    /// statement is sent to the database.
    #[error("No fields provided to update {entity}")]
    NoFieldsProvided { entity: &'static str },

    /// The store rejected a write because of a uniqueness constraint.
    #[error("{entity} violates unique constraint {constraint}")]
    ConstraintViolation {
        entity: &'static str,
        constraint: String,
    },

    /// Any other execution failure (connectivity, timeouts, bad SQL, ...).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl RepoError {
    /// Classify a failed INSERT/UPDATE.
    ///
    /// Unique violations become [`RepoError::ConstraintViolation`]; everything
    /// else stays a [`RepoError::Database`].
    pub fn from_write(entity: &'static str, err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
                let constraint = db_err.constraint().unwrap_or("unknown").to_string();
                return RepoError::ConstraintViolation { entity, constraint };
            }
        }
        RepoError::Database(err)
    }
}

/// Domain view of a repository outcome.
///
/// Returns `Err` with the raw sqlx error for [`RepoError::Database`] so the
/// caller can decide how much of it to expose.
impl TryFrom<RepoError> for CoreError {
    type Error = sqlx::Error;

    fn try_from(err: RepoError) -> Result<Self, Self::Error> {
        match err {
            RepoError::NotFound { entity, id } => Ok(CoreError::NotFound { entity, id }),
            RepoError::Database(inner) => Err(inner),
            other @ RepoError::NoFieldsProvided { .. } => {
                Ok(CoreError::Validation(other.to_string()))
            }
            other @ RepoError::ConstraintViolation { .. } => {
                Ok(CoreError::Conflict(other.to_string()))
            }
        }
    }
}
