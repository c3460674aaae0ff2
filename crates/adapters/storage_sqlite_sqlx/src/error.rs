//! Storage-specific error type wrapping sqlx errors.

use pothub_domain::error::{ConflictError, PotHubError};

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Failed to run migrations.
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for PotHubError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}

/// Map a failed insert, reporting a primary-key collision as a conflict.
pub(crate) fn insert_error(err: sqlx::Error, entity: &'static str, id: &str) -> PotHubError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => ConflictError {
            entity,
            id: id.to_string(),
        }
        .into(),
        _ => StorageError::from(err).into(),
    }
}
