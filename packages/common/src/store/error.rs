use thiserror::Error;

/// Errors returned by a [`Store`](super::Store).
#[derive(Debug, Error)]
pub enum StoreError {
    /// The record addressed by identity does not exist.
    #[error("{0} not found")]
    NotFound(String),

    /// A uniqueness or required-field constraint was violated.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// The backing database failed.
    #[error("Database error: {0}")]
    Database(String),
}

#[cfg(feature = "sea-orm")]
impl From<sea_orm::DbErr> for StoreError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(detail)) => Self::Validation(detail),
            _ => Self::Database(err.to_string()),
        }
    }
}
