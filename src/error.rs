//! Application error type and classification helpers
//!
//! Every fallible operation in the crate returns [`Result`], and every
//! storage failure is folded into [`AppError`] so callers can branch on
//! the failure class instead of matching driver internals.

use serde::{Deserialize, Serialize};
use sqlx::error::ErrorKind;
use std::fmt::Display;
use thiserror::Error;

/// Error category for taxonomic classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// A requested row is absent or soft-deleted
    NotFound,
    /// A schema constraint rejected the write
    Constraint,
    /// The store could not be reached or timed out
    Connection,
    /// Any other failure reported by the store
    Database,
    /// Input rejected before touching the store
    Validation,
}

/// Standardized application error type
#[derive(Debug, Error, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFoundError(String),
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("Connection error: {0}")]
    ConnectionError(String),
    #[error("Database error: {0}")]
    DatabaseError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl AppError {
    /// Create a not found error for an entity with the given ID
    pub fn not_found(entity_type: impl Into<String>, entity_id: impl Display) -> Self {
        Self::NotFoundError(format!(
            "{} with ID {} not found",
            entity_type.into(),
            entity_id
        ))
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// Create a database error
    pub fn database(message: impl Into<String>) -> Self {
        Self::DatabaseError(message.into())
    }

    /// Get the category of the error
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::NotFoundError(_) => ErrorCategory::NotFound,
            Self::ConstraintViolation(_) => ErrorCategory::Constraint,
            Self::ConnectionError(_) => ErrorCategory::Connection,
            Self::DatabaseError(_) => ErrorCategory::Database,
            Self::ValidationError(_) => ErrorCategory::Validation,
        }
    }

    /// Whether the error names a missing entity
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFoundError(_))
    }

    /// Whether retrying the operation could succeed
    pub fn is_retriable(&self) -> bool {
        matches!(self, Self::ConnectionError(_))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::RowNotFound => Self::NotFoundError(err.to_string()),
            sqlx::Error::Database(db_err) => match db_err.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => Self::ConstraintViolation(db_err.to_string()),
                _ => Self::DatabaseError(err.to_string()),
            },
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Protocol(_) => Self::ConnectionError(err.to_string()),
            _ => Self::DatabaseError(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        Self::DatabaseError(format!("Migration failed: {}", err))
    }
}

pub type Result<T, E = AppError> = core::result::Result<T, E>;
