//! Unified error type for the data-access and service layers.

use std::fmt::Debug;
use thiserror::Error;

/// Unified error type for every storage-facing operation.
///
/// Absent rows are never reported through this type by the DAOs: single-row
/// lookups return `Option`, multi-row lookups return an empty `Vec`. What
/// remains are the failures a caller cannot treat as a normal outcome.
#[derive(Error, Debug)]
pub enum SchoolError {
    // ============ Domain Errors ============
    /// Resource not found
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    // ============ Integrity Errors ============
    /// Unique constraint violated (duplicate business key or surrogate id)
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Foreign-key constraint violated (referenced row missing or still referenced)
    #[error("Foreign key violation: {0}")]
    ForeignKey(String),

    /// Any other integrity constraint (not-null, check)
    #[error("Constraint violation: {0}")]
    Constraint(String),

    // ============ Infrastructure Errors ============
    /// Storage cannot be reached
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    // ============ Internal Errors ============
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SchoolError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Conflict(_) => "CONFLICT",
            Self::ForeignKey(_) => "FOREIGN_KEY_VIOLATION",
            Self::Constraint(_) => "CONSTRAINT_VIOLATION",
            Self::Unavailable(_) => "STORAGE_UNAVAILABLE",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates a conflict error.
    #[must_use]
    pub fn conflict<T: Into<String>>(message: T) -> Self {
        Self::Conflict(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Checks if this error was raised by an integrity constraint.
    #[must_use]
    pub const fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            Self::Conflict(_) | Self::ForeignKey(_) | Self::Constraint(_)
        )
    }

    /// Checks if repeating the operation could succeed.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(self, Self::Unavailable(_) | Self::Database(_))
    }
}

#[cfg(feature = "sqlx")]
impl From<sqlx::Error> for SchoolError {
    fn from(err: sqlx::Error) -> Self {
        use sqlx::error::ErrorKind;

        match &err {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource_type: "database_row",
                id: "unknown".to_string(),
            },
            sqlx::Error::Database(db_err) => match db_err.kind() {
                ErrorKind::UniqueViolation => Self::Conflict(db_err.message().to_string()),
                ErrorKind::ForeignKeyViolation => Self::ForeignKey(db_err.message().to_string()),
                ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                    Self::Constraint(db_err.message().to_string())
                }
                _ => Self::Database(err.to_string()),
            },
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => Self::Unavailable(err.to_string()),
            sqlx::Error::Configuration(_) => Self::Configuration(err.to_string()),
            _ => Self::Database(err.to_string()),
        }
    }
}
