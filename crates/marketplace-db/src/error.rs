//! # Store Error Types
//!
//! Error types for Catalog & Account Store operations.
//!
//! ## Error Flow
//! ```text
//! SQLite Error (sqlx::Error)
//!      │
//!      ▼
//! StoreError (this module) ← adds context and categorization
//!      │
//!      ▼
//! Caller surfaces the message (no retry, no internal recovery)
//! ```
//!
//! Authentication failure (wrong username or password) is a normal negative
//! result, never a `StoreError`.

use thiserror::Error;

/// Store operation errors.
///
/// Wraps sqlx errors and adds context for debugging and user feedback.
/// There is no transient/permanent distinction; every failure is surfaced
/// to the caller as-is.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entity not found where the operation requires one
    /// (e.g. updating a user whose id no longer exists).
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Unique constraint violation (duplicate username).
    #[error("Duplicate {field}: value already exists")]
    UniqueViolation { field: String },

    /// Database connection failed to open.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The store has been closed; reopen before issuing operations.
    #[error("Store connection is closed")]
    ConnectionClosed,

    /// Schema bootstrap (CREATE TABLE IF NOT EXISTS) failed.
    #[error("Schema initialization failed: {0}")]
    SchemaFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Password hashing failed.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and id.
    pub fn not_found(entity: impl Into<String>, id: i64) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }
}

/// Convert sqlx errors to StoreError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::RowNotFound  → StoreError::NotFound
/// sqlx::Error::Database     → analyze message for constraint type
/// sqlx::Error::PoolTimedOut → StoreError::PoolExhausted
/// sqlx::Error::PoolClosed   → StoreError::ConnectionClosed
/// Other                     → StoreError::Internal
/// ```
impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound {
                entity: "Record".to_string(),
                id: "unknown".to_string(),
            },

            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite reports constraint failures in the message:
                // "UNIQUE constraint failed: <table>.<column>"
                if msg.contains("UNIQUE constraint failed") {
                    let field = msg
                        .split("UNIQUE constraint failed: ")
                        .nth(1)
                        .unwrap_or("unknown")
                        .to_string();
                    StoreError::UniqueViolation { field }
                } else {
                    StoreError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => StoreError::PoolExhausted,

            sqlx::Error::PoolClosed => StoreError::ConnectionClosed,

            _ => StoreError::Internal(err.to_string()),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StoreError::not_found("User", 42);
        assert_eq!(err.to_string(), "User not found: 42");

        let err = StoreError::ConnectionClosed;
        assert_eq!(err.to_string(), "Store connection is closed");
    }

    #[test]
    fn test_pool_closed_maps_to_connection_closed() {
        let err: StoreError = sqlx::Error::PoolClosed.into();
        assert!(matches!(err, StoreError::ConnectionClosed));
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err: StoreError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }
}
