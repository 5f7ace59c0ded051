//! # Error Types
//!
//! Domain-specific error types for marketplace-core.
//!
//! ## Error Hierarchy
//! ```text
//! marketplace-core errors (this file)
//! ├── CoreError        - General domain errors (cart limits, wrapped validation)
//! └── ValidationError  - Input validation failures
//!
//! marketplace-db errors (separate crate)
//! └── StoreError       - Database operation failures
//! ```
//!
//! Validation runs in the calling layer before anything touches the store;
//! the store itself only reports `StoreError`.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
///
/// These represent business rule violations. They are caught by the
/// presentation layer and translated to user-facing messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Cart has exceeded the maximum allowed number of distinct items.
    #[error("Cart cannot have more than {max} items")]
    CartTooLarge { max: usize },

    /// Requested quantity exceeds the per-item maximum.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: i64, max: i64 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised when caller-supplied data fails a precondition, before any store
/// operation runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., malformed email).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
