//! # Validation Module
//!
//! Caller-side input validation. The store itself does not validate; the
//! layer driving it is expected to run these checks before issuing an
//! operation (the database still backstops with NOT NULL / UNIQUE
//! constraints).
//!
//! ## Usage
//! ```rust
//! use marketplace_core::validation::{validate_price, validate_product_name};
//!
//! validate_product_name("Phone").unwrap();
//! validate_price(300.0).unwrap();
//! assert!(validate_price(0.0).is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Maximum length for a product name.
pub const MAX_NAME_LEN: usize = 200;

/// Maximum length for a username.
pub const MAX_USERNAME_LEN: usize = 50;

// =============================================================================
// Product Validators
// =============================================================================

/// Validates a product name: non-empty, at most [`MAX_NAME_LEN`] characters.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }
    Ok(())
}

/// Validates a price: finite and strictly positive.
pub fn validate_price(price: f64) -> ValidationResult<()> {
    if !price.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: "must be a finite number".to_string(),
        });
    }
    if price <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }
    Ok(())
}

/// Validates a seller name: non-empty.
pub fn validate_seller(seller: &str) -> ValidationResult<()> {
    if seller.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "seller".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Account Validators
// =============================================================================

/// Validates a username: non-empty, at most [`MAX_USERNAME_LEN`] characters.
pub fn validate_username(username: &str) -> ValidationResult<()> {
    let username = username.trim();

    if username.is_empty() {
        return Err(ValidationError::Required {
            field: "username".to_string(),
        });
    }
    if username.chars().count() > MAX_USERNAME_LEN {
        return Err(ValidationError::TooLong {
            field: "username".to_string(),
            max: MAX_USERNAME_LEN,
        });
    }
    Ok(())
}

/// Validates an email address: non-empty and shaped like `local@domain`.
///
/// Deliberately shallow; deliverability is not this layer's concern.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");
    if local.is_empty() || domain.is_empty() {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "expected local@domain".to_string(),
        });
    }
    Ok(())
}

/// Validates a password: non-empty.
pub fn validate_password(password: &str) -> ValidationResult<()> {
    if password.is_empty() {
        return Err(ValidationError::Required {
            field: "password".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_name() {
        assert!(validate_product_name("Phone").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"x".repeat(MAX_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_price_must_be_strictly_positive() {
        assert!(validate_price(300.0).is_ok());
        assert!(validate_price(0.01).is_ok());
        assert!(validate_price(0.0).is_err());
        assert!(validate_price(-1.0).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
    }

    #[test]
    fn test_seller() {
        assert!(validate_seller("PhoneStore").is_ok());
        assert!(validate_seller(" ").is_err());
    }

    #[test]
    fn test_username() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("").is_err());
        assert!(validate_username(&"x".repeat(MAX_USERNAME_LEN + 1)).is_err());
    }

    #[test]
    fn test_email() {
        assert!(validate_email("alice@example.com").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("alice@").is_err());
    }

    #[test]
    fn test_password() {
        assert!(validate_password("secret").is_ok());
        assert!(validate_password("").is_err());
    }
}
