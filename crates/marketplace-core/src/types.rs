//! # Domain Types
//!
//! Core domain types used throughout the marketplace.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐
//! │    Product      │   │      User       │   │      Role       │
//! │  ─────────────  │   │  ─────────────  │   │  ─────────────  │
//! │  id (i64)       │   │  id (i64)       │   │  Admin          │
//! │  name           │   │  username       │   │  User           │
//! │  price (f64)    │   │  email          │   │                 │
//! │  seller         │   │  role           │   │  stored as TEXT │
//! │  image (BLOB)   │   │                 │   │  "Admin"/"User" │
//! └─────────────────┘   └─────────────────┘   └─────────────────┘
//! ```
//!
//! Ids are assigned by the store at insert time (SQLite AUTOINCREMENT) and
//! never reused within a live database file. The `New*` companion types
//! describe a record before it has an id; the store returns the persisted
//! record with the generated id filled in.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Role
// =============================================================================

/// An account role.
///
/// Stored in the database as the exact strings `"Admin"` and `"User"`.
/// Admin privilege is the string comparison `role == "Admin"`, case
/// sensitive; there is no separate permissions table or capability model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// May add and remove catalog products.
    Admin,
    /// Regular shopper.
    User,
}

impl Role {
    /// The exact string persisted for this role.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::User => "User",
        }
    }

    /// Maps a stored role string back to a role.
    ///
    /// Only the exact string `"Admin"` grants admin; every other value
    /// (including `"admin"`) is a regular user. This matches the privilege
    /// check the store performs.
    pub fn from_db_str(s: &str) -> Role {
        if s == "Admin" {
            Role::Admin
        } else {
            Role::User
        }
    }

    /// True iff this role carries catalog-mutation privilege.
    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog.
///
/// Immutable once constructed; `id` is assigned exactly once by the store
/// at insert time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Store-assigned identifier (SQLite AUTOINCREMENT, always >= 1).
    pub id: i64,

    /// Display name.
    pub name: String,

    /// Optional longer description.
    pub description: Option<String>,

    /// Price in currency units. Strictly positive (validated by callers).
    pub price: f64,

    /// Seller display name.
    pub seller: String,

    /// Optional image bytes (stored as a BLOB).
    pub image: Option<Vec<u8>>,
}

impl Product {
    /// Whether the product carries image bytes.
    #[inline]
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}

/// A product that has not been inserted yet (no id).
///
/// Image bytes are supplied up front; there is no post-construction field
/// mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub seller: String,
    pub image: Option<Vec<u8>>,
}

impl NewProduct {
    /// Creates a new product record, image bytes included.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        price: f64,
        seller: impl Into<String>,
        image: Option<Vec<u8>>,
    ) -> Self {
        NewProduct {
            name: name.into(),
            description,
            price,
            seller: seller.into(),
            image,
        }
    }
}

// =============================================================================
// User
// =============================================================================

/// A user account.
///
/// The password hash never leaves the store; this type carries only the
/// public account fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier.
    pub id: i64,

    /// Unique across all accounts (enforced by the store).
    pub username: String,

    pub email: String,

    pub role: Role,
}

impl User {
    /// True iff this account carries catalog-mutation privilege.
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// An account that has not been inserted yet (no id, no credential).
///
/// The plaintext password travels separately and only as far as the store's
/// hashing step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub role: Role,
}

impl NewUser {
    pub fn new(username: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        NewUser {
            username: username.into(),
            email: email.into(),
            role,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip() {
        assert_eq!(Role::from_db_str(Role::Admin.as_str()), Role::Admin);
        assert_eq!(Role::from_db_str(Role::User.as_str()), Role::User);
    }

    #[test]
    fn test_role_is_case_sensitive() {
        // Only the exact string grants admin.
        assert_eq!(Role::from_db_str("admin"), Role::User);
        assert_eq!(Role::from_db_str("ADMIN"), Role::User);
        assert_eq!(Role::from_db_str("Moderator"), Role::User);
        assert_eq!(Role::from_db_str("Admin"), Role::Admin);
    }

    #[test]
    fn test_product_has_image() {
        let with = Product {
            id: 1,
            name: "Phone".into(),
            description: None,
            price: 300.0,
            seller: "PhoneStore".into(),
            image: Some(vec![0xFF, 0xD8]),
        };
        let without = Product {
            image: None,
            ..with.clone()
        };
        assert!(with.has_image());
        assert!(!without.has_image());
    }

    #[test]
    fn test_user_is_admin() {
        let user = User {
            id: 1,
            username: "alice".into(),
            email: "alice@example.com".into(),
            role: Role::Admin,
        };
        assert!(user.is_admin());

        let user = User {
            role: Role::User,
            ..user
        };
        assert!(!user.is_admin());
    }
}
