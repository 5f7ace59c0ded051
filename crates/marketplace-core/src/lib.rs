//! # marketplace-core: Pure Domain Logic for the Marketplace
//!
//! This crate contains the domain model of the storefront as pure types and
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                  Marketplace Architecture                    │
//! │                                                              │
//! │  Presentation layer (out of scope)                           │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  ★ marketplace-core (THIS CRATE) ★                           │
//! │                                                              │
//! │   ┌─────────┐  ┌─────────┐  ┌────────────┐  ┌────────────┐  │
//! │   │  types  │  │  cart   │  │ validation │  │   error    │  │
//! │   │ Product │  │  Cart   │  │   rules    │  │ CoreError  │  │
//! │   │  User   │  │CartItem │  │   checks   │  │ Validation │  │
//! │   └─────────┘  └─────────┘  └────────────┘  └────────────┘  │
//! │                                                              │
//! │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS         │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  marketplace-db (SQLite store, password hashing)             │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, User, Role)
//! - [`cart`] - In-memory shopping cart (never persisted)
//! - [`error`] - Domain error types
//! - [`validation`] - Caller-side input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: every function is deterministic
//! 2. **No I/O**: database and file system access is FORBIDDEN here
//! 3. **Explicit Errors**: all errors are typed, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartItem};
pub use error::{CoreError, CoreResult, ValidationError};
pub use types::{NewProduct, NewUser, Product, Role, User};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum items allowed in a single cart.
///
/// Prevents runaway carts; the presentation layer surfaces the rejection.
pub const MAX_CART_ITEMS: usize = 100;

/// Maximum quantity of a single item in the cart.
///
/// Guards against fat-finger quantities (1000 instead of 10).
pub const MAX_ITEM_QUANTITY: i64 = 999;
