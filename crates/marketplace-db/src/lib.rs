//! # marketplace-db: Catalog & Account Store
//!
//! SQLite-backed storage for the marketplace. Owns the database connection
//! pool and exposes the product catalog and user account repositories.
//!
//! ## Architecture Position
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     Marketplace Data Flow                    │
//! │                                                              │
//! │  Presentation layer (button handlers, out of scope)          │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  ┌────────────────────────────────────────────────────────┐  │
//! │  │               marketplace-db (THIS CRATE)              │  │
//! │  │                                                        │  │
//! │  │   ┌──────────┐   ┌──────────────┐   ┌──────────────┐   │  │
//! │  │   │  Store   │   │ Repositories │   │    Schema    │   │  │
//! │  │   │(pool.rs) │◄──│ product.rs   │   │ (create-if-  │   │  │
//! │  │   │SqlitePool│   │ user.rs      │   │   missing)   │   │  │
//! │  │   └──────────┘   └──────────────┘   └──────────────┘   │  │
//! │  └────────────────────────────────────────────────────────┘  │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  SQLite database file (marketplace.db)                       │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`schema`] - Idempotent schema bootstrap (no migration system)
//! - [`password`] - Argon2 hashing and verification
//! - [`error`] - Store error types
//! - [`repository`] - Repository implementations (product, user)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use marketplace_db::{Store, StoreConfig};
//!
//! let store = Store::new(StoreConfig::new("marketplace.db")).await?;
//!
//! let product = store.products().insert(&new_product).await?;
//! let account = store.users().authenticate("alice", "secret").await?;
//!
//! store.close().await; // subsequent calls fail with ConnectionClosed
//! ```
//!
//! Every operation is a single auto-committed statement; there are no
//! multi-statement transactions, so compound caller actions are not atomic
//! as a whole.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod password;
pub mod pool;
pub mod repository;
pub mod schema;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use pool::{Store, StoreConfig};

// Repository re-exports for convenience
pub use repository::product::ProductRepository;
pub use repository::user::UserRepository;
