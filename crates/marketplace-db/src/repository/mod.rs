//! # Repository Module
//!
//! Repository implementations for the Catalog & Account Store.
//!
//! ## Repository Pattern
//! ```text
//! Caller (presentation layer)
//!      │
//!      │  store.products().search("phone")
//!      ▼
//! ProductRepository / UserRepository
//!      │
//!      │  single parameterized statement, auto-commit
//!      ▼
//! SQLite database
//! ```
//!
//! SQL lives only here; callers see typed results and [`crate::StoreError`].
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - catalog CRUD and substring search
//! - [`user::UserRepository`] - accounts, authentication, admin check

pub mod product;
pub mod user;
