//! # Schema Bootstrap
//!
//! Idempotent table creation for the store. There is deliberately no
//! migration or versioning system: the schema is created if missing and
//! never altered afterwards.
//!
//! ## Tables
//! ```text
//! products(id, name, description, price, seller, image)
//! users(id, username, email, role, password)
//! ```
//!
//! Ids come from SQLite AUTOINCREMENT, so they are assigned exactly once
//! and never reused within a live database file. `users.password` holds the
//! Argon2 PHC hash string, never plaintext.

use sqlx::SqlitePool;
use tracing::info;

use crate::error::{StoreError, StoreResult};

/// Product catalog table.
const CREATE_PRODUCTS: &str = r#"
CREATE TABLE IF NOT EXISTS products (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    description TEXT,
    price       REAL NOT NULL,
    seller      TEXT NOT NULL,
    image       BLOB
)
"#;

/// User account table. `username` is unique across all accounts.
const CREATE_USERS: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    email    TEXT NOT NULL,
    role     TEXT NOT NULL,
    password TEXT NOT NULL
)
"#;

/// Creates the store's tables if they do not exist yet.
///
/// Safe to run on every open; `CREATE TABLE IF NOT EXISTS` is a no-op for
/// an already-initialized file.
pub async fn ensure_schema(pool: &SqlitePool) -> StoreResult<()> {
    info!("Ensuring store schema");

    for ddl in [CREATE_PRODUCTS, CREATE_USERS] {
        sqlx::query(ddl)
            .execute(pool)
            .await
            .map_err(|e| StoreError::SchemaFailed(e.to_string()))?;
    }

    info!("Store schema ready");
    Ok(())
}
