//! # Store Pool Management
//!
//! Connection pool creation and configuration for the SQLite store.
//!
//! ## Lifecycle
//! ```text
//! StoreConfig::new(path)        ← configure pool settings
//!      │
//!      ▼
//! Store::new(config).await      ← create pool + ensure schema
//!      │
//!      ▼
//! store.products() / store.users()   ← repository access
//!      │
//!      ▼
//! store.close().await           ← release connections (idempotent);
//!                                 subsequent calls fail with
//!                                 StoreError::ConnectionClosed
//! ```
//!
//! ## WAL Mode
//! SQLite WAL (Write-Ahead Logging) mode is enabled so readers do not block
//! the writer and vice versa. The store performs no locking of its own; each
//! statement is independently atomic with auto-commit enabled.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::repository::product::ProductRepository;
use crate::repository::user::UserRepository;
use crate::schema;

// =============================================================================
// Configuration
// =============================================================================

/// Store configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = StoreConfig::new("/path/to/marketplace.db")
///     .max_connections(5)
///     .min_connections(1);
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the SQLite database file. Created if absent.
    pub database_path: PathBuf,

    /// Maximum number of connections in the pool.
    /// Default: 5 (plenty for a single-user desktop app)
    pub max_connections: u32,

    /// Minimum number of connections to keep alive.
    /// Default: 1
    pub min_connections: u32,

    /// Connection acquire timeout.
    /// Default: 30 seconds
    pub connect_timeout: Duration,

    /// Idle timeout before closing a connection.
    /// Default: 10 minutes
    pub idle_timeout: Duration,

    /// Whether to run the schema bootstrap on open.
    /// Default: true
    pub ensure_schema: bool,
}

impl StoreConfig {
    /// Creates a new store configuration with the given database path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StoreConfig {
            database_path: path.into(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            ensure_schema: true,
        }
    }

    /// Sets the maximum number of connections.
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets the minimum number of connections.
    pub fn min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    /// Sets the connection acquire timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets whether to run the schema bootstrap on open.
    pub fn ensure_schema(mut self, ensure: bool) -> Self {
        self.ensure_schema = ensure;
        self
    }

    /// Creates an in-memory store configuration (for testing).
    ///
    /// In-memory SQLite lives and dies with its single connection, so the
    /// pool is pinned to exactly one.
    pub fn in_memory() -> Self {
        StoreConfig {
            database_path: PathBuf::from(":memory:"),
            max_connections: 1,
            min_connections: 1,
            connect_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(60),
            ensure_schema: true,
        }
    }
}

// =============================================================================
// Store
// =============================================================================

/// The Catalog & Account Store.
///
/// Handle over the SQLite connection pool, providing repository access.
/// Cloning is cheap and every clone shares the same pool; whichever
/// component composes the application owns and injects this handle (there
/// is no process-wide singleton).
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Opens the store, creating the database file and schema if absent.
    ///
    /// ## What This Does
    /// 1. Creates the database file if it doesn't exist
    /// 2. Configures SQLite: WAL journal, NORMAL synchronous, foreign keys
    /// 3. Creates the connection pool
    /// 4. Ensures the `products` and `users` tables exist (if enabled)
    ///
    /// ## Errors
    /// [`StoreError::ConnectionFailed`] if the file cannot be opened or
    /// created, [`StoreError::SchemaFailed`] if the bootstrap DDL fails.
    pub async fn new(config: StoreConfig) -> StoreResult<Self> {
        info!(
            path = %config.database_path.display(),
            "Opening marketplace store"
        );

        // sqlite://path with mode=rwc creates the file if not exists
        let connect_url = format!("sqlite://{}?mode=rwc", config.database_path.display());

        let connect_options = SqliteConnectOptions::from_str(&connect_url)
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?
            // WAL mode: readers and the writer don't block each other
            .journal_mode(SqliteJournalMode::Wal)
            // NORMAL synchronous: safe from corruption, may lose the last
            // transaction on power failure
            .synchronous(SqliteSynchronous::Normal)
            .foreign_keys(true)
            .create_if_missing(true);

        debug!("Connection options configured");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.connect_timeout)
            .idle_timeout(Some(config.idle_timeout))
            .connect_with(connect_options)
            .await
            .map_err(|e| StoreError::ConnectionFailed(e.to_string()))?;

        info!(
            max_connections = config.max_connections,
            "Store pool created"
        );

        let store = Store { pool };

        if config.ensure_schema {
            store.ensure_schema().await?;
        }

        Ok(store)
    }

    /// Creates the store's tables if they do not exist yet.
    ///
    /// Called automatically by [`Store::new`] unless disabled in the
    /// config. Idempotent.
    pub async fn ensure_schema(&self) -> StoreResult<()> {
        schema::ensure_schema(&self.pool).await
    }

    /// Returns a reference to the connection pool.
    ///
    /// For ad-hoc queries not covered by the repositories. Prefer the
    /// repository methods when available.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Returns the product catalog repository.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let results = store.products().search("phone").await?;
    /// ```
    pub fn products(&self) -> ProductRepository {
        ProductRepository::new(self.pool.clone())
    }

    /// Returns the user account repository.
    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.pool.clone())
    }

    /// Closes the store's connection pool.
    ///
    /// Idempotent. After closing, every repository operation fails with
    /// [`StoreError::ConnectionClosed`] until a new store is opened.
    pub async fn close(&self) {
        info!("Closing store connection pool");
        self.pool.close().await;
    }

    /// Whether the pool has been closed.
    pub fn is_closed(&self) -> bool {
        self.pool.is_closed()
    }

    /// Checks whether the store can execute queries.
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
