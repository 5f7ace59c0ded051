//! # User Repository
//!
//! Account operations: sign-up, authentication, profile updates, admin
//! privilege checks.
//!
//! ## Authentication Flow
//! ```text
//! authenticate("alice", "secret")
//!      │
//!      ▼
//! SELECT ... FROM users WHERE username = ?
//!      │
//!      ├── no row            → Ok(None)      (unknown username)
//!      ▼
//! verify Argon2 hash
//!      ├── mismatch          → Ok(None)      (wrong password)
//!      └── match             → Ok(Some(User))
//! ```
//!
//! A failed login is a normal negative result; only I/O faults surface as
//! [`StoreError`]. The stored hash never leaves this module.

use sqlx::{Row, SqlitePool};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::password;
use marketplace_core::{NewUser, Role, User};

/// Repository for user account operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = UserRepository::new(pool);
///
/// let user = repo.insert(&new_user, "secret").await?;
/// let login = repo.authenticate("alice", "secret").await?;
/// ```
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

/// Maps a `users` row (without the password column) to a [`User`].
///
/// Role strings other than the exact `"Admin"` decode as [`Role::User`];
/// the store only ever writes `"Admin"` or `"User"`.
fn row_to_user(row: &sqlx::sqlite::SqliteRow) -> Result<User, sqlx::Error> {
    let role: String = row.try_get("role")?;
    Ok(User {
        id: row.try_get("id")?,
        username: row.try_get("username")?,
        email: row.try_get("email")?,
        role: Role::from_db_str(&role),
    })
}

impl UserRepository {
    /// Creates a new UserRepository.
    pub fn new(pool: SqlitePool) -> Self {
        UserRepository { pool }
    }

    /// Creates an account, hashing the password before storage, and returns
    /// it with the store-assigned id.
    ///
    /// ## Errors
    /// [`StoreError::UniqueViolation`] if the username is already taken.
    pub async fn insert(&self, user: &NewUser, plain_password: &str) -> StoreResult<User> {
        debug!(username = %user.username, role = %user.role, "Inserting user");

        let hash = password::hash_password(plain_password)?;

        let result = sqlx::query(
            r#"
            INSERT INTO users (username, email, role, password)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(user.role.as_str())
        .bind(&hash)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, "User inserted");

        Ok(User {
            id,
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role,
        })
    }

    /// Authenticates by username and plaintext password.
    ///
    /// Returns `Ok(None)` for an unknown username or a wrong password;
    /// neither case is an error.
    pub async fn authenticate(
        &self,
        username: &str,
        plain_password: &str,
    ) -> StoreResult<Option<User>> {
        debug!(username = %username, "Authenticating user");

        let row = sqlx::query(
            r#"
            SELECT id, username, email, role, password
            FROM users
            WHERE username = ?1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            debug!(username = %username, "Unknown username");
            return Ok(None);
        };

        let stored_hash: String = row.try_get("password").map_err(StoreError::from)?;
        if !password::verify_password(plain_password, &stored_hash) {
            debug!(username = %username, "Password mismatch");
            return Ok(None);
        }

        let user = row_to_user(&row).map_err(StoreError::from)?;
        debug!(id = user.id, "Authentication succeeded");
        Ok(Some(user))
    }

    /// Rewrites username, email, role, and password for an account. The
    /// password is re-hashed with a fresh salt.
    ///
    /// ## Errors
    /// [`StoreError::NotFound`] when the id does not exist (zero rows
    /// affected), [`StoreError::UniqueViolation`] when the new username
    /// collides with another account.
    pub async fn update(&self, id: i64, user: &NewUser, plain_password: &str) -> StoreResult<()> {
        debug!(id, username = %user.username, "Updating user");

        let hash = password::hash_password(plain_password)?;

        let result = sqlx::query(
            r#"
            UPDATE users
            SET username = ?2, email = ?3, role = ?4, password = ?5
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&user.username)
        .bind(&user.email)
        .bind(user.role.as_str())
        .bind(&hash)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::not_found("User", id));
        }

        Ok(())
    }

    /// Deletes an account by id. Absent ids are not an error.
    pub async fn delete(&self, id: i64) -> StoreResult<()> {
        debug!(id, "Deleting user");

        sqlx::query("DELETE FROM users WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Searches accounts whose username or email contains the query as a
    /// substring.
    pub async fn search(&self, query: &str) -> StoreResult<Vec<User>> {
        debug!(query = %query, "Searching users");

        let pattern = format!("%{}%", query);

        let rows = sqlx::query(
            r#"
            SELECT id, username, email, role
            FROM users
            WHERE username LIKE ?1 OR email LIKE ?1
            ORDER BY id
            "#,
        )
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| row_to_user(row).map_err(StoreError::from))
            .collect()
    }

    /// Lists all accounts in insertion (id) order.
    pub async fn list_all(&self) -> StoreResult<Vec<User>> {
        let rows = sqlx::query(
            r#"
            SELECT id, username, email, role
            FROM users
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| row_to_user(row).map_err(StoreError::from))
            .collect()
    }

    /// Gets an account by id, `None` if absent.
    pub async fn get_by_id(&self, id: i64) -> StoreResult<Option<User>> {
        let row = sqlx::query(
            r#"
            SELECT id, username, email, role
            FROM users
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref()
            .map(|r| row_to_user(r).map_err(StoreError::from))
            .transpose()
    }

    /// True iff the stored role for `id` is exactly `"Admin"`.
    ///
    /// A missing account is simply "not admin" (`Ok(false)`), matching the
    /// privilege check's use at call sites that may race with deletion.
    pub async fn is_admin(&self, id: i64) -> StoreResult<bool> {
        let role: Option<String> = sqlx::query_scalar("SELECT role FROM users WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(role.as_deref() == Some("Admin"))
    }

    /// Counts accounts (for diagnostics and the seed tool).
    pub async fn count(&self) -> StoreResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Store, StoreConfig};

    async fn store() -> Store {
        Store::new(StoreConfig::in_memory()).await.unwrap()
    }

    fn alice() -> NewUser {
        NewUser::new("alice", "alice@example.com", Role::Admin)
    }

    #[tokio::test]
    async fn test_insert_then_authenticate() {
        let store = store().await;
        let repo = store.users();

        let created = repo.insert(&alice(), "secret").await.unwrap();
        assert!(created.id >= 1);

        let user = repo.authenticate("alice", "secret").await.unwrap().unwrap();
        assert_eq!(user.id, created.id);
        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.role, Role::Admin);
    }

    #[tokio::test]
    async fn test_authenticate_negative_cases_are_not_errors() {
        let store = store().await;
        let repo = store.users();

        repo.insert(&alice(), "secret").await.unwrap();

        // Wrong password
        assert!(repo.authenticate("alice", "wrong").await.unwrap().is_none());
        // Unknown username
        assert!(repo.authenticate("bob", "secret").await.unwrap().is_none());
        // Empty password
        assert!(repo.authenticate("alice", "").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_username_is_unique_violation() {
        let store = store().await;
        let repo = store.users();

        repo.insert(&alice(), "secret").await.unwrap();
        let err = repo
            .insert(
                &NewUser::new("alice", "other@example.com", Role::User),
                "hunter2",
            )
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::UniqueViolation { .. }));
    }

    #[tokio::test]
    async fn test_update_rewrites_all_fields_and_rehashes() {
        let store = store().await;
        let repo = store.users();

        let created = repo.insert(&alice(), "secret").await.unwrap();

        let updated = NewUser::new("alice2", "alice2@example.com", Role::User);
        repo.update(created.id, &updated, "newpass").await.unwrap();

        // Old credentials no longer authenticate.
        assert!(repo.authenticate("alice", "secret").await.unwrap().is_none());
        assert!(repo
            .authenticate("alice2", "secret")
            .await
            .unwrap()
            .is_none());

        // New credentials do, with the rewritten fields.
        let user = repo
            .authenticate("alice2", "newpass")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(user.id, created.id);
        assert_eq!(user.email, "alice2@example.com");
        assert_eq!(user.role, Role::User);
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_found() {
        let store = store().await;
        let repo = store.users();

        let err = repo.update(9999, &alice(), "secret").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_and_absent_is_ok() {
        let store = store().await;
        let repo = store.users();

        let created = repo.insert(&alice(), "secret").await.unwrap();
        repo.delete(created.id).await.unwrap();

        assert!(repo.get_by_id(created.id).await.unwrap().is_none());
        assert!(repo.authenticate("alice", "secret").await.unwrap().is_none());

        // Deleting again is not an error.
        repo.delete(created.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_search_by_username_and_email() {
        let store = store().await;
        let repo = store.users();

        repo.insert(&alice(), "secret").await.unwrap();
        repo.insert(&NewUser::new("bob", "bob@shop.net", Role::User), "secret")
            .await
            .unwrap();

        let hits = repo.search("ali").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].username, "alice");

        let hits = repo.search("shop.net").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].username, "bob");

        let hits = repo.search("example").await.unwrap();
        assert_eq!(hits.len(), 1);

        assert!(repo.search("nobody").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_all() {
        let store = store().await;
        let repo = store.users();

        assert!(repo.list_all().await.unwrap().is_empty());

        repo.insert(&alice(), "secret").await.unwrap();
        repo.insert(&NewUser::new("bob", "bob@shop.net", Role::User), "secret")
            .await
            .unwrap();

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].username, "alice");
        assert_eq!(all[1].username, "bob");
    }

    #[tokio::test]
    async fn test_is_admin_semantics() {
        let store = store().await;
        let repo = store.users();

        let admin = repo.insert(&alice(), "secret").await.unwrap();
        let shopper = repo
            .insert(&NewUser::new("bob", "bob@shop.net", Role::User), "secret")
            .await
            .unwrap();

        assert!(repo.is_admin(admin.id).await.unwrap());
        assert!(!repo.is_admin(shopper.id).await.unwrap());

        // Missing id means "not admin", not an error.
        assert!(!repo.is_admin(9999).await.unwrap());
    }

    #[tokio::test]
    async fn test_is_admin_requires_exact_role_string() {
        let store = store().await;
        let repo = store.users();

        // A row written outside the store with a lowercase role string.
        sqlx::query(
            "INSERT INTO users (username, email, role, password) VALUES ('eve', 'e@x.com', 'admin', 'x')",
        )
        .execute(store.pool())
        .await
        .unwrap();

        let eve = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .find(|u| u.username == "eve")
            .unwrap();

        assert!(!repo.is_admin(eve.id).await.unwrap());
        assert_eq!(eve.role, Role::User);
    }

    #[tokio::test]
    async fn test_password_hash_is_never_exposed_and_salted() {
        let store = store().await;
        let repo = store.users();

        repo.insert(&alice(), "secret").await.unwrap();
        repo.insert(&NewUser::new("bob", "bob@shop.net", Role::User), "secret")
            .await
            .unwrap();

        // Same password, different stored hashes (per-user salt).
        let hashes: Vec<String> =
            sqlx::query_scalar("SELECT password FROM users ORDER BY id")
                .fetch_all(store.pool())
                .await
                .unwrap();
        assert_eq!(hashes.len(), 2);
        assert_ne!(hashes[0], hashes[1]);
        assert!(hashes.iter().all(|h| h != "secret"));
    }
}
