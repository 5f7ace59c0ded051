//! # Product Repository
//!
//! Catalog operations: insert, delete, substring search, listing.
//!
//! ## Search
//! ```text
//! User types: "phone"
//!      │
//!      ▼
//! LIKE '%phone%' across name, description, seller
//!      │
//!      ▼
//! Results: every product containing the substring
//! ```
//!
//! Case folding follows SQLite's LIKE collation (ASCII case-insensitive by
//! default). A `NULL` description never matches on its own.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::StoreResult;
use marketplace_core::{NewProduct, Product};

/// Repository for product catalog operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let product = repo.insert(&new_product).await?;
/// let results = repo.search("phone").await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts a new product and returns it with the store-assigned id.
    ///
    /// The id comes from SQLite AUTOINCREMENT (`last_insert_rowid`) and is
    /// always >= 1.
    pub async fn insert(&self, product: &NewProduct) -> StoreResult<Product> {
        debug!(name = %product.name, seller = %product.seller, "Inserting product");

        let result = sqlx::query(
            r#"
            INSERT INTO products (name, description, price, seller, image)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(&product.seller)
        .bind(&product.image)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, "Product inserted");

        Ok(Product {
            id,
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price,
            seller: product.seller.clone(),
            image: product.image.clone(),
        })
    }

    /// Deletes a product by id.
    ///
    /// Deleting an id that is already gone is not an error; the statement
    /// simply affects zero rows.
    pub async fn delete(&self, id: i64) -> StoreResult<()> {
        debug!(id, "Deleting product");

        sqlx::query("DELETE FROM products WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Searches products whose name, description, or seller contains the
    /// query as a substring.
    ///
    /// An empty query matches everything; no matches yield `Ok(vec![])`,
    /// never an error.
    pub async fn search(&self, query: &str) -> StoreResult<Vec<Product>> {
        debug!(query = %query, "Searching products");

        let pattern = format!("%{}%", query);

        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price, seller, image
            FROM products
            WHERE name LIKE ?1 OR description LIKE ?1 OR seller LIKE ?1
            ORDER BY id
            "#,
        )
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?;

        debug!(count = products.len(), "Search returned products");
        Ok(products)
    }

    /// Lists the full catalog in insertion (id) order.
    pub async fn list_all(&self) -> StoreResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price, seller, image
            FROM products
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Gets a product by id, `None` if absent.
    pub async fn get_by_id(&self, id: i64) -> StoreResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, description, price, seller, image
            FROM products
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Counts catalog entries (for diagnostics and the seed tool).
    pub async fn count(&self) -> StoreResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
