//! # Product Repository
//!
//! Database operations for the product catalog.
//!
//! ## Stock Update Semantics
//! `update_quantities` persists ABSOLUTE quantities computed by the order
//! workflow, all within one transaction. It is not a delta update; the
//! workflow owns the arithmetic.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{QueryBuilder, SqlitePool};
use tracing::debug;

use vendo_core::{NewProduct, Product, StockLevel};
use vendo_services::store::{ProductCatalog, StoreResult};

use crate::error::{DbError, DbResult};
use crate::repository::generate_id;

const PRODUCT_COLUMNS: &str = "id, name, price_cents, quantity, created_at, updated_at";

/// Repository for product database operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Gets a product by its ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Gets a product by its (unique) name.
    pub async fn get_by_name(&self, name: &str) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE name = ?1"
        ))
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Fetches all products whose id is in `ids`, one batch query.
    ///
    /// Each matching row is returned exactly once even when an id repeats in
    /// `ids`; missing ids are simply absent. Callers that need to detect
    /// missing products compare counts.
    pub async fn get_all_by_id(&self, ids: &[String]) -> DbResult<Vec<Product>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        debug!(count = ids.len(), "Batch product lookup");

        let mut builder = QueryBuilder::new(format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id IN ("
        ));
        let mut separated = builder.separated(", ");
        for id in ids {
            separated.push_bind(id);
        }
        separated.push_unseparated(")");

        let products = builder
            .build_query_as::<Product>()
            .fetch_all(&self.pool)
            .await?;

        Ok(products)
    }

    /// Inserts a new product with generated id and timestamps.
    ///
    /// ## Errors
    /// `DbError::UniqueViolation` when the name is already taken.
    pub async fn insert(&self, new: NewProduct) -> DbResult<Product> {
        let now = Utc::now();
        let product = Product {
            id: generate_id(),
            name: new.name,
            price_cents: new.price_cents,
            quantity: new.quantity,
            created_at: now,
            updated_at: now,
        };

        debug!(id = %product.id, name = %product.name, "Inserting product");

        sqlx::query(
            "INSERT INTO products (id, name, price_cents, quantity, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(&product.id)
        .bind(&product.name)
        .bind(product.price_cents)
        .bind(product.quantity)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(product)
    }

    /// Persists absolute stock levels as a single batch update.
    ///
    /// All rows are updated in one transaction: either every level is
    /// written or none is.
    ///
    /// ## Errors
    /// `DbError::NotFound` when a product id has no row.
    pub async fn set_quantities(&self, levels: &[StockLevel]) -> DbResult<()> {
        if levels.is_empty() {
            return Ok(());
        }

        debug!(count = levels.len(), "Updating stock levels");

        let now = Utc::now();
        let mut tx = self.pool.begin().await?;

        for level in levels {
            let result = sqlx::query(
                "UPDATE products SET quantity = ?2, updated_at = ?3 WHERE id = ?1",
            )
            .bind(&level.product_id)
            .bind(level.quantity)
            .bind(now)
            .execute(&mut *tx)
            .await?;

            if result.rows_affected() == 0 {
                return Err(DbError::not_found("Product", &level.product_id));
            }
        }

        tx.commit().await?;

        Ok(())
    }

    /// Counts products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl ProductCatalog for ProductRepository {
    async fn find_all_by_id(&self, ids: &[String]) -> StoreResult<Vec<Product>> {
        Ok(self.get_all_by_id(ids).await?)
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Product>> {
        Ok(self.get_by_name(name).await?)
    }

    async fn create(&self, new: NewProduct) -> StoreResult<Product> {
        Ok(self.insert(new).await?)
    }

    async fn update_quantities(&self, levels: &[StockLevel]) -> StoreResult<()> {
        Ok(self.set_quantities(levels).await?)
    }
}
