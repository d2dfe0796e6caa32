//! # Order Repository
//!
//! Database operations for orders and their line items.
//!
//! ## Snapshot Pattern
//! Line items carry the unit price frozen at order time. The order and all
//! of its items are inserted in one transaction; orders are immutable after
//! creation, so there are no update operations here.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use vendo_core::{Customer, LineItem, Order, OrderItem};
use vendo_services::store::{OrderStore, StoreResult};

use crate::error::DbResult;
use crate::repository::generate_id;

/// Repository for order database operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

/// Order row without its items; items are fetched separately.
#[derive(sqlx::FromRow)]
struct OrderRow {
    id: String,
    customer_id: String,
    created_at: DateTime<Utc>,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Inserts an order and its line items in one transaction, assigning
    /// identity to the order and each item.
    pub async fn insert(&self, customer: &Customer, items: Vec<LineItem>) -> DbResult<Order> {
        let now = Utc::now();
        let order_id = generate_id();

        debug!(order_id = %order_id, customer_id = %customer.id, items = items.len(), "Inserting order");

        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO orders (id, customer_id, created_at) VALUES (?1, ?2, ?3)")
            .bind(&order_id)
            .bind(&customer.id)
            .bind(now)
            .execute(&mut *tx)
            .await?;

        let mut persisted = Vec::with_capacity(items.len());
        for item in items {
            let order_item = OrderItem {
                id: generate_id(),
                order_id: order_id.clone(),
                product_id: item.product_id,
                quantity: item.quantity,
                unit_price_cents: item.unit_price_cents,
                created_at: now,
            };

            sqlx::query(
                "INSERT INTO order_items \
                 (id, order_id, product_id, quantity, unit_price_cents, created_at) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )
            .bind(&order_item.id)
            .bind(&order_item.order_id)
            .bind(&order_item.product_id)
            .bind(order_item.quantity)
            .bind(order_item.unit_price_cents)
            .bind(order_item.created_at)
            .execute(&mut *tx)
            .await?;

            persisted.push(order_item);
        }

        tx.commit().await?;

        Ok(Order {
            id: order_id,
            customer_id: customer.id.clone(),
            items: persisted,
            created_at: now,
        })
    }

    /// Gets an order with its line items (in insertion order).
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Order>> {
        let row = sqlx::query_as::<_, OrderRow>(
            "SELECT id, customer_id, created_at FROM orders WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let items = sqlx::query_as::<_, OrderItem>(
            "SELECT id, order_id, product_id, quantity, unit_price_cents, created_at \
             FROM order_items WHERE order_id = ?1 ORDER BY rowid",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(Order {
            id: row.id,
            customer_id: row.customer_id,
            items,
            created_at: row.created_at,
        }))
    }

    /// Counts orders (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM orders")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl OrderStore for OrderRepository {
    async fn create(&self, customer: &Customer, items: Vec<LineItem>) -> StoreResult<Order> {
        Ok(self.insert(customer, items).await?)
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Order>> {
        Ok(self.get_by_id(id).await?)
    }
}
