//! # Store Traits
//!
//! The interfaces the service workflows consume. Production code uses the
//! SQLite repositories in vendo-db; tests use in-memory fakes. Each trait is
//! object-safe so services can hold `Arc<dyn Trait>`.

use async_trait::async_trait;
use thiserror::Error;

use vendo_core::{Customer, LineItem, NewCustomer, NewProduct, Order, Product, StockLevel};

// =============================================================================
// Store Error
// =============================================================================

/// Opaque backend failure from a store implementation.
///
/// Keeps the trait surface independent of any particular backend; vendo-db
/// converts its `DbError` into this at the trait boundary.
#[derive(Debug, Error)]
#[error("store backend error: {0}")]
pub struct StoreError(#[source] Box<dyn std::error::Error + Send + Sync>);

impl StoreError {
    /// Wraps any backend error.
    pub fn new(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        StoreError(err.into())
    }
}

/// Convenience type alias for store operation results.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Traits
// =============================================================================

/// Customer persistence and lookup.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Finds a customer by id. `None` when absent.
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Customer>>;

    /// Finds a customer by email. `None` when absent.
    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Customer>>;

    /// Persists a new customer and returns it with assigned identity.
    async fn create(&self, new: NewCustomer) -> StoreResult<Customer>;
}

/// Product catalog lookup and stock updates.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    /// Fetches all products matching the given ids in one batch.
    ///
    /// Returns each matching product exactly once, regardless of how many
    /// times its id appears in `ids`. Missing ids are simply absent from the
    /// result; callers detect them by comparing counts.
    async fn find_all_by_id(&self, ids: &[String]) -> StoreResult<Vec<Product>>;

    /// Finds a product by name. `None` when absent.
    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Product>>;

    /// Persists a new product and returns it with assigned identity.
    async fn create(&self, new: NewProduct) -> StoreResult<Product>;

    /// Persists the given absolute stock levels as one batch update.
    async fn update_quantities(&self, levels: &[StockLevel]) -> StoreResult<()>;
}

/// Order persistence and lookup.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Persists an order for the customer with the given line items, assigning
    /// identity to the order and each item. The order and its items are
    /// written atomically.
    async fn create(&self, customer: &Customer, items: Vec<LineItem>) -> StoreResult<Order>;

    /// Finds an order (with its line items) by id. `None` when absent.
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Order>>;
}
