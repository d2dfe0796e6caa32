//! # Domain Types
//!
//! Core domain types used throughout Vendo.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                            │
//! │                                                                 │
//! │  ┌───────────────┐   ┌───────────────┐   ┌───────────────┐     │
//! │  │   Customer    │   │    Product    │   │     Order     │     │
//! │  │  ───────────  │   │  ───────────  │   │  ───────────  │     │
//! │  │  id (UUID)    │   │  id (UUID)    │   │  id (UUID)    │     │
//! │  │  name         │   │  name         │   │  customer_id  │     │
//! │  │  email        │   │  price_cents  │   │  items (Vec)  │     │
//! │  └───────────────┘   │  quantity     │   └───────────────┘     │
//! │                      └───────────────┘                          │
//! │                                                                 │
//! │  ItemRequest ──► LineItem ──► OrderItem                         │
//! │  (what the       (price       (persisted with                   │
//! │   caller asks)    snapshot)    identity)                        │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A line item freezes the product's unit price at order time. Later price
//! changes never affect past orders.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Customer
// =============================================================================

/// A registered customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Customer {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name.
    pub name: String,

    /// Contact email. Unique across customers.
    pub email: String,

    /// When the customer was created.
    pub created_at: DateTime<Utc>,

    /// When the customer was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Input for registering a customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
}

// =============================================================================
// Product
// =============================================================================

/// A product available for purchase.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Unique identifier (UUID v4).
    pub id: String,

    /// Display name. Unique across the catalog.
    pub name: String,

    /// Unit price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Units currently available for purchase.
    pub quantity: i64,

    /// When the product was created.
    pub created_at: DateTime<Utc>,

    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Returns the unit price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Checks whether the requested quantity can be fulfilled from stock.
    #[inline]
    pub fn can_fulfill(&self, requested: i64) -> bool {
        requested <= self.quantity
    }
}

/// Input for registering a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub price_cents: i64,
    pub quantity: i64,
}

// =============================================================================
// Order Requests and Line Items
// =============================================================================

/// A single requested product/quantity pair in an order request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRequest {
    pub product_id: String,
    pub quantity: i64,
}

/// A line item ready to persist: product, quantity, and the unit price
/// snapshotted at order time. Identity is assigned by the order store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub product_id: String,
    pub quantity: i64,
    /// Unit price in cents at order time (frozen).
    pub unit_price_cents: i64,
}

impl LineItem {
    /// Returns the frozen unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }
}

/// An absolute stock level to persist for a product after an order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockLevel {
    pub product_id: String,
    /// New available quantity (not a delta).
    pub quantity: i64,
}

// =============================================================================
// Order
// =============================================================================

/// A persisted line item within an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct OrderItem {
    pub id: String,
    pub order_id: String,
    pub product_id: String,
    /// Quantity ordered.
    pub quantity: i64,
    /// Unit price in cents at order time (frozen).
    pub unit_price_cents: i64,
    pub created_at: DateTime<Utc>,
}

impl OrderItem {
    /// Returns the frozen unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Returns the line total (unit price × quantity), saturating rather
    /// than wrapping if a pathological row would overflow.
    pub fn line_total(&self) -> Money {
        self.unit_price()
            .checked_mul(self.quantity)
            .unwrap_or(Money::from_cents(i64::MAX))
    }
}

/// A placed order. Belongs to one customer; immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub customer_id: String,
    /// Line items in request order.
    pub items: Vec<OrderItem>,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================
