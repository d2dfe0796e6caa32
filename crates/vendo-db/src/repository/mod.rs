//! # Repository Module
//!
//! One repository per table, each holding a clone of the pool. The
//! repositories expose inherent methods returning [`DbResult`] and also
//! implement the vendo-services store traits, converting `DbError` into the
//! opaque `StoreError` at that boundary.
//!
//! ## Available Repositories
//!
//! - [`customer::CustomerRepository`] - customer lookup and registration
//! - [`product::ProductRepository`] - catalog lookup, registration, stock updates
//! - [`order::OrderRepository`] - order + line item persistence
//!
//! [`DbResult`]: crate::error::DbResult

pub mod customer;
pub mod order;
pub mod product;

use uuid::Uuid;

/// Generates a fresh entity id (UUID v4 as string).
pub(crate) fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
