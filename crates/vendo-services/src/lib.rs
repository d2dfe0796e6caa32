//! # vendo-services: Workflows over Store Traits
//!
//! This crate holds the service layer of Vendo: the store interfaces the
//! workflows consume and the workflows themselves.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     vendo-services                              │
//! │                                                                 │
//! │   ┌──────────────┐  ┌───────────────┐  ┌────────────────┐      │
//! │   │ OrderService │  │CustomerService│  │ ProductService │      │
//! │   └──────┬───────┘  └───────┬───────┘  └───────┬────────┘      │
//! │          │                  │                  │                │
//! │          ▼                  ▼                  ▼                │
//! │   Arc<dyn CustomerStore> / ProductCatalog / OrderStore          │
//! │          │                                                      │
//! │          │  implemented by vendo-db (SQLite) in production,     │
//! │          │  by in-memory fakes in tests                         │
//! └──────────┼──────────────────────────────────────────────────────┘
//!            ▼
//!      vendo-db repositories
//! ```
//!
//! Collaborators are passed explicitly to service constructors as
//! `Arc<dyn Trait>` - there is no injection container.
//!
//! ## Modules
//!
//! - [`store`] - `CustomerStore`, `ProductCatalog`, `OrderStore`, `StoreError`
//! - [`orders`] - order placement and lookup
//! - [`customers`] - customer registration
//! - [`products`] - product registration
//! - [`error`] - `ServiceError`

pub mod customers;
pub mod error;
pub mod orders;
pub mod products;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;

pub use customers::CustomerService;
pub use error::{ServiceError, ServiceResult};
pub use orders::{CreateOrderRequest, OrderService};
pub use products::ProductService;
pub use store::{CustomerStore, OrderStore, ProductCatalog, StoreError};
