//! # vendo-db: Database Layer for Vendo
//!
//! SQLite persistence via sqlx: connection pool, embedded migrations, and
//! the repository implementations of the vendo-services store traits.
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repositories (customer, product, order)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use vendo_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/vendo.db")).await?;
//!
//! // Repositories implement the vendo-services store traits:
//! let service = OrderService::new(
//!     Arc::new(db.customers()),
//!     Arc::new(db.products()),
//!     Arc::new(db.orders()),
//! );
//! ```

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::customer::CustomerRepository;
pub use repository::order::OrderRepository;
pub use repository::product::ProductRepository;
