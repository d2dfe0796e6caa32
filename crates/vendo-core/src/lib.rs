//! # vendo-core: Pure Business Logic for Vendo
//!
//! This crate contains the business rules of the Vendo order backend as pure
//! functions and plain types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Vendo Architecture                         │
//! │                                                                 │
//! │  ┌───────────────────────────────────────────────────────────┐ │
//! │  │                  vendo-services                           │ │
//! │  │   OrderService, CustomerService, ProductService           │ │
//! │  └───────────────────────────┬───────────────────────────────┘ │
//! │                              │                                  │
//! │  ┌───────────────────────────▼───────────────────────────────┐ │
//! │  │              ★ vendo-core (THIS CRATE) ★                  │ │
//! │  │                                                           │ │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌────────────┐    │ │
//! │  │   │  types  │ │  money  │ │  order  │ │ validation │    │ │
//! │  │   │ Product │ │  Money  │ │ assembly│ │   rules    │    │ │
//! │  │   │  Order  │ │ (cents) │ │ + stock │ │   checks   │    │ │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └────────────┘    │ │
//! │  │                                                           │ │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS     │ │
//! │  └───────────────────────────┬───────────────────────────────┘ │
//! │                              │                                  │
//! │  ┌───────────────────────────▼───────────────────────────────┐ │
//! │  │                 vendo-db (Database Layer)                 │ │
//! │  │          SQLite queries, migrations, repositories         │ │
//! │  └───────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Customer, Product, Order, line items)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`order`] - Pure order assembly: coverage check, line items, stock levels
//! - [`validation`] - Input-shape validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, always
//! 2. **No I/O**: database, network and file system access are FORBIDDEN here
//! 3. **Integer Money**: all monetary values are cents (i64), never floats
//! 4. **Explicit Errors**: all errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use vendo_core::money::Money;
//!
//! // Create money from cents (never from floats!)
//! let price = Money::from_cents(1000); // $10.00
//! assert_eq!(price.to_string(), "$10.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod order;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use vendo_core::Money` instead of
// `use vendo_core::money::Money`.

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;
