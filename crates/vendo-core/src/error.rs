//! # Error Types
//!
//! Domain-specific error types for vendo-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         Error Types                             │
//! │                                                                 │
//! │  vendo-core errors (this file)                                  │
//! │  ├── CoreError        - Domain rule failures                    │
//! │  └── ValidationError  - Input-shape validation failures         │
//! │                                                                 │
//! │  vendo-services errors                                          │
//! │  └── ServiceError     - CoreError or a store backend failure    │
//! │                                                                 │
//! │  vendo-db errors                                                │
//! │  └── DbError          - Database operation failures             │
//! │                                                                 │
//! │  Flow: ValidationError → CoreError → ServiceError → caller      │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two Error Categories
//!
//! `CoreError` carries two kinds of failure in one tagged enum:
//!
//! - **Domain validation** - expected, user-facing: unknown customer,
//!   unknown products, insufficient stock, duplicate registration input.
//!   These explain to the caller why a request cannot proceed.
//! - **Invariant violation** - unexpected, defensive: the validated product
//!   set and the request set disagree while assembling line items or stock
//!   levels. If one of these ever fires there is a bug; the message is not
//!   meant for end users.
//!
//! Use [`CoreError::is_user_facing`] to tell them apart.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Domain errors raised by order assembly and the service workflows.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The requested customer id has no matching customer.
    #[error("Customer ID does not exist: {id}")]
    CustomerNotFound { id: String },

    /// The batch product lookup returned fewer products than requested.
    ///
    /// ## When This Occurs
    /// - A requested product id does not exist in the catalog
    /// - The same product id appears twice in the request (the batch lookup
    ///   returns each product once, so the counts disagree)
    #[error("List contains products that do not exist")]
    UnknownProducts { requested: usize, found: usize },

    /// Requested quantity exceeds the product's available stock.
    #[error("Product '{name}' is not available in that amount (available {available}, requested {requested})")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// The requested order id has no matching order.
    #[error("Order does not exist: {id}")]
    OrderNotFound { id: String },

    /// Input validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Internal mismatch between the validated product set and the request
    /// set. Unreachable when the coverage check passed; indicates a bug.
    #[error("internal invariant violated: {0}")]
    Invariant(String),
}

impl CoreError {
    /// Creates an invariant-violation error.
    pub fn invariant(msg: impl Into<String>) -> Self {
        CoreError::Invariant(msg.into())
    }

    /// Returns true when the error is an expected, user-displayable
    /// validation failure rather than an internal invariant violation.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, CoreError::Invariant(_))
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input-shape validation errors.
///
/// These occur when caller input doesn't meet requirements, before any
/// business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustNotBeNegative { field: String },

    /// Invalid format (e.g. malformed email).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Duplicate value (e.g. already-registered email).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
