//! # Validation Module
//!
//! Input-shape validation, run by the services before any business logic.
//!
//! ## Validation Layers
//! ```text
//! Layer 1: Service input (THIS MODULE)  — shape of ids, names, quantities
//! Layer 2: Domain rules (order module)  — stock, catalog coverage
//! Layer 3: Database                     — NOT NULL, UNIQUE, foreign keys
//! ```
//!
//! ## Usage
//! ```rust
//! use vendo_core::validation::{validate_customer_id, validate_item_requests};
//! use vendo_core::ItemRequest;
//!
//! validate_customer_id("3b2e...").unwrap();
//! validate_item_requests(&[ItemRequest {
//!     product_id: "p1".to_string(),
//!     quantity: 2,
//! }])
//! .unwrap();
//! ```

use crate::error::ValidationError;
use crate::types::ItemRequest;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Order Request Validators
// =============================================================================

/// Validates a customer identifier.
///
/// ## Rules
/// - Must not be empty (after trimming)
pub fn validate_customer_id(id: &str) -> ValidationResult<()> {
    if id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "customer_id".to_string(),
        });
    }
    Ok(())
}

/// Validates the requested product/quantity pairs of an order.
///
/// ## Rules
/// - The list must not be empty
/// - Every product id must be non-empty
/// - Every quantity must be a positive integer
///
/// Duplicate product ids are deliberately NOT rejected here; the catalog
/// coverage check decides their fate.
pub fn validate_item_requests(items: &[ItemRequest]) -> ValidationResult<()> {
    if items.is_empty() {
        return Err(ValidationError::Required {
            field: "products".to_string(),
        });
    }

    for item in items {
        if item.product_id.trim().is_empty() {
            return Err(ValidationError::Required {
                field: "product_id".to_string(),
            });
        }
        if item.quantity <= 0 {
            return Err(ValidationError::MustBePositive {
                field: "quantity".to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Registration Validators
// =============================================================================

/// Validates a customer or product display name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates an email address.
///
/// ## Rules
/// - Must not be empty
/// - Must contain exactly one `@` with text on both sides
///
/// Intentionally shallow: real deliverability is the mail system's problem.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "expected a single '@' with text on both sides".to_string(),
        });
    }

    Ok(())
}

/// Validates a product unit price in cents.
pub fn validate_price_cents(price_cents: i64) -> ValidationResult<()> {
    if price_cents <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }
    Ok(())
}

/// Validates an initial stock quantity (zero is allowed).
pub fn validate_initial_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 0 {
        return Err(ValidationError::MustNotBeNegative {
            field: "quantity".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
