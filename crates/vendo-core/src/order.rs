//! # Order Assembly
//!
//! Pure functions that turn an order request plus the fetched catalog rows
//! into line items and new stock levels. All I/O (fetching customers and
//! products, persisting the order) lives in vendo-services and vendo-db;
//! this module only validates and computes.
//!
//! ## Pipeline
//! ```text
//! requested: [ItemRequest]        fetched: [Product]
//!        │                              │
//!        └──────────────┬───────────────┘
//!                       ▼
//!        check_catalog_coverage      ← counts must match
//!                       │
//!                       ▼
//!        build_line_items            ← stock check + price snapshot
//!                       │
//!                       ▼
//!        stock_decrements            ← quantity − requested, per product
//! ```
//!
//! ## Matching Semantics
//! Requests are matched to fetched products (and vice versa) by the FIRST
//! entry with an equal id. Duplicate product ids in a request are neither
//! deduplicated nor rejected here; because the batch lookup returns each
//! product once, a duplicated id makes the coverage check fail.

use crate::error::{CoreError, CoreResult};
use crate::types::{ItemRequest, LineItem, Product, StockLevel};

/// Verifies that the batch lookup found one product per requested entry.
///
/// This is a count comparison, not id-set equality: it detects missing ids,
/// and incidentally rejects requests that repeat an id (the lookup returns
/// each product once).
pub fn check_catalog_coverage(requested: &[ItemRequest], found: &[Product]) -> CoreResult<()> {
    if found.len() != requested.len() {
        return Err(CoreError::UnknownProducts {
            requested: requested.len(),
            found: found.len(),
        });
    }
    Ok(())
}

/// Builds one line item per requested entry, snapshotting the current unit
/// price.
///
/// ## Errors
/// - [`CoreError::Invariant`] when a requested id has no fetched product.
///   Unreachable when [`check_catalog_coverage`] passed; kept as a defensive
///   check rather than a user-facing validation.
/// - [`CoreError::InsufficientStock`] (naming the product) when a requested
///   quantity exceeds the available quantity.
pub fn build_line_items(requested: &[ItemRequest], found: &[Product]) -> CoreResult<Vec<LineItem>> {
    requested
        .iter()
        .map(|request| {
            let in_stock = found
                .iter()
                .find(|p| p.id == request.product_id)
                .ok_or_else(|| {
                    CoreError::invariant(format!(
                        "requested product {} missing from fetched set",
                        request.product_id
                    ))
                })?;

            if !in_stock.can_fulfill(request.quantity) {
                return Err(CoreError::InsufficientStock {
                    name: in_stock.name.clone(),
                    available: in_stock.quantity,
                    requested: request.quantity,
                });
            }

            Ok(LineItem {
                product_id: request.product_id.clone(),
                quantity: request.quantity,
                unit_price_cents: in_stock.price_cents,
            })
        })
        .collect()
}

/// Computes the new absolute stock level for each fetched product:
/// available quantity minus the quantity requested for it.
///
/// Matches by the first request with an equal id; fails with
/// [`CoreError::Invariant`] when a fetched product has no matching request
/// (same defensive category as in [`build_line_items`]).
pub fn stock_decrements(requested: &[ItemRequest], found: &[Product]) -> CoreResult<Vec<StockLevel>> {
    found
        .iter()
        .map(|in_stock| {
            let request = requested
                .iter()
                .find(|r| r.product_id == in_stock.id)
                .ok_or_else(|| {
                    CoreError::invariant(format!(
                        "fetched product {} missing from request",
                        in_stock.id
                    ))
                })?;

            Ok(StockLevel {
                product_id: in_stock.id.clone(),
                quantity: in_stock.quantity - request.quantity,
            })
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn product(id: &str, name: &str, price_cents: i64, quantity: i64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            price_cents,
            quantity,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn request(product_id: &str, quantity: i64) -> ItemRequest {
        ItemRequest {
            product_id: product_id.to_string(),
            quantity,
        }
    }

    #[test]
    fn coverage_check_passes_when_counts_match() {
        let requested = vec![request("p1", 1), request("p2", 2)];
        let found = vec![
            product("p1", "Keyboard", 1000, 5),
            product("p2", "Mouse", 500, 5),
        ];
        assert!(check_catalog_coverage(&requested, &found).is_ok());
    }

    #[test]
    fn coverage_check_rejects_missing_products() {
        let requested = vec![request("p1", 1), request("missing", 2)];
        let found = vec![product("p1", "Keyboard", 1000, 5)];

        let err = check_catalog_coverage(&requested, &found).unwrap_err();
        assert!(matches!(
            err,
            CoreError::UnknownProducts {
                requested: 2,
                found: 1
            }
        ));
        assert!(err.is_user_facing());
    }

    #[test]
    fn duplicate_ids_in_request_fail_the_coverage_check() {
        // The batch lookup returns each product once, so a repeated id makes
        // the counts disagree even though every id exists.
        let requested = vec![request("p1", 1), request("p1", 2)];
        let found = vec![product("p1", "Keyboard", 1000, 5)];

        let err = check_catalog_coverage(&requested, &found).unwrap_err();
        assert!(matches!(err, CoreError::UnknownProducts { .. }));
    }

    #[test]
    fn line_items_snapshot_the_current_price() {
        let requested = vec![request("p1", 3)];
        let found = vec![product("p1", "Keyboard", 1000, 5)];

        let items = build_line_items(&requested, &found).unwrap();
        assert_eq!(
            items,
            vec![LineItem {
                product_id: "p1".to_string(),
                quantity: 3,
                unit_price_cents: 1000,
            }]
        );
    }

    #[test]
    fn line_items_preserve_request_order() {
        let requested = vec![request("p2", 1), request("p1", 2)];
        let found = vec![
            product("p1", "Keyboard", 1000, 5),
            product("p2", "Mouse", 500, 5),
        ];

        let items = build_line_items(&requested, &found).unwrap();
        assert_eq!(items[0].product_id, "p2");
        assert_eq!(items[0].unit_price_cents, 500);
        assert_eq!(items[1].product_id, "p1");
        assert_eq!(items[1].unit_price_cents, 1000);
    }

    #[test]
    fn over_quantity_fails_naming_the_product() {
        let requested = vec![request("p1", 6)];
        let found = vec![product("p1", "Keyboard", 1000, 5)];

        let err = build_line_items(&requested, &found).unwrap_err();
        match err {
            CoreError::InsufficientStock {
                ref name,
                available,
                requested,
            } => {
                assert_eq!(name, "Keyboard");
                assert_eq!(available, 5);
                assert_eq!(requested, 6);
            }
            other => panic!("expected InsufficientStock, got {other:?}"),
        }
        assert!(err.to_string().contains("Keyboard"));
    }

    #[test]
    fn exact_stock_is_fulfillable() {
        let requested = vec![request("p1", 5)];
        let found = vec![product("p1", "Keyboard", 1000, 5)];
        assert!(build_line_items(&requested, &found).is_ok());
    }

    #[test]
    fn unmatched_request_is_an_invariant_violation() {
        let requested = vec![request("ghost", 1)];
        let found = vec![product("p1", "Keyboard", 1000, 5)];

        let err = build_line_items(&requested, &found).unwrap_err();
        assert!(matches!(err, CoreError::Invariant(_)));
        assert!(!err.is_user_facing());
    }

    #[test]
    fn stock_decrements_subtract_requested_quantities() {
        let requested = vec![request("p1", 3), request("p2", 1)];
        let found = vec![
            product("p1", "Keyboard", 1000, 5),
            product("p2", "Mouse", 500, 4),
        ];

        let levels = stock_decrements(&requested, &found).unwrap();
        assert_eq!(
            levels,
            vec![
                StockLevel {
                    product_id: "p1".to_string(),
                    quantity: 2,
                },
                StockLevel {
                    product_id: "p2".to_string(),
                    quantity: 3,
                },
            ]
        );
    }

    #[test]
    fn unmatched_fetched_product_is_an_invariant_violation() {
        let requested = vec![request("p1", 1)];
        let found = vec![
            product("p1", "Keyboard", 1000, 5),
            product("p2", "Mouse", 500, 4),
        ];

        let err = stock_decrements(&requested, &found).unwrap_err();
        assert!(matches!(err, CoreError::Invariant(_)));
    }
}
