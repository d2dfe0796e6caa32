//! # Order Service
//!
//! Order placement: the workflow that coordinates the three stores.
//!
//! ## Control Flow
//! ```text
//! CreateOrderRequest
//!       │
//!       ▼
//! 1. CustomerStore::find_by_id      ── "Customer ID does not exist"
//!       │
//!       ▼
//! 2. ProductCatalog::find_all_by_id ── one batch call
//!       │
//!       ▼
//! 3. coverage check + line items    ── pure, vendo-core::order
//!       │                              ("List contains products that do
//!       ▼                               not exist" / insufficient stock)
//! 4. OrderStore::create             ── order + items, atomic
//!       │
//!       ▼
//! 5. ProductCatalog::update_quantities ── one batch update
//!       │
//!       ▼
//! 6. created Order
//! ```

use std::sync::Arc;

use tracing::{debug, info};

use vendo_core::order::{build_line_items, check_catalog_coverage, stock_decrements};
use vendo_core::validation::{validate_customer_id, validate_item_requests};
use vendo_core::{CoreError, ItemRequest, Order};

use crate::error::ServiceResult;
use crate::store::{CustomerStore, OrderStore, ProductCatalog};

/// An order placement request: which customer, which product/quantity pairs.
///
/// The item list may contain duplicate product ids; they are not
/// deduplicated. Matching is first-by-id, and a duplicated id fails the
/// catalog coverage check because the batch lookup returns each product once.
#[derive(Debug, Clone)]
pub struct CreateOrderRequest {
    pub customer_id: String,
    pub items: Vec<ItemRequest>,
}

/// Places and looks up orders.
///
/// Collaborators are interface-typed and passed in explicitly.
pub struct OrderService {
    customers: Arc<dyn CustomerStore>,
    catalog: Arc<dyn ProductCatalog>,
    orders: Arc<dyn OrderStore>,
}

impl OrderService {
    pub fn new(
        customers: Arc<dyn CustomerStore>,
        catalog: Arc<dyn ProductCatalog>,
        orders: Arc<dyn OrderStore>,
    ) -> Self {
        OrderService {
            customers,
            catalog,
            orders,
        }
    }

    /// Places an order: validates customer, products and stock, persists the
    /// order with price snapshots, then decrements stock.
    ///
    /// Side effects on success: one create on the order store and one batch
    /// update on the product catalog. These are separate store calls with no
    /// shared transaction: if the quantity update fails the created order
    /// remains, and two concurrent requests can both pass stock validation
    /// against the same stale read. Callers needing stronger guarantees must
    /// serialize order placement themselves.
    ///
    /// Not idempotent: placing the same request twice creates two orders and
    /// decrements stock twice.
    pub async fn create_order(&self, request: CreateOrderRequest) -> ServiceResult<Order> {
        debug!(
            customer_id = %request.customer_id,
            items = request.items.len(),
            "placing order"
        );

        validate_customer_id(&request.customer_id).map_err(CoreError::from)?;
        validate_item_requests(&request.items).map_err(CoreError::from)?;

        let customer = self
            .customers
            .find_by_id(&request.customer_id)
            .await?
            .ok_or_else(|| CoreError::CustomerNotFound {
                id: request.customer_id.clone(),
            })?;

        let ids: Vec<String> = request
            .items
            .iter()
            .map(|item| item.product_id.clone())
            .collect();
        let in_stock = self.catalog.find_all_by_id(&ids).await?;

        check_catalog_coverage(&request.items, &in_stock)?;
        let line_items = build_line_items(&request.items, &in_stock)?;

        let order = self.orders.create(&customer, line_items).await?;

        let levels = stock_decrements(&request.items, &in_stock)?;
        self.catalog.update_quantities(&levels).await?;

        info!(
            order_id = %order.id,
            customer_id = %customer.id,
            items = order.items.len(),
            "order placed"
        );

        Ok(order)
    }

    /// Fetches an order with its line items.
    pub async fn find_order(&self, id: &str) -> ServiceResult<Order> {
        debug!(order_id = %id, "fetching order");

        let order = self
            .orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::OrderNotFound { id: id.to_string() })?;

        Ok(order)
    }
}

// =============================================================================
// Unit Tests (in-memory fakes)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use crate::testing::{InMemoryCatalog, InMemoryCustomers, InMemoryOrders};

    fn item(product_id: &str, quantity: i64) -> ItemRequest {
        ItemRequest {
            product_id: product_id.to_string(),
            quantity,
        }
    }

    struct Fixture {
        customers: Arc<InMemoryCustomers>,
        catalog: Arc<InMemoryCatalog>,
        orders: Arc<InMemoryOrders>,
        service: OrderService,
    }

    // Customer "c1" exists; product "p1" costs 1000 cents with 5 in stock.
    fn fixture() -> Fixture {
        let customers = Arc::new(InMemoryCustomers::default());
        let catalog = Arc::new(InMemoryCatalog::default());
        let orders = Arc::new(InMemoryOrders::default());

        customers.seed("c1", "Ada", "ada@example.com");
        catalog.seed("p1", "Keyboard", 1000, 5);

        let service = OrderService::new(customers.clone(), catalog.clone(), orders.clone());
        Fixture {
            customers,
            catalog,
            orders,
            service,
        }
    }

    fn assert_domain(err: ServiceError) -> CoreError {
        match err {
            ServiceError::Domain(err) => err,
            other => panic!("expected domain error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn valid_request_creates_order_and_decrements_stock() {
        let fx = fixture();

        let order = fx
            .service
            .create_order(CreateOrderRequest {
                customer_id: "c1".to_string(),
                items: vec![item("p1", 3)],
            })
            .await
            .unwrap();

        assert_eq!(order.customer_id, "c1");
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].product_id, "p1");
        assert_eq!(order.items[0].quantity, 3);
        assert_eq!(order.items[0].unit_price_cents, 1000);

        assert_eq!(fx.catalog.quantity_of("p1"), 2);
        assert_eq!(fx.orders.count(), 1);
    }

    #[tokio::test]
    async fn unknown_customer_fails_without_mutation() {
        let fx = fixture();

        let err = fx
            .service
            .create_order(CreateOrderRequest {
                customer_id: "ghost".to_string(),
                items: vec![item("p1", 1)],
            })
            .await
            .unwrap_err();

        let core = assert_domain(err);
        assert!(matches!(core, CoreError::CustomerNotFound { .. }));
        assert!(core.is_user_facing());

        assert_eq!(fx.orders.count(), 0);
        assert_eq!(fx.catalog.quantity_of("p1"), 5);
    }

    #[tokio::test]
    async fn unknown_product_fails_without_mutation() {
        let fx = fixture();

        let err = fx
            .service
            .create_order(CreateOrderRequest {
                customer_id: "c1".to_string(),
                items: vec![item("p1", 1), item("missing", 1)],
            })
            .await
            .unwrap_err();

        assert!(matches!(
            assert_domain(err),
            CoreError::UnknownProducts { .. }
        ));
        assert_eq!(fx.orders.count(), 0);
        assert_eq!(fx.catalog.quantity_of("p1"), 5);
    }

    #[tokio::test]
    async fn over_quantity_fails_naming_the_product() {
        let fx = fixture();

        let err = fx
            .service
            .create_order(CreateOrderRequest {
                customer_id: "c1".to_string(),
                items: vec![item("p1", 6)],
            })
            .await
            .unwrap_err();

        let msg = err.to_string();
        assert!(msg.contains("Keyboard"));
        assert!(msg.contains("not available in that amount"));

        assert_eq!(fx.orders.count(), 0);
        assert_eq!(fx.catalog.quantity_of("p1"), 5);
    }

    #[tokio::test]
    async fn price_changes_do_not_affect_placed_orders() {
        let fx = fixture();

        let order = fx
            .service
            .create_order(CreateOrderRequest {
                customer_id: "c1".to_string(),
                items: vec![item("p1", 1)],
            })
            .await
            .unwrap();

        // Reprice the product after the order was placed.
        fx.catalog.set_price("p1", 9999);

        let fetched = fx.service.find_order(&order.id).await.unwrap();
        assert_eq!(fetched.items[0].unit_price_cents, 1000);
    }

    #[tokio::test]
    async fn placing_twice_decrements_twice() {
        let fx = fixture();

        for _ in 0..2 {
            fx.service
                .create_order(CreateOrderRequest {
                    customer_id: "c1".to_string(),
                    items: vec![item("p1", 2)],
                })
                .await
                .unwrap();
        }

        assert_eq!(fx.orders.count(), 2);
        assert_eq!(fx.catalog.quantity_of("p1"), 1);
    }

    #[tokio::test]
    async fn duplicate_product_ids_fail_the_coverage_check() {
        let fx = fixture();

        let err = fx
            .service
            .create_order(CreateOrderRequest {
                customer_id: "c1".to_string(),
                items: vec![item("p1", 1), item("p1", 1)],
            })
            .await
            .unwrap_err();

        assert!(matches!(
            assert_domain(err),
            CoreError::UnknownProducts {
                requested: 2,
                found: 1
            }
        ));
        assert_eq!(fx.catalog.quantity_of("p1"), 5);
    }

    #[tokio::test]
    async fn empty_item_list_is_rejected() {
        let fx = fixture();

        let err = fx
            .service
            .create_order(CreateOrderRequest {
                customer_id: "c1".to_string(),
                items: vec![],
            })
            .await
            .unwrap_err();

        assert!(matches!(
            assert_domain(err),
            CoreError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn non_positive_quantity_is_rejected() {
        let fx = fixture();

        let err = fx
            .service
            .create_order(CreateOrderRequest {
                customer_id: "c1".to_string(),
                items: vec![item("p1", 0)],
            })
            .await
            .unwrap_err();

        assert!(matches!(assert_domain(err), CoreError::Validation(_)));
        assert_eq!(fx.catalog.quantity_of("p1"), 5);
    }

    #[tokio::test]
    async fn multi_product_order_decrements_each_product() {
        let fx = fixture();
        fx.catalog.seed("p2", "Mouse", 500, 4);

        let order = fx
            .service
            .create_order(CreateOrderRequest {
                customer_id: "c1".to_string(),
                items: vec![item("p2", 1), item("p1", 2)],
            })
            .await
            .unwrap();

        // Line items keep request order and per-product snapshots.
        assert_eq!(order.items[0].product_id, "p2");
        assert_eq!(order.items[0].unit_price_cents, 500);
        assert_eq!(order.items[1].product_id, "p1");
        assert_eq!(order.items[1].unit_price_cents, 1000);

        assert_eq!(fx.catalog.quantity_of("p1"), 3);
        assert_eq!(fx.catalog.quantity_of("p2"), 3);
    }

    #[tokio::test]
    async fn find_order_reports_missing_orders() {
        let fx = fixture();

        let err = fx.service.find_order("ghost").await.unwrap_err();
        assert!(matches!(
            assert_domain(err),
            CoreError::OrderNotFound { .. }
        ));

        // Customer store untouched by lookups.
        assert!(fx.customers.contains("c1"));
    }
}
