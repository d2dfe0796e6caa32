//! In-memory store fakes for service tests.
//!
//! Each fake keeps rows in a `Mutex<Vec<_>>` and implements the matching
//! store trait with the same observable semantics as the SQLite
//! repositories, notably: the batch product lookup returns each matching
//! product exactly once, in catalog order.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use vendo_core::{
    Customer, LineItem, NewCustomer, NewProduct, Order, OrderItem, Product, StockLevel,
};

use crate::store::{CustomerStore, OrderStore, ProductCatalog, StoreResult};

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Customers
// =============================================================================

#[derive(Default)]
pub struct InMemoryCustomers {
    rows: Mutex<Vec<Customer>>,
}

impl InMemoryCustomers {
    pub fn seed(&self, id: &str, name: &str, email: &str) {
        let now = Utc::now();
        self.rows.lock().unwrap().push(Customer {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            created_at: now,
            updated_at: now,
        });
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rows.lock().unwrap().iter().any(|c| c.id == id)
    }
}

#[async_trait]
impl CustomerStore for InMemoryCustomers {
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Customer>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Customer>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.email == email)
            .cloned())
    }

    async fn create(&self, new: NewCustomer) -> StoreResult<Customer> {
        let now = Utc::now();
        let customer = Customer {
            id: new_id(),
            name: new.name,
            email: new.email,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(customer.clone());
        Ok(customer)
    }
}

// =============================================================================
// Catalog
// =============================================================================

#[derive(Default)]
pub struct InMemoryCatalog {
    rows: Mutex<Vec<Product>>,
}

impl InMemoryCatalog {
    pub fn seed(&self, id: &str, name: &str, price_cents: i64, quantity: i64) {
        let now = Utc::now();
        self.rows.lock().unwrap().push(Product {
            id: id.to_string(),
            name: name.to_string(),
            price_cents,
            quantity,
            created_at: now,
            updated_at: now,
        });
    }

    pub fn quantity_of(&self, id: &str) -> i64 {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.quantity)
            .unwrap_or_else(|| panic!("product {id} not seeded"))
    }

    pub fn set_price(&self, id: &str, price_cents: i64) {
        let mut rows = self.rows.lock().unwrap();
        let product = rows
            .iter_mut()
            .find(|p| p.id == id)
            .unwrap_or_else(|| panic!("product {id} not seeded"));
        product.price_cents = price_cents;
    }
}

#[async_trait]
impl ProductCatalog for InMemoryCatalog {
    async fn find_all_by_id(&self, ids: &[String]) -> StoreResult<Vec<Product>> {
        // Each row appears once even when its id repeats in `ids`.
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect())
    }

    async fn find_by_name(&self, name: &str) -> StoreResult<Option<Product>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.name == name)
            .cloned())
    }

    async fn create(&self, new: NewProduct) -> StoreResult<Product> {
        let now = Utc::now();
        let product = Product {
            id: new_id(),
            name: new.name,
            price_cents: new.price_cents,
            quantity: new.quantity,
            created_at: now,
            updated_at: now,
        };
        self.rows.lock().unwrap().push(product.clone());
        Ok(product)
    }

    async fn update_quantities(&self, levels: &[StockLevel]) -> StoreResult<()> {
        let mut rows = self.rows.lock().unwrap();
        for level in levels {
            if let Some(product) = rows.iter_mut().find(|p| p.id == level.product_id) {
                product.quantity = level.quantity;
                product.updated_at = Utc::now();
            }
        }
        Ok(())
    }
}

// =============================================================================
// Orders
// =============================================================================

#[derive(Default)]
pub struct InMemoryOrders {
    rows: Mutex<Vec<Order>>,
}

impl InMemoryOrders {
    pub fn count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrders {
    async fn create(&self, customer: &Customer, items: Vec<LineItem>) -> StoreResult<Order> {
        let now = Utc::now();
        let order_id = new_id();
        let order = Order {
            id: order_id.clone(),
            customer_id: customer.id.clone(),
            items: items
                .into_iter()
                .map(|item| OrderItem {
                    id: new_id(),
                    order_id: order_id.clone(),
                    product_id: item.product_id,
                    quantity: item.quantity,
                    unit_price_cents: item.unit_price_cents,
                    created_at: now,
                })
                .collect(),
            created_at: now,
        };
        self.rows.lock().unwrap().push(order.clone());
        Ok(order)
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Order>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.id == id)
            .cloned())
    }
}
