//! # Product Service
//!
//! Product registration with a uniqueness rule on name.

use std::sync::Arc;

use tracing::{debug, info};

use vendo_core::validation::{validate_initial_quantity, validate_name, validate_price_cents};
use vendo_core::{CoreError, NewProduct, Product, ValidationError};

use crate::error::ServiceResult;
use crate::store::ProductCatalog;

/// Registers products in the catalog.
pub struct ProductService {
    catalog: Arc<dyn ProductCatalog>,
}

impl ProductService {
    pub fn new(catalog: Arc<dyn ProductCatalog>) -> Self {
        ProductService { catalog }
    }

    /// Registers a product. Fails with a user-facing duplicate error when a
    /// product with the same name already exists.
    pub async fn create_product(&self, new: NewProduct) -> ServiceResult<Product> {
        debug!(name = %new.name, price_cents = new.price_cents, "registering product");

        validate_name(&new.name).map_err(CoreError::from)?;
        validate_price_cents(new.price_cents).map_err(CoreError::from)?;
        validate_initial_quantity(new.quantity).map_err(CoreError::from)?;

        if self.catalog.find_by_name(&new.name).await?.is_some() {
            return Err(CoreError::from(ValidationError::Duplicate {
                field: "name".to_string(),
                value: new.name,
            })
            .into());
        }

        let product = self.catalog.create(new).await?;

        info!(product_id = %product.id, name = %product.name, "product registered");
        Ok(product)
    }
}
