//! # Customer Service
//!
//! Customer registration with a uniqueness rule on email.

use std::sync::Arc;

use tracing::{debug, info};

use vendo_core::validation::{validate_email, validate_name};
use vendo_core::{CoreError, Customer, NewCustomer, ValidationError};

use crate::error::ServiceResult;
use crate::store::CustomerStore;

/// Registers customers.
pub struct CustomerService {
    customers: Arc<dyn CustomerStore>,
}

impl CustomerService {
    pub fn new(customers: Arc<dyn CustomerStore>) -> Self {
        CustomerService { customers }
    }

    /// Registers a customer. Fails with a user-facing duplicate error when
    /// the email is already registered.
    pub async fn create_customer(&self, new: NewCustomer) -> ServiceResult<Customer> {
        debug!(email = %new.email, "registering customer");

        validate_name(&new.name).map_err(CoreError::from)?;
        validate_email(&new.email).map_err(CoreError::from)?;

        if self.customers.find_by_email(&new.email).await?.is_some() {
            return Err(CoreError::from(ValidationError::Duplicate {
                field: "email".to_string(),
                value: new.email,
            })
            .into());
        }

        let customer = self.customers.create(new).await?;

        info!(customer_id = %customer.id, "customer registered");
        Ok(customer)
    }
}
