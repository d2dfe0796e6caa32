//! # Customer Repository
//!
//! Database operations for customers.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use vendo_core::{Customer, NewCustomer};
use vendo_services::store::{CustomerStore, StoreResult};

use crate::error::DbResult;
use crate::repository::generate_id;

const CUSTOMER_COLUMNS: &str = "id, name, email, created_at, updated_at";

/// Repository for customer database operations.
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }

    /// Gets a customer by ID.
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    /// Gets a customer by email.
    pub async fn get_by_email(&self, email: &str) -> DbResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(&format!(
            "SELECT {CUSTOMER_COLUMNS} FROM customers WHERE email = ?1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    /// Inserts a new customer with generated id and timestamps.
    ///
    /// ## Errors
    /// `DbError::UniqueViolation` when the email is already registered.
    pub async fn insert(&self, new: NewCustomer) -> DbResult<Customer> {
        let now = Utc::now();
        let customer = Customer {
            id: generate_id(),
            name: new.name,
            email: new.email,
            created_at: now,
            updated_at: now,
        };

        debug!(id = %customer.id, email = %customer.email, "Inserting customer");

        sqlx::query(
            "INSERT INTO customers (id, name, email, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )
        .bind(&customer.id)
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(customer.created_at)
        .bind(customer.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(customer)
    }
}

#[async_trait]
impl CustomerStore for CustomerRepository {
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Customer>> {
        Ok(self.get_by_id(id).await?)
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Customer>> {
        Ok(self.get_by_email(email).await?)
    }

    async fn create(&self, new: NewCustomer) -> StoreResult<Customer> {
        Ok(self.insert(new).await?)
    }
}
