//! # Service Error
//!
//! What a service workflow can fail with: a domain error (validation or
//! invariant violation, see `vendo_core::error`) or a store backend failure.

use thiserror::Error;

use vendo_core::CoreError;

use crate::store::StoreError;

/// Errors returned by the service workflows.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A domain rule or input validation failed.
    #[error(transparent)]
    Domain(#[from] CoreError),

    /// A store backend operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ServiceError {
    /// Returns true when the failure is expected and safe to display to the
    /// caller. Store failures and invariant violations are not.
    pub fn is_user_facing(&self) -> bool {
        match self {
            ServiceError::Domain(err) => err.is_user_facing(),
            ServiceError::Store(_) => false,
        }
    }
}

/// Convenience type alias for service operation results.
pub type ServiceResult<T> = Result<T, ServiceError>;
