use thiserror::Error;

use shopkeep_core::DomainError;
use shopkeep_products::ProductError;

use crate::customer::CustomerId;

/// Errors raised by [`crate::CustomerService`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CustomerError {
    /// The customer does not exist or has been soft-deleted.
    #[error("customer with id {0} not found")]
    NotFound(CustomerId),

    #[error("cannot save customer: {0}")]
    Save(#[source] DomainError),

    #[error("cannot update customer: {0}")]
    Update(#[source] DomainError),

    /// A product involved in a cart operation could not be resolved.
    #[error(transparent)]
    Product(#[from] ProductError),
}
