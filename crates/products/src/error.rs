use thiserror::Error;

use shopkeep_core::DomainError;

use crate::product::ProductId;

/// Errors raised by [`crate::ProductService`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProductError {
    /// The product does not exist or has been soft-deleted.
    #[error("product with id {0} not found")]
    NotFound(ProductId),

    #[error("cannot save product: {0}")]
    Save(#[source] DomainError),

    #[error("cannot update product: {0}")]
    Update(#[source] DomainError),
}
