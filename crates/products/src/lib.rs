//! Products domain module.
//!
//! Products live in a [`ProductStore`]; [`ProductService`] layers the
//! soft-delete business rules on top of it. Products handed out by the store
//! are shared handles, so carts referencing a product see its price and
//! activity changes.

pub mod error;
pub mod product;
pub mod service;
pub mod store;

pub use error::ProductError;
pub use product::{NewProduct, Product, ProductId, SharedProduct};
pub use service::ProductService;
pub use store::ProductStore;
