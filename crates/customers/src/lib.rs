//! Customers domain module.
//!
//! Customers live in a [`CustomerStore`]; [`CustomerService`] adds the
//! soft-delete rules and the shopping cart operations, resolving products
//! through a [`shopkeep_products::ProductService`].

pub mod customer;
pub mod error;
pub mod service;
pub mod store;

pub use customer::{Customer, CustomerId, CustomerSnapshot, NewCustomer, SharedCustomer};
pub use error::CustomerError;
pub use service::CustomerService;
pub use store::CustomerStore;
