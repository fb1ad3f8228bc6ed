//! `shopkeep-core` — domain foundation building blocks.
//!
//! This crate contains the primitives shared by the product and customer
//! modules: sequential identifiers, the entity/draft traits, shared entity
//! handles, compensated price summation and the generic in-memory store that
//! backs every repository.

pub mod entity;
pub mod error;
pub mod id;
pub mod math;
pub mod shared;
pub mod store;

pub use entity::{Draft, Entity};
pub use error::{DomainError, DomainResult};
pub use id::EntityId;
pub use math::CompensatedSum;
pub use shared::Shared;
pub use store::InMemoryStore;
