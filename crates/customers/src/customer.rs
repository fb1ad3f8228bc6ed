use serde::{Deserialize, Serialize};

use shopkeep_core::{Draft, Entity, Shared, entity_id};
use shopkeep_products::{ProductId, SharedProduct};

entity_id!(
    /// Customer identifier, assigned by the [`crate::CustomerStore`].
    CustomerId
);

/// Handle to a stored customer.
pub type SharedCustomer = Shared<Customer>;

/// A customer and their shopping cart.
///
/// Cart entries are the product store's own handles: duplicates are allowed,
/// order is insertion order.
#[derive(Debug, Clone)]
pub struct Customer {
    id: CustomerId,
    name: String,
    active: bool,
    cart: Vec<SharedProduct>,
}

impl Customer {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Whether the customer is logically present (not soft-deleted).
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn cart(&self) -> &[SharedProduct] {
        &self.cart
    }

    pub fn add_to_cart(&mut self, product: SharedProduct) {
        self.cart.push(product);
    }

    /// Remove one occurrence of `product` (same handle). Returns whether one was found.
    pub fn remove_from_cart(&mut self, product: &SharedProduct) -> bool {
        match self.cart.iter().position(|entry| entry.ptr_eq(product)) {
            Some(index) => {
                self.cart.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
    }

    /// Prices of the cart entries whose product is still active.
    pub fn active_cart_prices(&self) -> impl Iterator<Item = f64> + '_ {
        self.cart.iter().filter_map(|entry| {
            let product = entry.read();
            product.is_active().then_some(product.price())
        })
    }

    pub fn snapshot(&self) -> CustomerSnapshot {
        CustomerSnapshot {
            id: self.id,
            name: self.name.clone(),
            active: self.active,
            cart: self.cart.iter().map(|entry| entry.read().id()).collect(),
        }
    }
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Serializable view of a customer; cart entries are reduced to product ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerSnapshot {
    pub id: CustomerId,
    pub name: String,
    pub active: bool,
    pub cart: Vec<ProductId>,
}

/// Customer that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub active: bool,
}

impl NewCustomer {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            active: true,
        }
    }

    /// Same draft, stored with the active flag cleared.
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}

impl Draft for NewCustomer {
    type Entity = Customer;

    fn into_entity(self, id: CustomerId) -> Customer {
        Customer {
            id,
            name: self.name,
            active: self.active,
            cart: Vec::new(),
        }
    }
}
