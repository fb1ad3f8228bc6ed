use shopkeep_core::InMemoryStore;

use crate::product::{NewProduct, Product, ProductId, SharedProduct};

/// In-memory product repository.
///
/// Never fails: lookups of unknown ids yield `None`, mutations of unknown ids
/// do nothing.
#[derive(Debug, Default)]
pub struct ProductStore {
    inner: InMemoryStore<Product>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `product` under the next sequential id.
    pub fn save(&self, product: NewProduct) -> SharedProduct {
        self.inner.save(product)
    }

    /// Live handles of every stored product, active or not.
    pub fn find_all(&self) -> Vec<SharedProduct> {
        self.inner.find_all()
    }

    pub fn find_by_id(&self, id: ProductId) -> Option<SharedProduct> {
        self.inner.find_by_id(id)
    }

    /// Set the price of product `id`. Returns whether the product exists.
    pub fn update(&self, id: ProductId, new_price: f64) -> bool {
        self.inner.update_with(id, |product| product.set_price(new_price))
    }

    /// Physically remove product `id` (purge).
    ///
    /// Soft deletion goes through [`crate::ProductService::delete_by_id`]; this
    /// is for administrative cleanup only. Carts that still hold the handle
    /// keep it.
    pub fn delete_by_id(&self, id: ProductId) -> bool {
        self.inner.delete_by_id(id)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
