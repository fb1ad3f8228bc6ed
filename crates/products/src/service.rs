//! Product business rules: validation on save/update and soft deletion.

use std::sync::Arc;

use tracing::{debug, info};

use shopkeep_core::Entity;
use shopkeep_core::error::{require_non_blank, require_valid_amount};
use shopkeep_core::math;

use crate::error::ProductError;
use crate::product::{NewProduct, ProductId, SharedProduct};
use crate::store::ProductStore;

/// Business operations over a [`ProductStore`].
#[derive(Debug, Clone)]
pub struct ProductService {
    store: Arc<ProductStore>,
}

impl ProductService {
    pub fn new(store: Arc<ProductStore>) -> Self {
        Self { store }
    }

    /// Underlying store, e.g. for purging.
    pub fn store(&self) -> &ProductStore {
        &self.store
    }

    /// Validate and store a product. Saved products are always active.
    pub fn save(&self, mut product: NewProduct) -> Result<SharedProduct, ProductError> {
        require_non_blank(&product.title, "product title").map_err(ProductError::Save)?;
        require_valid_amount(product.price, "product price").map_err(ProductError::Save)?;

        product.active = true;
        let saved = self.store.save(product);
        info!(product_id = %saved.read().id(), "product saved");
        Ok(saved)
    }

    pub fn get_all_active_products(&self) -> Vec<SharedProduct> {
        self.store
            .find_all()
            .into_iter()
            .filter(|product| product.read().is_active())
            .collect()
    }

    /// Look up a product that exists and is active.
    pub fn get_active_product_by_id(&self, id: ProductId) -> Result<SharedProduct, ProductError> {
        self.store
            .find_by_id(id)
            .filter(|product| product.read().is_active())
            .ok_or(ProductError::NotFound(id))
    }

    /// Change the price of product `id`.
    ///
    /// Like the store update, an unknown id is silently ignored.
    pub fn update_price(&self, id: ProductId, new_price: f64) -> Result<(), ProductError> {
        require_valid_amount(new_price, "product price").map_err(ProductError::Update)?;

        if self.store.update(id, new_price) {
            debug!(product_id = %id, new_price, "product price updated");
        }
        Ok(())
    }

    /// Soft-delete an active product.
    pub fn delete_by_id(&self, id: ProductId) -> Result<(), ProductError> {
        let product = self.get_active_product_by_id(id)?;
        product.write().set_active(false);
        debug!(product_id = %id, "product deactivated");
        Ok(())
    }

    /// Soft-delete every active product titled exactly `title`.
    pub fn delete_by_title(&self, title: &str) {
        for handle in self.get_all_active_products() {
            let mut product = handle.write();
            if product.title() == title {
                product.set_active(false);
                debug!(product_id = %product.id(), "product deactivated");
            }
        }
    }

    /// Reactivate product `id`; restoring an active product is a no-op.
    pub fn restore_by_id(&self, id: ProductId) -> Result<(), ProductError> {
        let product = self.store.find_by_id(id).ok_or(ProductError::NotFound(id))?;
        product.write().set_active(true);
        debug!(product_id = %id, "product restored");
        Ok(())
    }

    pub fn get_active_products_number(&self) -> usize {
        self.get_all_active_products().len()
    }

    pub fn get_active_products_total_cost(&self) -> f64 {
        math::sum(self.get_all_active_products().iter().map(|product| product.read().price()))
    }

    /// Mean price of active products, `0.0` when there are none.
    pub fn get_active_products_average_price(&self) -> f64 {
        math::average(self.get_all_active_products().iter().map(|product| product.read().price()))
    }
}
