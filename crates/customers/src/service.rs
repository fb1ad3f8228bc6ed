//! Customer business rules and cart operations.

use std::sync::Arc;

use tracing::{debug, info};

use shopkeep_core::Entity;
use shopkeep_core::error::require_non_blank;
use shopkeep_core::math;
use shopkeep_products::ProductId;
use shopkeep_products::ProductService;

use crate::customer::{CustomerId, NewCustomer, SharedCustomer};
use crate::error::CustomerError;
use crate::store::CustomerStore;

/// Business operations over a [`CustomerStore`].
///
/// Customer "deletion" here always means clearing the active flag; purging
/// is left to [`CustomerStore::delete_by_id`].
#[derive(Debug, Clone)]
pub struct CustomerService {
    store: Arc<CustomerStore>,
    products: ProductService,
}

impl CustomerService {
    pub fn new(store: Arc<CustomerStore>, products: ProductService) -> Self {
        Self { store, products }
    }

    pub fn store(&self) -> &CustomerStore {
        &self.store
    }

    pub fn products(&self) -> &ProductService {
        &self.products
    }

    /// Validate and store a customer. Saved customers are always active.
    pub fn save(&self, mut customer: NewCustomer) -> Result<SharedCustomer, CustomerError> {
        require_non_blank(&customer.name, "customer name").map_err(CustomerError::Save)?;

        customer.active = true;
        let saved = self.store.save(customer);
        info!(customer_id = %saved.read().id(), "customer saved");
        Ok(saved)
    }

    pub fn get_all_active_customers(&self) -> Vec<SharedCustomer> {
        self.store
            .find_all()
            .into_iter()
            .filter(|customer| customer.read().is_active())
            .collect()
    }

    /// Look up a customer that exists and is active.
    pub fn get_active_customer_by_id(&self, id: CustomerId) -> Result<SharedCustomer, CustomerError> {
        self.store
            .find_by_id(id)
            .filter(|customer| customer.read().is_active())
            .ok_or(CustomerError::NotFound(id))
    }

    /// Rename customer `id`.
    ///
    /// Only the new name is validated: an unknown id is a silent no-op, and
    /// soft-deleted customers can be renamed.
    pub fn update(&self, id: CustomerId, new_name: &str) -> Result<(), CustomerError> {
        require_non_blank(new_name, "customer name").map_err(CustomerError::Update)?;

        if self.store.update(id, new_name) {
            debug!(customer_id = %id, "customer renamed");
        }
        Ok(())
    }

    /// Soft-delete an active customer.
    pub fn delete_by_id(&self, id: CustomerId) -> Result<(), CustomerError> {
        let customer = self.get_active_customer_by_id(id)?;
        customer.write().set_active(false);
        debug!(customer_id = %id, "customer deactivated");
        Ok(())
    }

    /// Soft-delete every active customer named exactly `name`.
    pub fn delete_by_name(&self, name: &str) {
        for handle in self.get_all_active_customers() {
            let mut customer = handle.write();
            if customer.name() == name {
                customer.set_active(false);
                debug!(customer_id = %customer.id(), "customer deactivated");
            }
        }
    }

    /// Reactivate customer `id` with name and cart intact; restoring an active
    /// customer is a no-op.
    pub fn restore_by_id(&self, id: CustomerId) -> Result<(), CustomerError> {
        let customer = self.store.find_by_id(id).ok_or(CustomerError::NotFound(id))?;
        customer.write().set_active(true);
        debug!(customer_id = %id, "customer restored");
        Ok(())
    }

    pub fn get_active_customers_number(&self) -> usize {
        self.get_all_active_customers().len()
    }

    /// Total price of the active products in an active customer's cart.
    pub fn get_customers_cart_total_cost(&self, customer_id: CustomerId) -> Result<f64, CustomerError> {
        let customer = self.get_active_customer_by_id(customer_id)?;
        let total = math::sum(customer.read().active_cart_prices());
        Ok(total)
    }

    /// Mean price of the active products in an active customer's cart, `0.0`
    /// when there are none.
    pub fn get_customers_cart_average_price(
        &self,
        customer_id: CustomerId,
    ) -> Result<f64, CustomerError> {
        let customer = self.get_active_customer_by_id(customer_id)?;
        let avg = math::average(customer.read().active_cart_prices());
        Ok(avg)
    }

    pub fn add_product_to_customers_cart(
        &self,
        customer_id: CustomerId,
        product_id: ProductId,
    ) -> Result<(), CustomerError> {
        let customer = self.get_active_customer_by_id(customer_id)?;
        let product = self.products.get_active_product_by_id(product_id)?;

        customer.write().add_to_cart(product);
        debug!(customer_id = %customer_id, product_id = %product_id, "product added to cart");
        Ok(())
    }

    /// Remove one occurrence of the product from the cart.
    ///
    /// The product must still be active even though removal itself does not
    /// depend on it. A product that is not in the cart is ignored.
    pub fn remove_product_from_customer_cart(
        &self,
        customer_id: CustomerId,
        product_id: ProductId,
    ) -> Result<(), CustomerError> {
        let customer = self.get_active_customer_by_id(customer_id)?;
        let product = self.products.get_active_product_by_id(product_id)?;

        if customer.write().remove_from_cart(&product) {
            debug!(customer_id = %customer_id, product_id = %product_id, "product removed from cart");
        }
        Ok(())
    }

    pub fn clear_customers_cart(&self, customer_id: CustomerId) -> Result<(), CustomerError> {
        let customer = self.get_active_customer_by_id(customer_id)?;
        customer.write().clear_cart();
        debug!(customer_id = %customer_id, "cart cleared");
        Ok(())
    }
}
