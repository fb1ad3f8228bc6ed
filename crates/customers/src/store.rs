use shopkeep_core::InMemoryStore;

use crate::customer::{Customer, CustomerId, NewCustomer, SharedCustomer};

/// In-memory customer repository.
///
/// Same contract as [`shopkeep_products::ProductStore`]: absence is tolerated,
/// never reported as an error.
#[derive(Debug, Default)]
pub struct CustomerStore {
    inner: InMemoryStore<Customer>,
}

impl CustomerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save(&self, customer: NewCustomer) -> SharedCustomer {
        self.inner.save(customer)
    }

    pub fn find_all(&self) -> Vec<SharedCustomer> {
        self.inner.find_all()
    }

    pub fn find_by_id(&self, id: CustomerId) -> Option<SharedCustomer> {
        self.inner.find_by_id(id)
    }

    /// Rename customer `id`. Returns whether the customer exists.
    pub fn update(&self, id: CustomerId, new_name: &str) -> bool {
        self.inner.update_with(id, |customer| customer.set_name(new_name))
    }

    /// Physically remove customer `id` (purge, not the soft delete).
    pub fn delete_by_id(&self, id: CustomerId) -> bool {
        self.inner.delete_by_id(id)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
