use serde::{Deserialize, Serialize};

use shopkeep_core::{Draft, Entity, Shared, entity_id};

entity_id!(
    /// Product identifier, assigned by the [`crate::ProductStore`].
    ProductId
);

/// Handle to a stored product, shared between the store and every cart.
pub type SharedProduct = Shared<Product>;

/// A catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    title: String,
    price: f64,
    active: bool,
}

impl Product {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    /// Whether the product is logically present (not soft-deleted).
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Product that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub title: String,
    pub price: f64,
    pub active: bool,
}

impl NewProduct {
    pub fn new(title: impl Into<String>, price: f64) -> Self {
        Self {
            title: title.into(),
            price,
            active: true,
        }
    }

    /// Same draft, stored with the active flag cleared.
    pub fn inactive(mut self) -> Self {
        self.active = false;
        self
    }
}

impl Draft for NewProduct {
    type Entity = Product;

    fn into_entity(self, id: ProductId) -> Product {
        Product {
            id,
            title: self.title,
            price: self.price,
            active: self.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_becomes_product_with_given_id() {
        let product = NewProduct::new("Widget", 9.99).into_entity(ProductId::from_raw(4));

        assert_eq!(product.id(), ProductId::from_raw(4));
        assert_eq!(product.title(), "Widget");
        assert_eq!(product.price(), 9.99);
        assert!(product.is_active());
    }

    #[test]
    fn serializes_with_plain_numeric_id() {
        let product = NewProduct::new("Widget", 2.5)
            .inactive()
            .into_entity(ProductId::from_raw(1));
        let json = serde_json::to_value(&product).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "id": 1, "title": "Widget", "price": 2.5, "active": false })
        );
    }
}
