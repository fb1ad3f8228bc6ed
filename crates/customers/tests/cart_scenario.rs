//! End-to-end cart lifecycle across the customer and product services.

use std::sync::Arc;

use shopkeep_customers::{CustomerError, CustomerId, CustomerService, CustomerStore, NewCustomer};
use shopkeep_products::{NewProduct, ProductId, ProductService, ProductStore};

fn services() -> (CustomerService, ProductService) {
    shopkeep_observability::init();

    let products = ProductService::new(Arc::new(ProductStore::new()));
    let customers = CustomerService::new(Arc::new(CustomerStore::new()), products.clone());
    (customers, products)
}

#[test]
fn soft_delete_and_restore_keep_the_cart() {
    let (customers, products) = services();
    let alice_id = CustomerId::from_raw(1);
    let widget_id = ProductId::from_raw(1);

    let alice = customers.save(NewCustomer::new("Alice")).unwrap();
    let widget = products.save(NewProduct::new("Widget", 9.99)).unwrap();
    assert_eq!(alice.read().snapshot().id, alice_id);
    assert_eq!(widget.read().price(), 9.99);

    customers.add_product_to_customers_cart(alice_id, widget_id).unwrap();
    assert_eq!(customers.get_customers_cart_total_cost(alice_id).unwrap(), 9.99);

    customers.delete_by_id(alice_id).unwrap();
    assert_eq!(
        customers.get_active_customer_by_id(alice_id).unwrap_err(),
        CustomerError::NotFound(alice_id)
    );

    customers.restore_by_id(alice_id).unwrap();
    let restored = customers.get_active_customer_by_id(alice_id).unwrap();
    assert_eq!(restored.read().name(), "Alice");
    assert_eq!(customers.get_customers_cart_total_cost(alice_id).unwrap(), 9.99);
}

#[test]
fn product_changes_are_visible_through_every_cart() {
    let (customers, products) = services();
    customers.save(NewCustomer::new("Alice")).unwrap();
    customers.save(NewCustomer::new("Bob")).unwrap();
    products.save(NewProduct::new("Widget", 10.0)).unwrap();

    let widget_id = ProductId::from_raw(1);
    for raw in [1, 2] {
        customers
            .add_product_to_customers_cart(CustomerId::from_raw(raw), widget_id)
            .unwrap();
    }

    products.update_price(widget_id, 12.0).unwrap();
    for raw in [1, 2] {
        assert_eq!(
            customers.get_customers_cart_total_cost(CustomerId::from_raw(raw)).unwrap(),
            12.0
        );
    }

    products.delete_by_id(widget_id).unwrap();
    for raw in [1, 2] {
        let id = CustomerId::from_raw(raw);
        assert_eq!(customers.get_customers_cart_total_cost(id).unwrap(), 0.0);
        assert_eq!(customers.get_customers_cart_average_price(id).unwrap(), 0.0);
    }
}

#[test]
fn purged_product_stays_in_existing_carts_but_cannot_be_added() {
    let (customers, products) = services();
    customers.save(NewCustomer::new("Alice")).unwrap();
    products.save(NewProduct::new("Widget", 3.0)).unwrap();

    let alice_id = CustomerId::from_raw(1);
    let widget_id = ProductId::from_raw(1);
    customers.add_product_to_customers_cart(alice_id, widget_id).unwrap();

    assert!(products.store().delete_by_id(widget_id));
    assert!(customers.add_product_to_customers_cart(alice_id, widget_id).is_err());
    assert_eq!(customers.get_customers_cart_total_cost(alice_id).unwrap(), 3.0);

    let snapshot = customers
        .get_active_customer_by_id(alice_id)
        .unwrap()
        .read()
        .snapshot();
    assert_eq!(snapshot.cart, vec![widget_id]);
}

#[test]
fn store_is_shareable_across_threads() {
    let (customers, products) = services();
    products.save(NewProduct::new("Widget", 1.0)).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let customers = customers.clone();
            std::thread::spawn(move || {
                let saved = customers.save(NewCustomer::new(format!("Customer {i}"))).unwrap();
                let id = saved.read().snapshot().id;
                customers
                    .add_product_to_customers_cart(id, ProductId::from_raw(1))
                    .unwrap();
                id
            })
        })
        .collect();

    let mut ids: Vec<CustomerId> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 4);
    assert_eq!(customers.get_active_customers_number(), 4);
}
