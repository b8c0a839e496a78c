use shop_dispatch::clients::{OrderClient, ShopClient};
use shop_dispatch::framework::mock::MockClient;
use shop_dispatch::framework::{ActorClient, FrameworkError};
use shop_dispatch::model::{Ingredient, ListType, OrderStatus, Session, Shop, ShopCategory, ShopId, ShoppingList};
use shop_dispatch::order_actor::OrderError;
use shop_dispatch::shop_actor::ShopError;

fn supermarket() -> Shop {
    Shop {
        phone: ShopId::from("555"),
        name: "Daily Needs".to_string(),
        category: ShopCategory::Supermarket,
        location: "FC Road".to_string(),
        coordinates: None,
        owner_name: "Meera".to_string(),
    }
}

/// Real Order actor with a mocked shop directory.
///
/// Pattern 2: Actor + Mocks
/// - Real Order actor (id generation, lifecycle rules, live queries)
/// - Mocked Shop client (isolates the directory)
#[tokio::test]
async fn test_order_actor_with_mocked_directory() {
    let mut shop_mock = MockClient::<Shop>::new();
    // dispatch() resolves the shop once
    shop_mock.expect_get(ShopId::from("555")).return_ok(Some(supermarket()));

    let (order_actor, order_inner) = shop_dispatch::order_actor::new(8);
    let actor_handle = tokio::spawn(order_actor.run(()));
    let order_client = OrderClient::new(order_inner, ShopClient::new(shop_mock.client()));

    let list = ShoppingList {
        vegetable_shop: vec![Ingredient::new("Tomato", 4.0, "pcs")],
        grocery_shop: vec![Ingredient::new("Rice", 0.5, "kg")],
    };
    let customer = Session::customer("Asha", "111");
    let order = order_client
        .dispatch(&customer, &ShopId::from("555"), &list)
        .await
        .expect("Dispatch failed");

    assert_eq!(order.list_type, ListType::Mixed);
    assert_eq!(order.shop_name, "Daily Needs");
    assert_eq!(order.status, OrderStatus::Pending);
    // Generated ids are UUIDs
    assert_eq!(order.id.as_str().len(), 36);

    let retrieved = order_client
        .get(order.id.clone())
        .await
        .expect("Failed to get order")
        .expect("Order not found");
    assert_eq!(retrieved, order);

    shop_mock.verify();

    drop(order_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_directory_failures_surface_as_shop_errors() {
    let mut shop_mock = MockClient::<Shop>::new();
    shop_mock.expect_get(ShopId::from("555")).return_err(FrameworkError::ActorDropped);
    shop_mock.expect_get(ShopId::from("404")).return_ok(None);

    let (order_actor, order_inner) = shop_dispatch::order_actor::new(8);
    let actor_handle = tokio::spawn(order_actor.run(()));
    let order_client = OrderClient::new(order_inner, ShopClient::new(shop_mock.client()));
    let customer = Session::customer("Asha", "111");
    let list = ShoppingList {
        vegetable_shop: vec![Ingredient::new("Tomato", 4.0, "pcs")],
        grocery_shop: vec![],
    };

    let err = order_client
        .dispatch(&customer, &ShopId::from("555"), &list)
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::Shop(ShopError::Retrieval(_))));

    let err = order_client
        .dispatch(&customer, &ShopId::from("404"), &list)
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::Shop(ShopError::NotFound("404".to_string())));

    // Nothing was written
    let orders = order_client
        .watch_customer_orders(&customer)
        .await
        .unwrap()
        .next()
        .await
        .unwrap();
    assert!(orders.is_empty());

    shop_mock.verify();
    drop(order_client);
    actor_handle.await.unwrap();
}
