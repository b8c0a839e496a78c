//! # Order Client
//!
//! The order lifecycle controller as seen by the app: customers dispatch shopping lists,
//! shop owners move orders through their lifecycle and tick off items, and both sides hold
//! live views of the orders that concern them.
//!
//! Every entry point takes the acting [`Session`] explicitly. Role checks that do not need
//! the stored order happen here; checks against the order (shop ownership, lifecycle) happen
//! inside the Order actor.
use crate::clients::ShopClient;
use crate::framework::{ActorClient, FrameworkError, Query, ResourceClient, Subscription, SubscriptionHandle};
use crate::model::{Order, OrderCreate, OrderId, OrderStatus, Session, Shop, ShopId, ShoppingList};
use crate::order_actor::{OrderAction, OrderError};
use crate::routing::{route_list, RoutedList};
use async_trait::async_trait;
use std::cmp::Ordering;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
    shops: ShopClient,
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            e if e.is_unreachable() => OrderError::Retrieval(e.to_string()),
            e => e
                .downcast_entity::<OrderError>()
                .unwrap_or_else(|e| OrderError::Retrieval(e.to_string())),
        }
    }
}

fn newest_first(a: &Order, b: &Order) -> Ordering {
    b.created_at.cmp(&a.created_at)
}

fn require_customer(session: &Session) -> Result<(), OrderError> {
    if session.is_customer() {
        Ok(())
    } else {
        Err(OrderError::Unauthorized(format!("{} is not a customer", session.phone)))
    }
}

fn require_owner(session: &Session) -> Result<(), OrderError> {
    if session.is_owner() {
        Ok(())
    } else {
        Err(OrderError::Unauthorized(format!("{} is not a shop owner", session.phone)))
    }
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>, shops: ShopClient) -> Self {
        Self { inner, shops }
    }

    /// Stores a new `pending` order for `shop` holding the routed items.
    #[instrument(skip(self, customer, shop, routed), fields(customer = %customer.phone, shop = %shop.phone))]
    pub async fn create_order(&self, customer: &Session, shop: &Shop, routed: RoutedList) -> Result<Order, OrderError> {
        require_customer(customer)?;
        debug!(?routed, "create_order called");

        let (items, list_type) = routed.into_parts();
        let params = OrderCreate {
            customer_name: customer.name.clone(),
            customer_phone: customer.phone.clone(),
            shop_phone: shop.phone.clone(),
            shop_name: shop.name.clone(),
            items,
            list_type,
            created_at: chrono::Utc::now().timestamp_millis(),
        };

        let order = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(order_id = %order.id, list_type = %order.list_type, items = order.items.len(), "Order sent");
        Ok(order)
    }

    /// Routes `list` for the shop's category and sends the result to the shop.
    ///
    /// An empty sub-list fails with [`OrderError::Routing`] before anything is written.
    #[instrument(skip(self, customer, list), fields(customer = %customer.phone))]
    pub async fn dispatch(&self, customer: &Session, shop: &ShopId, list: &ShoppingList) -> Result<Order, OrderError> {
        require_customer(customer)?;
        let shop = self.shops.shop(shop).await?;
        let routed = route_list(list, shop.category)?;
        self.create_order(customer, &shop, routed).await
    }

    /// Moves an order to `to`. Only the owner of the order's shop may do this.
    #[instrument(skip(self, session), fields(by = %session.phone))]
    pub async fn transition(&self, session: &Session, id: &OrderId, to: OrderStatus) -> Result<Order, OrderError> {
        let action = OrderAction::Transition {
            by: session.clone(),
            to,
        };
        let order = self
            .inner
            .perform_action(id.clone(), action)
            .await
            .map_err(Self::map_error)?;
        info!(status = %order.status, "Order status changed");
        Ok(order)
    }

    pub async fn accept(&self, session: &Session, id: &OrderId) -> Result<Order, OrderError> {
        self.transition(session, id, OrderStatus::Accepted).await
    }

    pub async fn reject(&self, session: &Session, id: &OrderId) -> Result<Order, OrderError> {
        self.transition(session, id, OrderStatus::Rejected).await
    }

    pub async fn complete(&self, session: &Session, id: &OrderId) -> Result<Order, OrderError> {
        self.transition(session, id, OrderStatus::Completed).await
    }

    /// Marks one item as available or not. Only while the order is `accepted`.
    ///
    /// The update is a single keyed step inside the actor, so concurrent calls for different
    /// items of the same order all persist.
    #[instrument(skip(self, session), fields(by = %session.phone))]
    pub async fn set_item_availability(
        &self,
        session: &Session,
        id: &OrderId,
        index: usize,
        available: bool,
    ) -> Result<Order, OrderError> {
        let action = OrderAction::SetItemAvailability {
            by: session.clone(),
            index,
            available,
        };
        self.inner
            .perform_action(id.clone(), action)
            .await
            .map_err(Self::map_error)
    }

    /// Fetches an order, failing with [`OrderError::NotFound`] when it does not exist.
    #[instrument(skip(self))]
    pub async fn order(&self, id: &OrderId) -> Result<Order, OrderError> {
        self.get(id.clone())
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    /// Live view of every order sent to the owner's shop, newest first.
    #[instrument(skip(self, owner), fields(shop = %owner.phone))]
    pub async fn watch_shop_orders(&self, owner: &Session) -> Result<Subscription<Order>, OrderError> {
        require_owner(owner)?;
        let shop = ShopId::from(owner.phone.as_str());
        let query = Query::filter(move |order: &Order| order.shop_phone == shop).sorted_by(newest_first);
        self.inner.subscribe(query).await.map_err(Self::map_error)
    }

    /// Live view of every order the session placed, newest first.
    #[instrument(skip(self, session), fields(customer = %session.phone))]
    pub async fn watch_customer_orders(&self, session: &Session) -> Result<Subscription<Order>, OrderError> {
        let phone = session.phone.clone();
        let query = Query::filter(move |order: &Order| order.customer_phone == phone).sorted_by(newest_first);
        self.inner.subscribe(query).await.map_err(Self::map_error)
    }

    /// Calls `callback` with the owner's full order list now and after every change to it.
    pub async fn subscribe_shop_orders<F>(&self, owner: &Session, callback: F) -> Result<SubscriptionHandle, OrderError>
    where
        F: FnMut(Vec<Order>) + Send + 'static,
    {
        Ok(self.watch_shop_orders(owner).await?.for_each(callback))
    }

    /// Calls `callback` with the customer's full order list now and after every change to it.
    pub async fn subscribe_customer_orders<F>(
        &self,
        session: &Session,
        callback: F,
    ) -> Result<SubscriptionHandle, OrderError>
    where
        F: FnMut(Vec<Order>) + Send + 'static,
    {
        Ok(self.watch_customer_orders(session).await?.for_each(callback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, expect_action, expect_create, MockClient};
    use crate::framework::ActorEntity;
    use crate::model::{Ingredient, ListType, ShopCategory};
    use crate::routing::RoutingError;
    use crate::shop_actor::ShopError;

    fn bakery() -> Shop {
        Shop {
            phone: ShopId::from("555"),
            name: "Daily Bread".to_string(),
            category: ShopCategory::Bakery,
            location: "Station Road".to_string(),
            coordinates: None,
            owner_name: "Meera".to_string(),
        }
    }

    fn vegetables_only() -> ShoppingList {
        ShoppingList {
            vegetable_shop: vec![Ingredient::new("Tomato", 4.0, "pcs")],
            grocery_shop: vec![],
        }
    }

    #[tokio::test]
    async fn dispatch_with_empty_sub_list_writes_nothing() {
        let mut shops = MockClient::<Shop>::new();
        shops.expect_get(ShopId::from("555")).return_ok(Some(bakery()));
        // No order expectations: a create request would panic the mock.
        let orders = MockClient::<Order>::new();
        let client = OrderClient::new(orders.client(), ShopClient::new(shops.client()));

        let err = client
            .dispatch(&Session::customer("Asha", "111"), &ShopId::from("555"), &vegetables_only())
            .await
            .unwrap_err();
        assert_eq!(err, OrderError::Routing(RoutingError::EmptyList(ListType::Grocery)));
        shops.verify();
        orders.verify();
    }

    #[tokio::test]
    async fn dispatch_to_unknown_shop() {
        let mut shops = MockClient::<Shop>::new();
        shops.expect_get(ShopId::from("999")).return_ok(None);
        let orders = MockClient::<Order>::new();
        let client = OrderClient::new(orders.client(), ShopClient::new(shops.client()));

        let err = client
            .dispatch(&Session::customer("Asha", "111"), &ShopId::from("999"), &vegetables_only())
            .await
            .unwrap_err();
        assert_eq!(err, OrderError::Shop(ShopError::NotFound("999".to_string())));
    }

    #[tokio::test]
    async fn owners_cannot_place_orders() {
        let shops = MockClient::<Shop>::new();
        let orders = MockClient::<Order>::new();
        let client = OrderClient::new(orders.client(), ShopClient::new(shops.client()));

        let err = client
            .dispatch(&Session::owner("Meera", "555"), &ShopId::from("555"), &vegetables_only())
            .await
            .unwrap_err();
        assert!(matches!(err, OrderError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn create_order_denormalizes_the_shop() {
        let (inner, mut receiver) = create_mock_client::<Order>(4);
        let client = OrderClient::new(inner, ShopClient::new(MockClient::<Shop>::new().client()));

        let list = ShoppingList {
            vegetable_shop: vec![],
            grocery_shop: vec![Ingredient::new("Flour", 1.0, "kg")],
        };
        let routed = route_list(&list, ShopCategory::Bakery).unwrap();
        let task = tokio::spawn(async move {
            client
                .create_order(&Session::customer("Asha", "111"), &bakery(), routed)
                .await
        });

        let (params, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(params.customer_phone, "111");
        assert_eq!(params.shop_phone, ShopId::from("555"));
        assert_eq!(params.shop_name, "Daily Bread");
        assert_eq!(params.list_type, ListType::Grocery);
        assert!(params.created_at > 0);

        let order = Order::from_create_params(OrderId::from("o1"), params).unwrap();
        responder.send(Ok(order)).unwrap();
        let order = task.await.unwrap().unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[tokio::test]
    async fn entity_errors_come_back_typed() {
        let (inner, mut receiver) = create_mock_client::<Order>(4);
        let client = OrderClient::new(inner, ShopClient::new(MockClient::<Shop>::new().client()));

        let task = tokio::spawn(async move {
            client
                .complete(&Session::owner("Meera", "555"), &OrderId::from("o1"))
                .await
        });

        let (id, action, responder) = expect_action(&mut receiver).await.expect("Expected Action request");
        assert_eq!(id, OrderId::from("o1"));
        assert!(matches!(action, OrderAction::Transition { to: OrderStatus::Completed, .. }));
        let invalid = OrderError::InvalidTransition {
            from: OrderStatus::Pending,
            to: OrderStatus::Completed,
        };
        responder.send(Err(FrameworkError::EntityError(Box::new(invalid.clone())))).unwrap();

        assert_eq!(task.await.unwrap().unwrap_err(), invalid);
    }

    #[tokio::test]
    async fn customers_cannot_watch_shop_queues() {
        let client = OrderClient::new(
            MockClient::<Order>::new().client(),
            ShopClient::new(MockClient::<Shop>::new().client()),
        );
        let err = client.watch_shop_orders(&Session::customer("Asha", "111")).await.unwrap_err();
        assert!(matches!(err, OrderError::Unauthorized(_)));
    }
}
