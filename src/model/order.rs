use crate::model::shop::ShopId;
use crate::model::shopping::Ingredient;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-generated order id (UUID v4 text).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl OrderId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Order lifecycle state.
///
/// ```text
/// pending ──► accepted ──► completed
///    │
///    └──────► rejected
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Accepted,
    Rejected,
    Completed,
}

impl OrderStatus {
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        matches!(
            (self, next),
            (OrderStatus::Pending, OrderStatus::Accepted)
                | (OrderStatus::Pending, OrderStatus::Rejected)
                | (OrderStatus::Accepted, OrderStatus::Completed)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Rejected | OrderStatus::Completed)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Accepted => "accepted",
            OrderStatus::Rejected => "rejected",
            OrderStatus::Completed => "completed",
        };
        f.write_str(label)
    }
}

/// Which part of the shopping list an order carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListType {
    Vegetable,
    Grocery,
    Mixed,
}

impl fmt::Display for ListType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ListType::Vegetable => "Vegetable",
            ListType::Grocery => "Grocery",
            ListType::Mixed => "Mixed",
        };
        f.write_str(label)
    }
}

/// One line of an order. `available` is toggled by the shop owner while packing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub name: String,
    pub quantity: f64,
    pub unit: String,
    #[serde(default)]
    pub available: bool,
}

impl From<Ingredient> for OrderItem {
    fn from(ingredient: Ingredient) -> Self {
        Self {
            name: ingredient.name,
            quantity: ingredient.quantity,
            unit: ingredient.unit,
            available: false,
        }
    }
}

/// A shopping list dispatched to one shop.
///
/// # Actor Framework
/// Implements [`ActorEntity`](crate::framework::ActorEntity) in
/// [`order_actor::entity`](crate::order_actor::entity); status and item flags only change
/// through [`OrderAction`](crate::order_actor::OrderAction).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    pub customer_phone: String,
    pub shop_phone: ShopId,
    pub shop_name: String,
    pub items: Vec<OrderItem>,
    pub list_type: ListType,
    pub status: OrderStatus,
    /// Epoch milliseconds. Only used for ordering.
    pub created_at: i64,
}

impl Order {
    /// Number of items the shop has marked as available.
    pub fn available_count(&self) -> usize {
        self.items.iter().filter(|item| item.available).count()
    }
}

/// Payload for creating an order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_name: String,
    pub customer_phone: String,
    pub shop_phone: ShopId,
    pub shop_name: String,
    pub items: Vec<OrderItem>,
    pub list_type: ListType,
    pub created_at: i64,
}

/// An owner's dashboard, split by status. Rejected orders are not shown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OwnerQueue {
    pub pending: Vec<Order>,
    pub active: Vec<Order>,
    pub completed: Vec<Order>,
}

impl OwnerQueue {
    /// Partitions a delivery, keeping its (newest first) order within each group.
    pub fn from_orders(orders: impl IntoIterator<Item = Order>) -> Self {
        let mut queue = Self::default();
        for order in orders {
            match order.status {
                OrderStatus::Pending => queue.pending.push(order),
                OrderStatus::Accepted => queue.active.push(order),
                OrderStatus::Completed => queue.completed.push(order),
                OrderStatus::Rejected => {}
            }
        }
        queue
    }
}

/// The customer's most recent order sent to `shop`.
pub fn latest_for_shop<'a>(orders: &'a [Order], shop: &ShopId) -> Option<&'a Order> {
    orders
        .iter()
        .filter(|order| &order.shop_phone == shop)
        .max_by_key(|order| order.created_at)
}
