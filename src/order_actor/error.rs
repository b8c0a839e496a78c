//! Error types for the Order actor.

use crate::model::OrderStatus;
use crate::routing::RoutingError;
use crate::shop_actor::ShopError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// Routing the shopping list produced no items.
    #[error(transparent)]
    Routing(#[from] RoutingError),

    /// The target shop could not be resolved.
    #[error(transparent)]
    Shop(#[from] ShopError),

    /// The status change is not an edge of the lifecycle graph.
    #[error("Cannot move order from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// The item index is outside the order's item list.
    #[error("Item index {index} out of range for {len} items")]
    ItemIndex { index: usize, len: usize },

    /// Item availability can only change while the order is accepted.
    #[error("Items cannot be changed while the order is {status}")]
    ItemsLocked { status: OrderStatus },

    /// The session may not perform this operation.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The order data provided is invalid.
    #[error("Order validation error: {0}")]
    Validation(String),

    /// The order store could not be reached.
    #[error("Order store unavailable: {0}")]
    Retrieval(String),
}
