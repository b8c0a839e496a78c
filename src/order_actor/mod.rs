//! # Order Actor
//!
//! Owns every order and enforces the lifecycle controller rules:
//!
//! - ids are generated inside the actor (UUID v4)
//! - status changes follow `pending → accepted | rejected`, `accepted → completed`
//! - item availability changes only while `accepted`, one item per action
//! - only the owner of the order's shop may mutate it
//!
//! Because the actor processes messages sequentially, concurrent availability updates on
//! different items of one order are applied one after the other and all survive.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::{Order, OrderId};

/// Creates a new Order actor and its generic client.
///
/// The domain [`OrderClient`](crate::clients::OrderClient) also needs a
/// [`ShopClient`](crate::clients::ShopClient), so wrapping is left to the caller.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor.with_id_generator(OrderId::generate), generic_client)
}
