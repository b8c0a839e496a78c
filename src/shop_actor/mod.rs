//! # Shop Actor
//!
//! Holds the shop directory. Shops have no dependencies and no custom actions; they are
//! written by upsert keyed by phone number and read by point lookups or full listings.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Shop`]
//! - [`error`] - [`ShopError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use shop_dispatch::model::{Session, ShopCategory, ShopProfile};
//! use shop_dispatch::shop_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = shop_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let owner = Session::owner("Ravi", "9876543210");
//!     let profile = ShopProfile::new("Green Basket", ShopCategory::VegetableShop, "MG Road");
//!     let shop = client.register_shop(&owner, profile).await?;
//!     assert_eq!(shop.phone.as_str(), "9876543210");
//!     Ok(())
//! }
//! ```

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ShopClient;
use crate::framework::ResourceActor;
use crate::model::Shop;

/// Creates a new Shop actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Shop>, ShopClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    let client = ShopClient::new(generic_client);

    (actor, client)
}
