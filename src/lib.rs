//! # Shop Dispatch
//!
//! > **Send a recipe's shopping list to a shop nearby, and follow it until it is packed.**
//!
//! This crate is the order core behind a recipe app: customers see registered shops sorted by
//! distance, dispatch the part of their shopping list a shop can serve, and watch the order
//! move through `pending → accepted → completed` while the owner ticks off items.
//!
//! ## Architecture Notes
//!
//! ### 1. One actor per store
//! Shops and orders each live in a [`ResourceActor`](framework::ResourceActor) running in its
//! own Tokio task. The actor processes messages sequentially, so the availability of two
//! items can be updated concurrently without losing either write.
//!
//! ### 2. Live queries
//! Clients subscribe with a filter and an ordering. The actor pushes the complete result set
//! on subscription and after every change that touches it. See
//! [`Subscription`](framework::Subscription).
//!
//! ### 3. Explicit sessions
//! Every controller entry point takes a [`Session`](model::Session). Only customers dispatch
//! orders; only the owner of the target shop moves an order or marks items.
//!
//! ### 4. Type-safe errors
//! Each actor defines its own error type ([`ShopError`](shop_actor::ShopError),
//! [`OrderError`](order_actor::OrderError)). Entity errors travel through the framework boxed
//! and are downcast back in the clients.
//!
//! ## Module Tour
//!
//! - [`framework`]: the generic actor, client, queries and subscriptions, plus test mocks.
//! - [`geo`]: haversine distances and distance labels.
//! - [`routing`]: which part of a shopping list a shop receives.
//! - [`model`]: shops, orders, sessions and shopping lists.
//! - [`shop_actor`], [`order_actor`]: the two `ActorEntity` implementations.
//! - [`clients`]: [`ShopClient`](clients::ShopClient) and [`OrderClient`](clients::OrderClient).
//! - [`lifecycle`]: [`DispatchSystem`](lifecycle::DispatchSystem) and tracing setup.
//! - [`config`]: environment configuration.
//!
//! ### Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! DISPATCH_SHOPPING_LIST=list.json RUST_LOG=debug cargo run
//! ```

pub mod clients;
pub mod config;
pub mod framework;
pub mod geo;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod routing;
pub mod shop_actor;
