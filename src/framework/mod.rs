//! Generic actor framework for resource management.
//!
//! This module provides the building blocks for type-safe actor systems that manage
//! collections of resource entities: create, upsert, point reads, filtered lists, live
//! queries and custom actions.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by actors
//! - [`ResourceActor`] - Generic actor that owns a store and processes requests sequentially
//! - [`ResourceClient`] - Type-safe handle for sending requests to an actor
//! - [`ActorClient`] - Trait for domain clients wrapping a `ResourceClient`
//! - [`Query`] / [`Subscription`] - Filtered reads and live result sets
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod query;
pub mod subscription;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use query::Query;
pub use subscription::{Subscription, SubscriptionHandle};
