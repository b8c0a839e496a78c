//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every stored resource (shops, orders) implements
//! to be managed by the generic [`ResourceActor`](crate::framework::ResourceActor). It names
//! the associated types for ids, creation payloads, actions, context and errors, and provides
//! the lifecycle hooks the actor calls while processing requests.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`] runs after construction, before the entity is stored.
//! - [`ActorEntity::on_merge`] runs when an upsert hits an existing entity. The default
//!   overwrites the entity with a freshly constructed one.
//!
//! You only implement these when the defaults do not fit.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// The trait is `#[async_trait]` so hooks can await other actors. The `Context` type is
/// injected into every hook at `run()` time ("late binding" of dependencies).
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity (phone number, UUID string, ...).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create (or merge into) an instance.
    type Create: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g. a status transition).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity. One enum covers every hook and action of the actor.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the id and payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after the entity is constructed and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an upsert targets an entity that already exists.
    async fn on_merge(
        &mut self,
        id: Self::Id,
        params: Self::Create,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        *self = Self::from_create_params(id, params)?;
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    ///
    /// If this returns an error the actor restores the entity to its state before the call,
    /// so a failing action never leaves a partial write behind.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
