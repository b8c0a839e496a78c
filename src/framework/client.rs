//! # Generic Client
//!
//! This module defines the generic client for communicating with actors.

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::{ResourceRequest, Response};
use crate::framework::query::Query;
use crate::framework::subscription::Subscription;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a `ResourceActor`.
///
/// It forwards requests over a Tokio mpsc channel and awaits the reply on a oneshot channel.
/// The client holds only a sender, so cloning is cheap and clones can be shared across tasks.
///
/// * A closed request channel maps to [`FrameworkError::ActorClosed`].
/// * A dropped reply channel maps to [`FrameworkError::ActorDropped`].
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn call<R>(
        &self,
        request: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(request(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Stores a new entity under a generated id and returns it.
    pub async fn create(&self, params: T::Create) -> Result<T, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    /// Creates the entity under `id`, or merges `params` into the existing one.
    pub async fn upsert(&self, id: T::Id, params: T::Create) -> Result<T, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Upsert {
            id,
            params,
            respond_to,
        })
        .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    pub async fn list(&self, query: Query<T>) -> Result<Vec<T>, FrameworkError> {
        self.call(|respond_to| ResourceRequest::List { query, respond_to })
            .await
    }

    /// Registers a live query. The returned subscription already holds the current result set.
    pub async fn subscribe(&self, query: Query<T>) -> Result<Subscription<T>, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Subscribe { query, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        self.call(|respond_to| ResourceRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }
}
