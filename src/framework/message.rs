//! # Generic Messages
//!
//! The message types exchanged between [`ResourceClient`](crate::framework::ResourceClient)
//! and [`ResourceActor`](crate::framework::ResourceActor).

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::query::Query;
use crate::framework::subscription::Subscription;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # Resource-Oriented Architecture
/// Every actor manages one kind of resource (the [`ActorEntity`]). Instead of ad-hoc messages
/// per operation, requests are standardized around the operations a document store offers:
///
/// - **Create**: store a new resource under a generated id.
/// - **Upsert**: create-or-merge under a caller-supplied id.
/// - **Get**: point read by id.
/// - **List**: one-shot filtered, ordered read.
/// - **Subscribe**: live query; the actor keeps pushing fresh result sets.
/// - **Action**: a custom [`ActorEntity::Action`] (status changes, flag updates, ...).
///
/// Resources are never deleted, so there is no delete request.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Upsert {
        id: T::Id,
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        query: Query<T>,
        respond_to: Response<Vec<T>>,
    },
    Subscribe {
        query: Query<T>,
        respond_to: Response<Subscription<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
