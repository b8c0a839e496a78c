//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns a collection of entities,
//! processes requests sequentially, and pushes live query results to subscribers.

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use crate::framework::query::Query;
use crate::framework::subscription::Subscription;
use indexmap::IndexMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

type IdGenerator<T> = Box<dyn Fn() -> <T as ActorEntity>::Id + Send + Sync>;

/// A live query registered by a client.
struct Subscriber<T: ActorEntity> {
    query: Query<T>,
    sender: mpsc::UnboundedSender<Vec<T>>,
}

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`), the live
/// subscribers and the receiver end of the channel.
///
/// **Concurrency Model**:
/// Each actor processes its messages *sequentially* in one Tokio task, so the `store` needs
/// no `Mutex`. Every mutation is a single step of this loop: a read-modify-write done by an
/// action can never interleave with another request for the same actor.
///
/// **Ordering**: the store is an `IndexMap`, so unordered reads return entities in the order
/// they were first stored.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the `actor` (server) and `client` (interface).
/// 2.  **Configure**: `with_id_generator()` if clients will call `create` (server-assigned ids).
/// 3.  **Run**: spawn `actor.run(context)` in a background task.
///
/// # Live Queries
///
/// After every successful `Create`, `Upsert` or `Action`, each subscriber whose query matched
/// the entity before *or* after the change receives the full, ordered result set again.
/// Subscribers whose receiving end was dropped are released at that point.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: IndexMap<T::Id, T>,
    subscribers: Vec<Subscriber<T>>,
    next_id: Option<IdGenerator<T>>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: IndexMap::new(),
            subscribers: Vec::new(),
            next_id: None,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Installs the id generator used by `Create` requests.
    pub fn with_id_generator(mut self, next_id: impl Fn() -> T::Id + Send + Sync + 'static) -> Self {
        self.next_id = Some(Box::new(next_id));
        self
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This allows entities
    /// to reach dependencies created *after* the actor was instantiated.
    pub async fn run(mut self, context: T::Context) {
        // Just the type name ("Order" rather than "shop_dispatch::model::order::Order")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let Some(next_id) = &self.next_id else {
                        warn!(entity_type, "Create without id generator");
                        let _ = respond_to.send(Err(FrameworkError::NoIdGenerator));
                        continue;
                    };
                    let id = next_id();

                    let mut item = match T::from_create_params(id.clone(), params) {
                        Ok(item) => item,
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                            continue;
                        }
                    };
                    if let Err(e) = item.on_create(&context).await {
                        warn!(entity_type, error = %e, "on_create failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.insert(id.clone(), item.clone());
                    info!(entity_type, %id, size = self.store.len(), "Created");
                    self.publish(None, &item);
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Upsert {
                    id,
                    params,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?params, "Upsert");
                    let result = match self.store.get(&id).cloned() {
                        Some(before) => {
                            let mut item = before.clone();
                            let merged = item.on_merge(id.clone(), params, &context).await;
                            merged.map(|()| (Some(before), item))
                        }
                        None => match T::from_create_params(id.clone(), params) {
                            Ok(mut item) => {
                                let created = item.on_create(&context).await;
                                created.map(|()| (None, item))
                            }
                            Err(e) => Err(e),
                        },
                    };
                    match result {
                        Ok((before, item)) => {
                            self.store.insert(id.clone(), item.clone());
                            info!(entity_type, %id, merged = before.is_some(), size = self.store.len(), "Upserted");
                            self.publish(before.as_ref(), &item);
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Upsert failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { query, respond_to } => {
                    let items = query.evaluate(self.store.values());
                    debug!(entity_type, ?query, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Subscribe { query, respond_to } => {
                    let (sender, receiver) = mpsc::unbounded_channel();
                    // The first delivery is the current result set.
                    let _ = sender.send(query.evaluate(self.store.values()));
                    self.subscribers.push(Subscriber { query, sender });
                    info!(entity_type, subscribers = self.subscribers.len(), "Subscribed");
                    let _ = respond_to.send(Ok(Subscription::new(receiver)));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(item) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let before = item.clone();
                    let outcome = item.handle_action(action, &context).await;
                    match outcome {
                        Ok(result) => {
                            let after = item.clone();
                            info!(entity_type, %id, "Action ok");
                            self.publish(Some(&before), &after);
                            let _ = respond_to.send(Ok(result));
                        }
                        Err(e) => {
                            // No partial writes: restore the pre-action state.
                            *item = before;
                            warn!(entity_type, %id, error = %e, "Action failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    /// Re-delivers full result sets to every subscriber affected by a change.
    fn publish(&mut self, before: Option<&T>, after: &T) {
        let store = &self.store;
        self.subscribers.retain(|subscriber| {
            if subscriber.sender.is_closed() {
                return false;
            }
            let affected = subscriber.query.matches(after)
                || before.is_some_and(|prev| subscriber.query.matches(prev));
            if !affected {
                return true;
            }
            subscriber
                .sender
                .send(subscriber.query.evaluate(store.values()))
                .is_ok()
        });
    }
}
