//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real [`ResourceClient<T>`] whose requests are answered from a
//! queue of expectations instead of a running actor. It lets you test client logic (e.g.
//! `OrderClient::dispatch`) quickly and deterministically, and inject failures that are
//! awkward to provoke with real actors.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **State** | No real state (expectations) | Real state management |
//! | **Use Case** | Logic *around* the client | The actor itself or the full system |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Two styles
//!
//! 1. **Fluent**: [`MockClient`] with `expect_get(..).return_ok(..)` and a final `verify()`.
//! 2. **Channel**: [`create_mock_client`] plus [`expect_create`], [`expect_get`],
//!    [`expect_list`], [`expect_action`] to inspect the payload and answer by hand.
//!
//! ```rust,ignore
//! let mut shops = MockClient::<Shop>::new();
//! shops.expect_get(ShopId::from("555")).return_ok(Some(shop));
//!
//! let order_client = OrderClient::new(order_inner, ShopClient::new(shops.client()));
//! // ... exercise the client ...
//! shops.verify();
//! ```

use crate::framework::client::ResourceClient;
use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the response to give it.
enum Expectation<T: ActorEntity> {
    Get {
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T, FrameworkError>,
    },
    Upsert {
        response: Result<T, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Action {
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Requests must arrive in the order the expectations were queued. A request that does not
/// match the next expectation panics the mock task, which surfaces as
/// [`FrameworkError::ActorDropped`] on the caller's side.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (ResourceRequest::Get { respond_to, .. }, Some(Expectation::Get { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Upsert { respond_to, .. }, Some(Expectation::Upsert { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to, .. }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Action { respond_to, .. }, Some(Expectation::Action { response })) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation.
    pub fn expect_get(&mut self, _id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(|response| Expectation::Get { response })
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(|response| Expectation::Create { response })
    }

    /// Expects an `upsert` operation.
    pub fn expect_upsert(&mut self, _id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(|response| Expectation::Upsert { response })
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::List { response })
    }

    /// Expects an `action` operation.
    pub fn expect_action(&mut self, _id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(|response| Expectation::Action { response })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }

    fn builder<R>(
        &self,
        wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            wrap,
            expectations: self.expectations.clone(),
        }
    }
}

/// Builder that queues the response for one expected request.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    wrap: fn(Result<R, FrameworkError>) -> Expectation<T>,
    expectations: Expectations<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        self.expectations.lock().unwrap().push_back((self.wrap)(Ok(value)));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations.lock().unwrap().push_back((self.wrap)(Err(error)));
    }
}

// =============================================================================
// CHANNEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// # Testing Strategy
/// Instead of spinning up a `ResourceActor`, the test reads requests off `receiver`, asserts
/// on their payloads and answers through the enclosed responder. This simulates success,
/// failure or delays deterministically.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Type alias for the responder half handed out by the `expect_*` helpers.
pub type Responder<R> = oneshot::Sender<Result<R, FrameworkError>>;

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Responder<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Responder<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(crate::framework::Query<T>, Responder<Vec<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::List { query, respond_to }) => Some((query, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Responder<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}
