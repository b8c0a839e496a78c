//! # Live Subscriptions
//!
//! A [`Subscription`] is the receiving end of a live query registered with a
//! [`ResourceActor`](crate::framework::ResourceActor). The actor pushes the **complete**
//! current result set (never a delta) right after registration and again after every
//! mutation that touches a matching entity.
//!
//! Consume it either by awaiting [`Subscription::next`] or by handing it a callback with
//! [`Subscription::for_each`], which returns a cancellable [`SubscriptionHandle`].
//!
//! Dropping the subscription (or cancelling the handle) closes the channel; the actor
//! notices the closed channel and releases its subscriber slot on its next mutation.

use std::fmt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Stream of full result-set snapshots for one live query.
pub struct Subscription<T> {
    receiver: mpsc::UnboundedReceiver<Vec<T>>,
}

impl<T: Send + 'static> Subscription<T> {
    pub(crate) fn new(receiver: mpsc::UnboundedReceiver<Vec<T>>) -> Self {
        Self { receiver }
    }

    /// Waits for the next snapshot. Returns `None` once the actor has shut down.
    pub async fn next(&mut self) -> Option<Vec<T>> {
        self.receiver.recv().await
    }

    /// Returns a snapshot that is already queued, without waiting.
    pub fn try_next(&mut self) -> Option<Vec<T>> {
        self.receiver.try_recv().ok()
    }

    /// Delivers every snapshot to `callback` on a background task.
    pub fn for_each<F>(self, mut callback: F) -> SubscriptionHandle
    where
        F: FnMut(Vec<T>) + Send + 'static,
    {
        let mut receiver = self.receiver;
        let task = tokio::spawn(async move {
            while let Some(snapshot) = receiver.recv().await {
                callback(snapshot);
            }
        });
        SubscriptionHandle { task }
    }
}

impl<T> fmt::Debug for Subscription<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

/// Cancellation handle for a callback-driven subscription.
///
/// Cancelling is immediate: no further callbacks start afterwards. A callback that is
/// already running finishes. Dropping the handle cancels as well.
#[derive(Debug)]
pub struct SubscriptionHandle {
    task: JoinHandle<()>,
}

impl SubscriptionHandle {
    pub fn cancel(self) {
        self.task.abort();
    }

    /// `false` once the subscription was cancelled or the actor shut down.
    pub fn is_active(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for SubscriptionHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
