//! # ActorClient Trait
//!
//! Common interface for resource-specific clients: a typed error, a mapping from
//! [`FrameworkError`], and a default `get` built on the inner [`ResourceClient`].
use crate::framework::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard read operations.
///
/// # Example
///
/// ```rust,ignore
/// #[async_trait]
/// impl ActorClient<Shop> for ShopClient {
///     type Error = ShopError;
///
///     fn inner(&self) -> &ResourceClient<Shop> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         ShopError::Retrieval(e.to_string())
///     }
/// }
///
/// // get() is provided automatically
/// let shop = shop_client.get(ShopId::from("9876543210")).await?;
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: std::error::Error + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }
}
