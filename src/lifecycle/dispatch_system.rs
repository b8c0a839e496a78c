use crate::clients::{OrderClient, ShopClient};
use crate::config::AppConfig;
use crate::{order_actor, shop_actor};
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// The runtime orchestrator for shops and orders.
///
/// # Architecture
///
/// - **Shop Actor**: the shop directory, keyed by owner phone
/// - **Order Actor**: orders, their lifecycle and live queries
pub struct DispatchSystem {
    /// Client for the shop directory
    pub shop_client: ShopClient,

    /// Client for the order store; resolves shops through its own `ShopClient`
    pub order_client: OrderClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl DispatchSystem {
    /// Creates the actors, spawns them and returns the connected clients.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(config: &AppConfig) -> Self {
        let (shop_actor, shop_client) = shop_actor::new(config.channel_buffer);
        let (order_actor, order_inner) = order_actor::new(config.channel_buffer);

        let shop_handle = tokio::spawn(shop_actor.run(()));
        let order_handle = tokio::spawn(order_actor.run(()));

        let order_client = OrderClient::new(order_inner, shop_client.clone());
        info!(channel_buffer = config.channel_buffer, "Dispatch system started");

        Self {
            shop_client,
            order_client,
            handles: vec![shop_handle, order_handle],
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Returns the first join error if an actor task panicked.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down system...");

        // The order client holds a shop client clone, so drop it first.
        drop(self.order_client);
        drop(self.shop_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(e);
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
