//! # System Lifecycle & Orchestration
//!
//! Starts the shop and order actors, wires their clients together and shuts them down.
//!
//! ## Wiring
//!
//! Neither actor needs a runtime context (`Context = ()`). The dependency lives in the
//! clients: [`OrderClient`](crate::clients::OrderClient) holds a
//! [`ShopClient`](crate::clients::ShopClient) so `dispatch` can resolve the target shop.
//!
//! ```rust,ignore
//! let system = DispatchSystem::new(&AppConfig::default());
//! let shop = system.shop_client.register_shop(&owner, profile).await?;
//! let order = system.order_client.dispatch(&customer, &shop.phone, &list).await?;
//! system.shutdown().await?;
//! ```
//!
//! ## Shutdown
//!
//! Dropping every client closes the actors' channels; each actor drains its queue, logs
//! `Shutdown` and returns. [`DispatchSystem::shutdown`] drops its own clients and awaits the
//! tasks, so clones still held elsewhere keep the actors alive until they are dropped too.

pub mod dispatch_system;
pub mod tracing;

pub use dispatch_system::DispatchSystem;
pub use self::tracing::setup_tracing;
