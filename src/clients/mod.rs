//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod order_client;
pub mod shop_client;

pub use order_client::*;
pub use shop_client::*;
