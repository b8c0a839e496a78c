//! Pure data structures (DTOs) for shops, orders and shopping lists.
//!
//! [`Shop`] and [`Order`] implement [`ActorEntity`](crate::framework::ActorEntity) in their
//! actor modules. JSON field names follow the documents the mobile app stores.

pub mod order;
pub mod session;
pub mod shop;
pub mod shopping;

pub use order::*;
pub use session::*;
pub use shop::*;
pub use shopping::*;
