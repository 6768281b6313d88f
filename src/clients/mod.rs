//! # Store Clients
//!
//! Resource-specific wrappers around [`ResourceClient`](actor_framework::ResourceClient).
//! Each one inherits `get`/`list` from [`ActorClient`](actor_framework::ActorClient) and
//! adds the writes its resource supports, with framework failures mapped into the
//! resource's own error type.

pub mod menu_client;
pub mod order_client;
pub mod user_client;

pub use menu_client::MenuClient;
pub use order_client::OrderClient;
pub use user_client::UserClient;
