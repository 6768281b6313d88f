//! # System Lifecycle
//!
//! Boots every component of the pipeline in-process and tears it down again.
//!
//! ## Boot order
//!
//! 1. **Stores** - one resource actor per service, each in its own Tokio task.
//! 2. **Leaf services** - the user directory and the catalog bind their addresses and
//!    register in the service registry.
//! 3. **Order service** - gets its own [`ConnectionCache`](crate::discovery::ConnectionCache)
//!    and validators, then binds and registers like the others.
//! 4. **Gateway** - a second cache over the same registry.
//!
//! Nothing resolves a dependency during boot. Caches connect on first use, so the
//! order in which services register does not matter to callers.
//!
//! ## Graceful Shutdown
//!
//! 1. Stop the servers. Their services own clones of the store clients.
//! 2. Drop the remaining clients so every actor mailbox closes.
//! 3. Await the actor tasks; each logs its final size on the way out.

pub mod order_system;

pub use order_system::*;
