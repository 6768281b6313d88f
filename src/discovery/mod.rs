//! # Service Discovery
//!
//! - [`registry`] answers "which healthy instances host service X".
//! - [`cache`] turns a service name into a reusable [`Channel`](crate::rpc::Channel),
//!   asking the registry only the first time.

pub mod cache;
pub mod registry;

pub use cache::{ConnectionCache, DiscoveryError};
pub use registry::{InMemoryRegistry, RegistryError, ServiceInstance, ServiceRegistry};
