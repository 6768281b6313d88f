//! # In-process RPC
//!
//! A small request/response transport that lets the three services talk to each other
//! the way they would over gRPC, without leaving the process.
//!
//! - [`Network`] is the address space: servers [`bind`](Network::bind) an `address:port`
//!   and clients [`connect`](Connector::connect) to a registered instance.
//! - A [`Channel`] is a cloneable handle to one server. Every call is bounded by the
//!   network's call timeout.
//! - [`serve`] runs a [`RpcService`] on a [`Listener`], one task per inbound call.
//! - Failures travel as a gRPC-style [`Status`].
//!
//! The typed stubs in [`stubs`] and the servers in [`services`] are what the rest of the
//! crate uses; [`Request`]/[`Response`] are the wire vocabulary underneath.

pub mod channel;
pub mod message;
pub mod network;
pub mod server;
pub mod services;
pub mod status;
pub mod stubs;

pub use channel::{Call, Channel};
pub use message::{Request, Response};
pub use network::{Connector, Listener, Network, TransportError};
pub use server::{serve, RpcService};
pub use services::{CatalogService, OrderRpcService, UserDirectoryService};
pub use status::{Code, Status};
pub use stubs::{CatalogClient, OrderServiceClient, UserDirectoryClient};
