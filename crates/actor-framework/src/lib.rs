//! # Actor Framework
//!
//! Building blocks for type-safe, in-memory resource stores driven by the **Actor Model**.
//! Each store is a [`ResourceActor`] that owns its entities outright and is reached only
//! through a cloneable [`ResourceClient`].
//!
//! ## Why an actor per resource?
//!
//! - Isolated state: no shared memory and no locks around the entity map.
//! - Requests are processed one at a time, so id allocation is atomic and a create is
//!   all-or-nothing without any extra synchronization.
//! - Independent resources run in parallel, each in its own Tokio task.
//!
//! **Further Reading**:
//! - [Actor Model (Wikipedia)](https://en.wikipedia.org/wiki/Actor_model)
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the stored type, its payloads and its hooks
//! 2. **Runtime Layer** ([`ResourceActor`]) - message loop and id sequences
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed request/response
//!
//! ## Example
//!
//! ```rust
//! use actor_framework::{ActorEntity, IdSequence, ResourceActor};
//!
//! #[derive(Clone, Debug)]
//! struct Invoice {
//!     id: u32,
//!     lines: Vec<(u32, String)>,
//! }
//!
//! #[derive(Debug)] struct InvoiceCreate { lines: Vec<String> }
//! #[derive(Debug)] enum InvoiceUpdate {}
//! #[derive(Debug, thiserror::Error)] #[error("invoice has no lines")] struct EmptyInvoice;
//!
//! impl ActorEntity for Invoice {
//!     type Id = u32;
//!     type Create = InvoiceCreate;
//!     type Update = InvoiceUpdate;
//!     type Error = EmptyInvoice;
//!
//!     fn from_create_params(id: u32, params: InvoiceCreate) -> Result<Self, EmptyInvoice> {
//!         Ok(Self { id, lines: params.lines.into_iter().map(|l| (0, l)).collect() })
//!     }
//!
//!     fn on_create(&mut self, child_ids: &mut IdSequence) -> Result<(), EmptyInvoice> {
//!         if self.lines.is_empty() {
//!             return Err(EmptyInvoice);
//!         }
//!         for line in &mut self.lines {
//!             line.0 = child_ids.next_id();
//!         }
//!         Ok(())
//!     }
//!
//!     fn on_update(&mut self, update: InvoiceUpdate) -> Result<(), EmptyInvoice> { match update {} }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Invoice>::new(10);
//!     tokio::spawn(actor.run());
//!
//!     let invoice = client
//!         .create(InvoiceCreate { lines: vec!["rent".into(), "power".into()] })
//!         .await
//!         .unwrap();
//!     assert_eq!(invoice.id, 1);
//!     assert_eq!(invoice.lines[1].0, 2);
//!
//!     assert!(client.create(InvoiceCreate { lines: vec![] }).await.is_err());
//!     assert_eq!(client.list().await.unwrap().len(), 1);
//! }
//! ```
//!
//! ## Shutdown
//!
//! An actor stops when the last clone of its client is dropped: `recv()` returns `None`,
//! the loop logs its final size and the task completes.
//!
//! ## Testing
//!
//! The [`mock`] module hands out a real `ResourceClient<T>` answered from scripted
//! expectations, so code that depends on a store can be tested without spawning one.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod sequence;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use sequence::IdSequence;
