//! # Menu Actor
//!
//! The store behind the catalog service. Menu items are the only mutable resource in
//! the system: their price and name change over time, which is why orders snapshot them.
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`MenuItem`]
//! - [`error`] - [`MenuError`]

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::MenuClient;
use crate::model::MenuItem;
use actor_framework::ResourceActor;

/// Creates a new Menu actor and its client.
pub fn new(mailbox_size: usize) -> (ResourceActor<MenuItem>, MenuClient) {
    let (actor, generic_client) = ResourceActor::new(mailbox_size);
    (actor, MenuClient::new(generic_client))
}
