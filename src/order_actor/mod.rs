//! # Order Actor
//!
//! The order service's store. It persists an [`Order`] together with all of its lines
//! as one unit: the order id comes from the actor's entity sequence, the line ids from
//! its child sequence, and an order that breaks a structural invariant is refused
//! before it becomes visible.
//!
//! The actor performs no cross-service checks. Validation against the user directory
//! and the catalog happens earlier, in the
//! [`OrderOrchestrator`](crate::order_service::OrderOrchestrator).
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`], the caller-visible rejection taxonomy

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use actor_framework::ResourceActor;

/// Creates a new Order actor and its client.
pub fn new(mailbox_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(mailbox_size);
    (actor, OrderClient::new(generic_client))
}
