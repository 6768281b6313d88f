//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every stored resource (User, MenuItem,
//! Order, …) must implement to be managed by the generic `ResourceActor`. It specifies
//! associated types for IDs, DTOs and errors, and provides the lifecycle hooks
//! (`from_create_params`, `on_create`, `on_update`).
//!
//! # Architecture Note
//! By defining one contract for all resource types we write the `ResourceActor` loop
//! *once*. Associated types keep payloads apart: a `User` entity requires a `UserCreate`
//! payload, and you can't accidentally send it a `MenuItemCreate`.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`] runs after construction and before insertion. An entity that
//!   owns children (an order and its line items) assigns their ids here.
//!
//! The default implementation does nothing (`Ok(())`).

use crate::sequence::IdSequence;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// Hooks run inside the actor's message loop, one request at a time. Anything done in a
/// hook is therefore atomic with respect to every other request sent to the same actor.
pub trait ActorEntity: Clone + Debug + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Must be convertible from u32 for automatic ID generation.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    ///
    /// Immutable resources use an uninhabited enum here.
    type Update: Send + Sync + Debug;

    /// The error type for this entity.
    ///
    /// # Design Note: Error Granularity
    ///
    /// The framework uses one error enum per resource rather than one per operation.
    /// Clients deal with a single `OrderError`, making pattern matching easier at the
    /// cost of some precision about which operation can return which variant.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full Entity from the ID and Payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after construction, before the entity becomes visible.
    ///
    /// `child_ids` is the actor's second sequence, reserved for records owned by the
    /// entity. Returning an error discards the entity.
    fn on_create(&mut self, _child_ids: &mut IdSequence) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;
}
