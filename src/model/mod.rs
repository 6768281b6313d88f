//! # Domain Model
//!
//! Plain data owned by the three services. Each stored type implements
//! [`ActorEntity`](actor_framework::ActorEntity) in its service's actor module; this
//! module only defines the shapes and their payloads.
//!
//! Ids are `u32` newtypes allocated by the owning actor and displayed as bare numbers,
//! which is also how they appear in rejection messages (`menu item 7 not found`).

pub mod menu;
pub mod order;
pub mod user;

pub use menu::*;
pub use order::*;
pub use user::*;
