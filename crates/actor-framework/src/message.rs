//! # Generic Messages
//!
//! Message types exchanged between `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// # Resource-Oriented Architecture
/// Each actor manages one type of resource (the [`ActorEntity`]). Instead of ad-hoc
/// messages per operation, requests are standardized around the lifecycle operations a
/// store offers:
///
/// - **Create**: Uses [`ActorEntity::Create`] to build a new resource. Responds with the
///   fully materialized entity, including every id the actor assigned.
/// - **Get**: Fetches the current state of one resource by ID.
/// - **List**: Fetches every resource the actor holds, in no particular order.
/// - **Update**: Uses [`ActorEntity::Update`] to modify an existing resource.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
}
