//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the in-memory store behind every resource.
//! It implements the "Server" side of the Actor Model, processing messages sequentially
//! and owning its entity map exclusively.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use crate::sequence::IdSequence;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`), the two id
/// sequences and the receiver end of the channel.
///
/// **Concurrency Model**:
/// Each `ResourceActor` processes its own messages *sequentially*. No `Mutex` guards the
/// `store`: exclusive ownership inside the task is enough. Two consequences follow for
/// callers that share one actor from many tasks:
///
/// * id allocation is atomic, no two creates observe the same id;
/// * a create is all-or-nothing, a rejected entity is never inserted.
///
/// # Usage Pattern
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
///
/// #[derive(Clone, Debug)] struct Note { id: u32, text: String }
/// #[derive(Debug)] struct NoteCreate { text: String }
/// #[derive(Debug)] enum NoteUpdate {}
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// impl ActorEntity for Note {
///     type Id = u32;
///     type Create = NoteCreate;
///     type Update = NoteUpdate;
///     type Error = NoteError;
///
///     fn from_create_params(id: u32, params: NoteCreate) -> Result<Self, NoteError> {
///         Ok(Self { id, text: params.text })
///     }
///     fn on_update(&mut self, update: NoteUpdate) -> Result<(), NoteError> { match update {} }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Note>::new(10);
///     tokio::spawn(actor.run());
///
///     let note = client.create(NoteCreate { text: "hi".into() }).await.unwrap();
///     assert_eq!(note.id, 1);
/// }
/// ```
///
/// # Operations
///
/// * **Create**: allocate an id, `from_create_params`, `on_create` (child ids), insert,
///   respond with a clone of the stored entity.
/// * **Get**: clone of the entity, or `None`.
/// * **List**: clones of every entity.
/// * **Update**: `on_update` on the stored entity, respond with the new state.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    ids: IdSequence,
    child_ids: IdSequence,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the mailbox capacity. When it is full, client calls wait.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            ids: IdSequence::new(),
            child_ids: IdSequence::new(),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    pub async fn run(mut self) {
        // "Order" rather than "order_pipeline::model::order::Order"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    match self.create(params) {
                        Ok((id, item)) => {
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(item));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(e));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let items: Vec<T> = self.store.values().cloned().collect();
                    debug!(entity_type, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        // Work on a copy so a rejected update leaves the stored state intact
                        let mut updated = item.clone();
                        if let Err(e) = updated.on_update(update) {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::entity(e)));
                            continue;
                        }
                        *item = updated.clone();
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(updated));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn create(&mut self, params: T::Create) -> Result<(T::Id, T), FrameworkError> {
        let id = T::Id::from(self.ids.next_id());
        let mut item = T::from_create_params(id.clone(), params).map_err(FrameworkError::entity)?;
        item.on_create(&mut self.child_ids).map_err(FrameworkError::entity)?;
        self.store.insert(id.clone(), item.clone());
        Ok((id, item))
    }
}
