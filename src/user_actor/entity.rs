//! [`ActorEntity`] implementation for [`User`].

use crate::model::{User, UserCreate, UserId, UserUpdate};
use crate::user_actor::UserError;
use actor_framework::ActorEntity;

impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Error = UserError;

    /// Registers a user. A blank name is rejected.
    fn from_create_params(id: UserId, params: UserCreate) -> Result<Self, UserError> {
        if params.name.trim().is_empty() {
            return Err(UserError::ValidationError("name must not be empty".into()));
        }
        Ok(Self {
            id,
            name: params.name,
            email: params.email,
            is_cafe_owner: params.is_cafe_owner,
        })
    }

    fn on_update(&mut self, update: UserUpdate) -> Result<(), UserError> {
        match update {}
    }
}
