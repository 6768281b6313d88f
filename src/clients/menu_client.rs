//! # Menu Client
//!
//! Provides a high‑level API for interacting with the `MenuItem` actor.
use crate::menu_actor::MenuError;
use crate::model::{MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Menu actor.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<MenuItem>,
}

impl MenuClient {
    pub fn new(inner: ResourceClient<MenuItem>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_menu_item(&self, params: MenuItemCreate) -> Result<MenuItem, MenuError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_menu_item(
        &self,
        id: MenuItemId,
        update: MenuItemUpdate,
    ) -> Result<MenuItem, MenuError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<MenuItem> for MenuClient {
    type Error = MenuError;

    fn inner(&self) -> &ResourceClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => MenuError::NotFound(id),
            FrameworkError::EntityError(inner) => match inner.downcast::<MenuError>() {
                Ok(err) => *err,
                Err(other) => MenuError::ActorCommunicationError(other.to_string()),
            },
            other => MenuError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_update_keeps_entity_error_variant() {
        let (actor, client) = crate::menu_actor::new(8);
        tokio::spawn(actor.run());

        let item = client
            .create_menu_item(MenuItemCreate::new("Latte", 3.2))
            .await
            .unwrap();
        let err = client
            .update_menu_item(item.id, MenuItemUpdate::price(-2.0))
            .await
            .unwrap_err();
        assert!(matches!(err, MenuError::ValidationError(_)));

        let err = client
            .update_menu_item(MenuItemId(99), MenuItemUpdate::price(1.0))
            .await
            .unwrap_err();
        assert_eq!(err, MenuError::NotFound("99".into()));
    }
}
