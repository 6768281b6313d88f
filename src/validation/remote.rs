use crate::discovery::ConnectionCache;
use crate::model::{MenuItemId, UserId};
use crate::rpc::{CatalogClient, UserDirectoryClient};
use crate::validation::{CatalogValidation, PricedItem, UserValidation, ValidationError};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Checks users against the user directory.
pub struct RemoteUserValidator {
    cache: Arc<ConnectionCache>,
    service: String,
}

impl RemoteUserValidator {
    pub fn new(cache: Arc<ConnectionCache>, service: impl Into<String>) -> Self {
        Self {
            cache,
            service: service.into(),
        }
    }
}

#[async_trait]
impl UserValidation for RemoteUserValidator {
    #[instrument(skip(self), fields(service = %self.service))]
    async fn validate_user(&self, user_id: UserId) -> Result<(), ValidationError> {
        let channel = self
            .cache
            .resolve(&self.service)
            .await
            .map_err(|e| ValidationError::Unavailable(e.to_string()))?;

        let user = UserDirectoryClient::new(channel)
            .get_user(user_id)
            .await
            .map_err(|status| ValidationError::UserNotFound(status.to_string()))?;
        debug!(name = %user.name, "User exists");
        Ok(())
    }
}

/// Checks and prices menu items against the catalog.
pub struct RemoteCatalogValidator {
    cache: Arc<ConnectionCache>,
    service: String,
}

impl RemoteCatalogValidator {
    pub fn new(cache: Arc<ConnectionCache>, service: impl Into<String>) -> Self {
        Self {
            cache,
            service: service.into(),
        }
    }
}

#[async_trait]
impl CatalogValidation for RemoteCatalogValidator {
    #[instrument(skip(self), fields(service = %self.service))]
    async fn validate_and_price(
        &self,
        item_id: MenuItemId,
    ) -> Result<PricedItem, ValidationError> {
        let channel = self
            .cache
            .resolve(&self.service)
            .await
            .map_err(|e| ValidationError::Unavailable(e.to_string()))?;

        let item = CatalogClient::new(channel)
            .get_menu_item(item_id)
            .await
            .map_err(|status| ValidationError::ItemNotFound {
                id: item_id,
                detail: status.to_string(),
            })?;
        debug!(name = %item.name, price = item.price, "Item priced");
        Ok(PricedItem {
            name: item.name,
            price: item.price,
        })
    }
}
