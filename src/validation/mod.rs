//! # Cross-service Validation
//!
//! What the order orchestrator asks of the user directory and the catalog before it
//! persists anything. The traits are the seam; [`RemoteUserValidator`] and
//! [`RemoteCatalogValidator`] are the implementations that go over RPC.
//!
//! Every failure of the remote call itself (remote "not found", closed peer, deadline)
//! collapses into the not-found variant carrying the underlying text. Only a failure to
//! locate the service at all is reported as [`ValidationError::Unavailable`].

pub mod remote;

pub use remote::{RemoteCatalogValidator, RemoteUserValidator};

use crate::model::{MenuItemId, UserId};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The dependency could not be resolved through the connection cache.
    #[error("{0}")]
    Unavailable(String),

    #[error("user not found: {0}")]
    UserNotFound(String),

    #[error("menu item {id} not found: {detail}")]
    ItemNotFound { id: MenuItemId, detail: String },
}

/// The authoritative name and price of a catalog entry at the time it was checked.
#[derive(Debug, Clone, PartialEq)]
pub struct PricedItem {
    pub name: String,
    pub price: f64,
}

#[async_trait]
pub trait UserValidation: Send + Sync {
    async fn validate_user(&self, user_id: UserId) -> Result<(), ValidationError>;
}

#[async_trait]
pub trait CatalogValidation: Send + Sync {
    async fn validate_and_price(&self, item_id: MenuItemId)
        -> Result<PricedItem, ValidationError>;
}
