//! # Gateway
//!
//! The single entry point external callers use. It owns its own
//! [`ConnectionCache`], forwards each operation to the service that owns it, and maps
//! failures onto HTTP-style status codes.

use crate::config::ServicesConfig;
use crate::discovery::{ConnectionCache, DiscoveryError};
use crate::model::{
    CreateOrderRequest, MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate, Order, OrderId,
    User, UserCreate, UserId,
};
use crate::rpc::{CatalogClient, Code, OrderServiceClient, Status, UserDirectoryClient};
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    #[error("{service}: {status}")]
    Upstream { service: String, status: Status },
}

impl GatewayError {
    /// The HTTP status a REST front end would answer with.
    pub fn http_status(&self) -> u16 {
        match self {
            GatewayError::Discovery(_) => 503,
            GatewayError::Upstream { status, .. } => match status.code {
                Code::InvalidArgument => 400,
                Code::NotFound => 404,
                Code::Unavailable => 503,
                Code::DeadlineExceeded => 504,
                Code::Internal | Code::Unimplemented => 500,
            },
        }
    }
}

/// A user and a menu item fetched together.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseView {
    pub user: User,
    pub menu_item: MenuItem,
}

/// Logical names of the services the gateway forwards to.
#[derive(Debug, Clone)]
pub struct ServiceNames {
    pub user: String,
    pub menu: String,
    pub order: String,
}

impl From<&ServicesConfig> for ServiceNames {
    fn from(services: &ServicesConfig) -> Self {
        Self {
            user: services.user.name.clone(),
            menu: services.menu.name.clone(),
            order: services.order.name.clone(),
        }
    }
}

pub struct Gateway {
    cache: ConnectionCache,
    services: ServiceNames,
}

impl Gateway {
    pub fn new(cache: ConnectionCache, services: ServiceNames) -> Self {
        Self { cache, services }
    }

    async fn users(&self) -> Result<UserDirectoryClient, GatewayError> {
        Ok(UserDirectoryClient::new(
            self.cache.resolve(&self.services.user).await?,
        ))
    }

    async fn catalog(&self) -> Result<CatalogClient, GatewayError> {
        Ok(CatalogClient::new(
            self.cache.resolve(&self.services.menu).await?,
        ))
    }

    async fn orders(&self) -> Result<OrderServiceClient, GatewayError> {
        Ok(OrderServiceClient::new(
            self.cache.resolve(&self.services.order).await?,
        ))
    }

    fn upstream(service: &str) -> impl Fn(Status) -> GatewayError + '_ {
        move |status| GatewayError::Upstream {
            service: service.to_string(),
            status,
        }
    }

    #[instrument(skip(self))]
    pub async fn create_user(&self, params: UserCreate) -> Result<User, GatewayError> {
        self.users()
            .await?
            .create_user(params)
            .await
            .map_err(Self::upstream(&self.services.user))
    }

    #[instrument(skip(self))]
    pub async fn get_user(&self, id: UserId) -> Result<User, GatewayError> {
        self.users()
            .await?
            .get_user(id)
            .await
            .map_err(Self::upstream(&self.services.user))
    }

    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, GatewayError> {
        self.users()
            .await?
            .list_users()
            .await
            .map_err(Self::upstream(&self.services.user))
    }

    #[instrument(skip(self))]
    pub async fn create_menu_item(&self, params: MenuItemCreate) -> Result<MenuItem, GatewayError> {
        self.catalog()
            .await?
            .create_menu_item(params)
            .await
            .map_err(Self::upstream(&self.services.menu))
    }

    #[instrument(skip(self))]
    pub async fn get_menu_item(&self, id: MenuItemId) -> Result<MenuItem, GatewayError> {
        self.catalog()
            .await?
            .get_menu_item(id)
            .await
            .map_err(Self::upstream(&self.services.menu))
    }

    #[instrument(skip(self))]
    pub async fn update_menu_item(
        &self,
        id: MenuItemId,
        update: MenuItemUpdate,
    ) -> Result<MenuItem, GatewayError> {
        self.catalog()
            .await?
            .update_menu_item(id, update)
            .await
            .map_err(Self::upstream(&self.services.menu))
    }

    #[instrument(skip(self))]
    pub async fn list_menu_items(&self) -> Result<Vec<MenuItem>, GatewayError> {
        self.catalog()
            .await?
            .list_menu_items()
            .await
            .map_err(Self::upstream(&self.services.menu))
    }

    #[instrument(skip(self, request), fields(user_id = %request.user_id))]
    pub async fn create_order(&self, request: CreateOrderRequest) -> Result<Order, GatewayError> {
        let order = self
            .orders()
            .await?
            .create_order(request)
            .await
            .map_err(Self::upstream(&self.services.order))?;
        info!(order_id = %order.id, "Order placed");
        Ok(order)
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<Order, GatewayError> {
        self.orders()
            .await?
            .get_order(id)
            .await
            .map_err(Self::upstream(&self.services.order))
    }

    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, GatewayError> {
        self.orders()
            .await?
            .list_orders()
            .await
            .map_err(Self::upstream(&self.services.order))
    }

    /// Fetches a user and a menu item at the same time.
    ///
    /// Both lookups run to completion. When both fail, the user's failure is reported.
    #[instrument(skip(self))]
    pub async fn purchase_view(
        &self,
        user_id: UserId,
        menu_item_id: MenuItemId,
    ) -> Result<PurchaseView, GatewayError> {
        let (user, menu_item) =
            tokio::join!(self.get_user(user_id), self.get_menu_item(menu_item_id));
        Ok(PurchaseView {
            user: user?,
            menu_item: menu_item?,
        })
    }
}
