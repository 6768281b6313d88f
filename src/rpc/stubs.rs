//! Typed clients over a [`Channel`].

use crate::model::{
    CreateOrderRequest, MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate, Order, OrderId,
    User, UserCreate, UserId,
};
use crate::rpc::{Channel, Request, Response, Status};
use tracing::instrument;

fn unexpected(method: &str, response: &Response) -> Status {
    Status::internal(format!("unexpected response to {method}: {response:?}"))
}

/// Client stub for the user directory.
#[derive(Debug, Clone)]
pub struct UserDirectoryClient {
    channel: Channel,
}

impl UserDirectoryClient {
    pub fn new(channel: Channel) -> Self {
        Self { channel }
    }

    #[instrument(skip(self), fields(peer = self.channel.target()))]
    pub async fn get_user(&self, id: UserId) -> Result<User, Status> {
        match self.channel.unary(Request::GetUser(id)).await? {
            Response::User(user) => Ok(user),
            other => Err(unexpected("GetUser", &other)),
        }
    }

    #[instrument(skip(self), fields(peer = self.channel.target()))]
    pub async fn create_user(&self, params: UserCreate) -> Result<User, Status> {
        match self.channel.unary(Request::CreateUser(params)).await? {
            Response::User(user) => Ok(user),
            other => Err(unexpected("CreateUser", &other)),
        }
    }

    #[instrument(skip(self), fields(peer = self.channel.target()))]
    pub async fn list_users(&self) -> Result<Vec<User>, Status> {
        match self.channel.unary(Request::ListUsers).await? {
            Response::Users(users) => Ok(users),
            other => Err(unexpected("ListUsers", &other)),
        }
    }
}

/// Client stub for the menu catalog.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    channel: Channel,
}

impl CatalogClient {
    pub fn new(channel: Channel) -> Self {
        Self { channel }
    }

    #[instrument(skip(self), fields(peer = self.channel.target()))]
    pub async fn get_menu_item(&self, id: MenuItemId) -> Result<MenuItem, Status> {
        match self.channel.unary(Request::GetMenuItem(id)).await? {
            Response::MenuItem(item) => Ok(item),
            other => Err(unexpected("GetMenuItem", &other)),
        }
    }

    #[instrument(skip(self), fields(peer = self.channel.target()))]
    pub async fn create_menu_item(&self, params: MenuItemCreate) -> Result<MenuItem, Status> {
        match self.channel.unary(Request::CreateMenuItem(params)).await? {
            Response::MenuItem(item) => Ok(item),
            other => Err(unexpected("CreateMenuItem", &other)),
        }
    }

    #[instrument(skip(self), fields(peer = self.channel.target()))]
    pub async fn update_menu_item(
        &self,
        id: MenuItemId,
        update: MenuItemUpdate,
    ) -> Result<MenuItem, Status> {
        match self.channel.unary(Request::UpdateMenuItem(id, update)).await? {
            Response::MenuItem(item) => Ok(item),
            other => Err(unexpected("UpdateMenuItem", &other)),
        }
    }

    #[instrument(skip(self), fields(peer = self.channel.target()))]
    pub async fn list_menu_items(&self) -> Result<Vec<MenuItem>, Status> {
        match self.channel.unary(Request::ListMenuItems).await? {
            Response::MenuItems(items) => Ok(items),
            other => Err(unexpected("ListMenuItems", &other)),
        }
    }
}

/// Client stub for the order service.
#[derive(Debug, Clone)]
pub struct OrderServiceClient {
    channel: Channel,
}

impl OrderServiceClient {
    pub fn new(channel: Channel) -> Self {
        Self { channel }
    }

    #[instrument(skip(self), fields(peer = self.channel.target()))]
    pub async fn create_order(&self, request: CreateOrderRequest) -> Result<Order, Status> {
        match self.channel.unary(Request::CreateOrder(request)).await? {
            Response::Order(order) => Ok(order),
            other => Err(unexpected("CreateOrder", &other)),
        }
    }

    #[instrument(skip(self), fields(peer = self.channel.target()))]
    pub async fn get_order(&self, id: OrderId) -> Result<Order, Status> {
        match self.channel.unary(Request::GetOrder(id)).await? {
            Response::Order(order) => Ok(order),
            other => Err(unexpected("GetOrder", &other)),
        }
    }

    #[instrument(skip(self), fields(peer = self.channel.target()))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, Status> {
        match self.channel.unary(Request::ListOrders).await? {
            Response::Orders(orders) => Ok(orders),
            other => Err(unexpected("ListOrders", &other)),
        }
    }
}
