//! Wire vocabulary shared by every service.

use crate::model::{
    CreateOrderRequest, MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate, Order, OrderId,
    User, UserCreate, UserId,
};
use serde::{Deserialize, Serialize};

/// A call's payload. Each service answers the subset it implements and reports
/// `Unimplemented` for the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Request {
    GetUser(UserId),
    CreateUser(UserCreate),
    ListUsers,
    GetMenuItem(MenuItemId),
    CreateMenuItem(MenuItemCreate),
    UpdateMenuItem(MenuItemId, MenuItemUpdate),
    ListMenuItems,
    CreateOrder(CreateOrderRequest),
    GetOrder(OrderId),
    ListOrders,
}

impl Request {
    /// Method name, for logs and error messages.
    pub fn method(&self) -> &'static str {
        match self {
            Request::GetUser(_) => "GetUser",
            Request::CreateUser(_) => "CreateUser",
            Request::ListUsers => "ListUsers",
            Request::GetMenuItem(_) => "GetMenuItem",
            Request::CreateMenuItem(_) => "CreateMenuItem",
            Request::UpdateMenuItem(..) => "UpdateMenuItem",
            Request::ListMenuItems => "ListMenuItems",
            Request::CreateOrder(_) => "CreateOrder",
            Request::GetOrder(_) => "GetOrder",
            Request::ListOrders => "ListOrders",
        }
    }
}

/// A successful call's result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Response {
    User(User),
    Users(Vec<User>),
    MenuItem(MenuItem),
    MenuItems(Vec<MenuItem>),
    Order(Order),
    Orders(Vec<Order>),
}
