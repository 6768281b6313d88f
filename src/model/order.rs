use crate::model::{MenuItemId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Status every order is created with. Nothing in this crate transitions it further.
pub const ORDER_STATUS_PENDING: &str = "pending";

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Type-safe identifier for order lines, allocated from the order store's child sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderItemId(pub u32);

impl From<u32> for OrderItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted order together with its lines.
///
/// Orders are immutable: once the store accepts one there is no update path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub user_id: UserId,
    pub status: String,
    pub items: Vec<OrderItem>,
}

/// One line of an order.
///
/// `menu_item_name` and `price` are copied from the catalog when the order is placed and
/// never re-read, so later catalog edits do not change historical orders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub menu_item_id: MenuItemId,
    pub menu_item_name: String,
    pub quantity: u32,
    pub price: f64,
}

/// A validated, priced line waiting to be persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemDraft {
    pub menu_item_id: MenuItemId,
    pub menu_item_name: String,
    pub quantity: u32,
    pub price: f64,
}

/// Payload for persisting a new order. The store assigns the order id and line ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub user_id: UserId,
    pub status: String,
    pub items: Vec<OrderItemDraft>,
}

/// Orders are immutable once created.
#[derive(Debug, Clone)]
pub enum OrderUpdate {}

/// A line of a caller's order request, before validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub menu_item_id: MenuItemId,
    pub quantity: u32,
}

impl OrderLine {
    pub fn new(menu_item_id: impl Into<MenuItemId>, quantity: u32) -> Self {
        Self {
            menu_item_id: menu_item_id.into(),
            quantity,
        }
    }
}

/// What a caller sends to place an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateOrderRequest {
    pub user_id: UserId,
    pub items: Vec<OrderLine>,
}

impl CreateOrderRequest {
    pub fn new(user_id: impl Into<UserId>, items: Vec<OrderLine>) -> Self {
        Self {
            user_id: user_id.into(),
            items,
        }
    }
}

impl Order {
    /// Sum of `price * quantity` over every line.
    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.price * f64::from(item.quantity))
            .sum()
    }
}
