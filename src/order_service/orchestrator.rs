//! Order placement across three services.
//!
//! ```text
//! Received ──user ok──▶ UserValidated ──every line ok──▶ ItemsValidated ──stored──▶ Persisted
//!     │                      │                                 │
//!     └──────────────────────┴──────────── Rejected ◀──────────┘
//! ```
//!
//! Lines are checked one at a time in request order and the first bad line ends the
//! attempt. Nothing reaches the store until every check has passed, and the store
//! writes the order with all of its lines in one step, so a rejected or abandoned
//! attempt leaves no trace.
//!
//! There is no reservation on the user or the catalog: an item may change price between
//! its check and the write. The order keeps the price it was checked at.

use crate::clients::OrderClient;
use crate::model::{CreateOrderRequest, Order, OrderCreate, OrderItemDraft, ORDER_STATUS_PENDING};
use crate::order_actor::OrderError;
use crate::validation::{CatalogValidation, UserValidation, ValidationError};
use std::fmt::Display;
use tracing::{debug, info, instrument, warn};

/// How far an order got before it was persisted or rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Received,
    UserValidated,
    ItemsValidated,
    Persisted,
}

impl Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Received => "received",
            Stage::UserValidated => "user_validated",
            Stage::ItemsValidated => "items_validated",
            Stage::Persisted => "persisted",
        };
        f.write_str(name)
    }
}

impl From<ValidationError> for OrderError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::Unavailable(reason) => OrderError::ServiceUnavailable(reason),
            other => OrderError::InvalidArgument(other.to_string()),
        }
    }
}

/// Validates a request against the user directory and the catalog, snapshots the
/// catalog's names and prices, and persists the result.
pub struct OrderOrchestrator<U, C> {
    users: U,
    catalog: C,
    store: OrderClient,
}

impl<U: UserValidation, C: CatalogValidation> OrderOrchestrator<U, C> {
    pub fn new(users: U, catalog: C, store: OrderClient) -> Self {
        Self {
            users,
            catalog,
            store,
        }
    }

    #[instrument(
        skip(self, request),
        fields(user_id = %request.user_id, lines = request.items.len())
    )]
    pub async fn create_order(&self, request: CreateOrderRequest) -> Result<Order, OrderError> {
        debug!(?request, "create_order called");
        let mut stage = Stage::Received;

        self.users
            .validate_user(request.user_id)
            .await
            .map_err(|e| reject(stage, e.into()))?;
        stage = Stage::UserValidated;

        if request.items.is_empty() {
            return Err(reject(
                stage,
                OrderError::InvalidArgument("order must have at least one item".into()),
            ));
        }

        let mut items = Vec::with_capacity(request.items.len());
        for line in &request.items {
            if line.quantity == 0 {
                return Err(reject(
                    stage,
                    OrderError::InvalidArgument("quantity must be greater than 0".into()),
                ));
            }

            let priced = self
                .catalog
                .validate_and_price(line.menu_item_id)
                .await
                .map_err(|e| reject(stage, e.into()))?;
            debug!(menu_item_id = %line.menu_item_id, price = priced.price, "Line priced");

            items.push(OrderItemDraft {
                menu_item_id: line.menu_item_id,
                menu_item_name: priced.name,
                quantity: line.quantity,
                price: priced.price,
            });
        }
        stage = Stage::ItemsValidated;

        let order = self
            .store
            .create_order(OrderCreate {
                user_id: request.user_id,
                status: ORDER_STATUS_PENDING.to_string(),
                items,
            })
            .await
            .map_err(|e| {
                reject(
                    stage,
                    OrderError::Internal(format!("failed to create order: {}", e.reason())),
                )
            })?;
        stage = Stage::Persisted;

        info!(order_id = %order.id, %stage, items = order.items.len(), "Order persisted");
        Ok(order)
    }
}

fn reject(stage: Stage, err: OrderError) -> OrderError {
    warn!(%stage, error = %err, "Order rejected");
    err
}
