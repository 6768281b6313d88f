use crate::clients::OrderClient;
use crate::model::{Order, OrderId};
use crate::order_actor::OrderError;
use actor_framework::ActorClient;
use tracing::{instrument, warn};

/// Read side of the order service.
///
/// Orders come back exactly as they were stored: names and prices are the snapshots
/// taken at creation, never re-read from the catalog.
#[derive(Clone)]
pub struct OrderQueryService {
    store: OrderClient,
}

impl OrderQueryService {
    pub fn new(store: OrderClient) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub async fn get_order(&self, id: OrderId) -> Result<Order, OrderError> {
        match self.store.get(id).await {
            Ok(Some(order)) => Ok(order),
            Ok(None) => Err(OrderError::NotFound("order not found".into())),
            Err(e) => {
                warn!(error = %e, "Order lookup failed");
                Err(OrderError::Internal(format!(
                    "failed to fetch order: {}",
                    e.reason()
                )))
            }
        }
    }

    /// Every order with its lines, sorted by id.
    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.store.list().await.map_err(|e| {
            warn!(error = %e, "Order listing failed");
            OrderError::Internal("failed to fetch orders".into())
        })?;
        orders.sort_by_key(|order| order.id.0);
        Ok(orders)
    }
}
