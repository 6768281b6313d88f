//! # Order Client
//!
//! Provides a high‑level API for interacting with the `Order` actor, the order
//! service's store. Cross-service validation is not done here; see
//! [`OrderOrchestrator`](crate::order_service::OrderOrchestrator).
use crate::model::{Order, OrderCreate};
use crate::order_actor::OrderError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Persists an order and all of its lines as one unit.
    #[instrument(skip(self, params), fields(user_id = %params.user_id, items = params.items.len()))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!(?params, "create_order called");
        self.inner.create(params).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(format!("order {id}")),
            FrameworkError::EntityError(inner) => match inner.downcast::<OrderError>() {
                Ok(err) => *err,
                Err(other) => OrderError::Internal(other.to_string()),
            },
            other => OrderError::Internal(other.to_string()),
        }
    }
}
