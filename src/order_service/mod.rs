//! # Order Service
//!
//! The order-owning service: [`OrderOrchestrator`] places orders after validating them
//! against the user directory and the catalog, and [`OrderQueryService`] reads them back
//! from the local store without calling anyone.

pub mod orchestrator;
pub mod query;

pub use orchestrator::{OrderOrchestrator, Stage};
pub use query::OrderQueryService;

use crate::model::{CreateOrderRequest, Order, OrderId};
use crate::order_actor::OrderError;
use crate::validation::{CatalogValidation, UserValidation};

/// Both halves of the order service behind one handle.
pub struct OrderService<U, C> {
    orchestrator: OrderOrchestrator<U, C>,
    queries: OrderQueryService,
}

impl<U: UserValidation, C: CatalogValidation> OrderService<U, C> {
    pub fn new(orchestrator: OrderOrchestrator<U, C>, queries: OrderQueryService) -> Self {
        Self {
            orchestrator,
            queries,
        }
    }

    pub async fn create_order(&self, request: CreateOrderRequest) -> Result<Order, OrderError> {
        self.orchestrator.create_order(request).await
    }

    pub async fn get_order(&self, id: OrderId) -> Result<Order, OrderError> {
        self.queries.get_order(id).await
    }

    pub async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        self.queries.list_orders().await
    }
}
