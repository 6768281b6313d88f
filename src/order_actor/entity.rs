//! [`ActorEntity`] implementation for [`Order`].

use crate::model::{Order, OrderCreate, OrderId, OrderItem, OrderItemId, OrderUpdate};
use crate::order_actor::OrderError;
use actor_framework::{ActorEntity, IdSequence};

impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        let items = params
            .items
            .into_iter()
            .map(|draft| OrderItem {
                id: OrderItemId(0),
                order_id: id,
                menu_item_id: draft.menu_item_id,
                menu_item_name: draft.menu_item_name,
                quantity: draft.quantity,
                price: draft.price,
            })
            .collect();

        Ok(Self {
            id,
            user_id: params.user_id,
            status: params.status,
            items,
        })
    }

    /// Refuses empty orders and zero quantities, then numbers the lines.
    ///
    /// Checks run before any line id is drawn, so a refused order leaves no gap in the
    /// line sequence.
    fn on_create(&mut self, child_ids: &mut IdSequence) -> Result<(), OrderError> {
        if self.items.is_empty() {
            return Err(OrderError::InvalidArgument(
                "order must have at least one item".into(),
            ));
        }
        if self.items.iter().any(|item| item.quantity == 0) {
            return Err(OrderError::InvalidArgument(
                "quantity must be greater than 0".into(),
            ));
        }
        for item in &mut self.items {
            item.id = OrderItemId(child_ids.next_id());
        }
        Ok(())
    }

    fn on_update(&mut self, update: OrderUpdate) -> Result<(), OrderError> {
        match update {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MenuItemId, OrderItemDraft, UserId, ORDER_STATUS_PENDING};

    fn draft(menu_item_id: u32, quantity: u32) -> OrderItemDraft {
        OrderItemDraft {
            menu_item_id: MenuItemId(menu_item_id),
            menu_item_name: format!("item {menu_item_id}"),
            quantity,
            price: 1.0,
        }
    }

    fn create(items: Vec<OrderItemDraft>) -> OrderCreate {
        OrderCreate {
            user_id: UserId(1),
            status: ORDER_STATUS_PENDING.to_string(),
            items,
        }
    }

    #[test]
    fn test_lines_get_order_id_and_sequential_ids() {
        let mut seq = IdSequence::new();
        let mut order =
            Order::from_create_params(OrderId(9), create(vec![draft(4, 1), draft(2, 3)])).unwrap();
        order.on_create(&mut seq).unwrap();

        assert_eq!(order.items[0].id, OrderItemId(1));
        assert_eq!(order.items[1].id, OrderItemId(2));
        assert!(order.items.iter().all(|item| item.order_id == OrderId(9)));
        assert_eq!(order.items[0].menu_item_id, MenuItemId(4));
    }

    #[test]
    fn test_empty_order_is_refused() {
        let mut order = Order::from_create_params(OrderId(1), create(vec![])).unwrap();
        let err = order.on_create(&mut IdSequence::new()).unwrap_err();
        assert_eq!(
            err,
            OrderError::InvalidArgument("order must have at least one item".into())
        );
    }

    #[test]
    fn test_zero_quantity_refused_without_drawing_ids() {
        let mut seq = IdSequence::new();
        let mut order =
            Order::from_create_params(OrderId(1), create(vec![draft(1, 2), draft(2, 0)])).unwrap();
        assert!(order.on_create(&mut seq).is_err());
        assert_eq!(seq.next_id(), 1);
    }
}
