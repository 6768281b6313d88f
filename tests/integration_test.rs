use order_pipeline::config::Config;
use order_pipeline::gateway::GatewayError;
use order_pipeline::lifecycle::OrderSystem;
use order_pipeline::model::{
    CreateOrderRequest, MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate, OrderLine, User,
    UserCreate, UserId,
};
use order_pipeline::rpc::Code;
use std::sync::Arc;

async fn seeded() -> (OrderSystem, User, MenuItem) {
    let system = OrderSystem::start(Config::default())
        .await
        .expect("Failed to start system");
    let user = system
        .gateway
        .create_user(UserCreate::new("Alice", "alice@example.com"))
        .await
        .expect("Failed to create user");
    let item = system
        .gateway
        .create_menu_item(MenuItemCreate::new("Espresso", 2.50))
        .await
        .expect("Failed to create menu item");
    (system, user, item)
}

fn upstream_code(err: &GatewayError) -> Code {
    match err {
        GatewayError::Upstream { status, .. } => status.code,
        GatewayError::Discovery(e) => panic!("unexpected discovery failure: {e}"),
    }
}

/// The worked example: user 1, item 1 at 2.50, two of them.
#[tokio::test]
async fn test_full_order_system_integration() {
    let (system, user, item) = seeded().await;
    assert_eq!(user.id, UserId(1));

    let order = system
        .gateway
        .create_order(CreateOrderRequest::new(1, vec![OrderLine::new(1, 2)]))
        .await
        .expect("Failed to create order");

    assert_eq!(order.status, "pending");
    assert_eq!(order.user_id, user.id);
    assert_eq!(order.items.len(), 1);
    let line = &order.items[0];
    assert_eq!(line.menu_item_id, item.id);
    assert_eq!(line.menu_item_name, "Espresso");
    assert_eq!(line.quantity, 2);
    assert_eq!(line.price, 2.50);
    assert_eq!(line.order_id, order.id);
    assert_eq!(order.total(), 5.0);

    system.shutdown().await.expect("Failed to shutdown");
}

#[tokio::test]
async fn test_lines_keep_request_order() {
    let (system, user, espresso) = seeded().await;
    let croissant = system
        .gateway
        .create_menu_item(MenuItemCreate::new("Croissant", 3.25))
        .await
        .unwrap();

    let order = system
        .gateway
        .create_order(CreateOrderRequest::new(
            user.id,
            vec![
                OrderLine::new(croissant.id, 1),
                OrderLine::new(espresso.id, 3),
                OrderLine::new(croissant.id, 2),
            ],
        ))
        .await
        .unwrap();

    let names: Vec<_> = order.items.iter().map(|i| i.menu_item_name.as_str()).collect();
    assert_eq!(names, vec!["Croissant", "Espresso", "Croissant"]);
    let quantities: Vec<_> = order.items.iter().map(|i| i.quantity).collect();
    assert_eq!(quantities, vec![1, 3, 2]);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_stored_order_keeps_snapshot_after_price_change() {
    let (system, user, item) = seeded().await;
    let order = system
        .gateway
        .create_order(CreateOrderRequest::new(user.id, vec![OrderLine::new(item.id, 2)]))
        .await
        .unwrap();

    let renamed = MenuItemUpdate {
        name: Some("Double Espresso".into()),
        price: Some(4.00),
        ..MenuItemUpdate::default()
    };
    let updated = system
        .gateway
        .update_menu_item(item.id, renamed)
        .await
        .unwrap();
    assert_eq!(updated.price, 4.00);

    let stored = system.gateway.get_order(order.id).await.unwrap();
    assert_eq!(stored, order);
    assert_eq!(stored.items[0].price, 2.50);
    assert_eq!(stored.items[0].menu_item_name, "Espresso");

    // New orders pick up the new price
    let next = system
        .gateway
        .create_order(CreateOrderRequest::new(user.id, vec![OrderLine::new(item.id, 1)]))
        .await
        .unwrap();
    assert_eq!(next.items[0].price, 4.00);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_empty_order_is_invalid_argument() {
    let (system, user, _) = seeded().await;

    let err = system
        .gateway
        .create_order(CreateOrderRequest::new(user.id, vec![]))
        .await
        .unwrap_err();
    assert_eq!(upstream_code(&err), Code::InvalidArgument);
    assert_eq!(err.http_status(), 400);
    assert!(err
        .to_string()
        .contains("order must have at least one item"));
    assert!(system.gateway.list_orders().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_zero_quantity_persists_nothing() {
    let (system, user, item) = seeded().await;

    let err = system
        .gateway
        .create_order(CreateOrderRequest::new(
            user.id,
            vec![OrderLine::new(item.id, 1), OrderLine::new(item.id, 0)],
        ))
        .await
        .unwrap_err();
    assert_eq!(upstream_code(&err), Code::InvalidArgument);
    assert!(err.to_string().contains("quantity must be greater than 0"));
    assert!(system.gateway.list_orders().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_user_is_invalid_argument() {
    let (system, _, item) = seeded().await;

    let err = system
        .gateway
        .create_order(CreateOrderRequest::new(42, vec![OrderLine::new(item.id, 1)]))
        .await
        .unwrap_err();
    assert_eq!(upstream_code(&err), Code::InvalidArgument);
    assert!(err.to_string().contains("user not found"));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_item_names_the_item() {
    let (system, user, item) = seeded().await;

    let err = system
        .gateway
        .create_order(CreateOrderRequest::new(
            user.id,
            vec![OrderLine::new(item.id, 1), OrderLine::new(77, 1)],
        ))
        .await
        .unwrap_err();
    assert_eq!(upstream_code(&err), Code::InvalidArgument);
    assert!(err.to_string().contains("menu item 77 not found"));
    assert!(system.gateway.list_orders().await.unwrap().is_empty());

    // The failed attempt consumed no line ids
    let order = system
        .gateway
        .create_order(CreateOrderRequest::new(user.id, vec![OrderLine::new(item.id, 1)]))
        .await
        .unwrap();
    assert_eq!(order.items[0].id.0, 1);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_missing_order_is_not_found() {
    let (system, _, _) = seeded().await;

    let err = system
        .gateway
        .get_order(order_pipeline::model::OrderId(9))
        .await
        .unwrap_err();
    assert_eq!(upstream_code(&err), Code::NotFound);
    assert_eq!(err.http_status(), 404);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_orders_get_distinct_ids() {
    let (system, user, item) = seeded().await;
    let system = Arc::new(system);

    let mut handles = Vec::new();
    for _ in 0..25 {
        let system = system.clone();
        handles.push(tokio::spawn(async move {
            system
                .gateway
                .create_order(CreateOrderRequest::new(
                    user.id,
                    vec![OrderLine::new(item.id, 1)],
                ))
                .await
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().expect("Order failed").id.0);
    }
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 25);
    assert_eq!(system.gateway.list_orders().await.unwrap().len(), 25);

    let system = Arc::into_inner(system).expect("Tasks still hold the system");
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unhealthy_dependency_is_unavailable() {
    let config = Config::default();
    let user_service = config.services.user.clone();
    let system = OrderSystem::start(config).await.unwrap();

    system
        .registry
        .set_health(
            &user_service.name,
            &user_service.address,
            user_service.port,
            false,
        )
        .await
        .unwrap();

    let err = system
        .gateway
        .create_order(CreateOrderRequest::new(1, vec![OrderLine::new(1, 1)]))
        .await
        .unwrap_err();
    assert_eq!(upstream_code(&err), Code::Unavailable);
    assert_eq!(err.http_status(), 503);

    // The gateway resolves the user directory itself and fails the same way
    let err = system.gateway.get_user(UserId(1)).await.unwrap_err();
    assert!(matches!(err, GatewayError::Discovery(_)));
    assert_eq!(err.http_status(), 503);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_purchase_view_reports_each_side() {
    let (system, user, item) = seeded().await;

    let view = system
        .gateway
        .purchase_view(user.id, item.id)
        .await
        .unwrap();
    assert_eq!(view.user, user);
    assert_eq!(view.menu_item, item);

    let err = system
        .gateway
        .purchase_view(user.id, MenuItemId(55))
        .await
        .unwrap_err();
    assert!(matches!(&err, GatewayError::Upstream { service, .. } if service == "menu-service"));

    let err = system
        .gateway
        .purchase_view(UserId(8), MenuItemId(55))
        .await
        .unwrap_err();
    assert!(matches!(&err, GatewayError::Upstream { service, .. } if service == "user-service"));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_second_system_on_same_network_cannot_bind() {
    let network = order_pipeline::rpc::Network::new(std::time::Duration::from_secs(1));
    let first = OrderSystem::start_on(Config::default(), network.clone())
        .await
        .unwrap();

    let second = OrderSystem::start_on(Config::default(), network).await;
    assert!(matches!(
        second,
        Err(order_pipeline::rpc::TransportError::AddressInUse(_))
    ));

    first.shutdown().await.unwrap();
}
