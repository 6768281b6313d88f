use actor_framework::mock::MockClient;
use actor_framework::ActorClient;
use order_pipeline::clients::{MenuClient, OrderClient, UserClient};
use order_pipeline::discovery::{ConnectionCache, InMemoryRegistry, ServiceInstance};
use order_pipeline::model::{
    CreateOrderRequest, MenuItem, MenuItemId, Order, OrderLine, User, UserId,
};
use order_pipeline::order_actor::OrderError;
use order_pipeline::order_service::OrderOrchestrator;
use order_pipeline::rpc::{serve, CatalogService, Network, UserDirectoryService};
use order_pipeline::validation::{RemoteCatalogValidator, RemoteUserValidator};
use std::sync::Arc;
use std::time::Duration;

type Orchestrator = OrderOrchestrator<RemoteUserValidator, RemoteCatalogValidator>;

/// Serves the user directory and the catalog over a private network, each backed by a
/// mocked store, and wires an orchestrator to them.
async fn orchestrator_over(
    users: &MockClient<User>,
    menu: &MockClient<MenuItem>,
    store: OrderClient,
) -> Orchestrator {
    let network = Network::new(Duration::from_secs(1));
    let registry = Arc::new(InMemoryRegistry::new());

    let listener = network.bind("10.1.0.1", 50051).await.unwrap();
    let directory = UserDirectoryService::new("user-service", UserClient::new(users.client()));
    tokio::spawn(serve(listener, Arc::new(directory)));
    registry
        .register(ServiceInstance::new("user-service", "10.1.0.1", 50051))
        .await;

    let listener = network.bind("10.1.0.2", 50052).await.unwrap();
    let catalog = CatalogService::new("menu-service", MenuClient::new(menu.client()));
    tokio::spawn(serve(listener, Arc::new(catalog)));
    registry
        .register(ServiceInstance::new("menu-service", "10.1.0.2", 50052))
        .await;

    let cache = Arc::new(ConnectionCache::new(registry, Arc::new(network)));
    OrderOrchestrator::new(
        RemoteUserValidator::new(cache.clone(), "user-service"),
        RemoteCatalogValidator::new(cache, "menu-service"),
        store,
    )
}

fn alice() -> User {
    User {
        id: UserId(1),
        name: "Alice".into(),
        email: "alice@example.com".into(),
        is_cafe_owner: false,
    }
}

fn latte(price: f64) -> MenuItem {
    MenuItem {
        id: MenuItemId(3),
        name: "Latte".into(),
        description: String::new(),
        price,
    }
}

/// Real Order actor, mocked user and menu stores behind real RPC servers.
#[tokio::test]
async fn test_order_actor_with_mocked_dependencies() {
    let mut users = MockClient::<User>::new();
    let mut menu = MockClient::<MenuItem>::new();
    users.expect_get(UserId(1)).return_ok(Some(alice()));
    menu.expect_get(MenuItemId(3)).return_ok(Some(latte(3.75)));

    let (order_actor, order_client) = order_pipeline::order_actor::new(8);
    tokio::spawn(order_actor.run());
    let orchestrator = orchestrator_over(&users, &menu, order_client.clone()).await;

    let order = orchestrator
        .create_order(CreateOrderRequest::new(1, vec![OrderLine::new(3, 4)]))
        .await
        .expect("Order creation failed");

    let stored = order_client
        .get(order.id)
        .await
        .unwrap()
        .expect("Order not stored");
    assert_eq!(stored, order);
    assert_eq!(stored.items[0].menu_item_name, "Latte");
    assert_eq!(stored.items[0].price, 3.75);
    assert_eq!(stored.total(), 15.0);

    users.verify();
    menu.verify();
}

#[tokio::test]
async fn test_missing_user_never_touches_catalog_or_store() {
    let mut users = MockClient::<User>::new();
    let menu = MockClient::<MenuItem>::new();
    let store = MockClient::<Order>::new();
    users.expect_get(UserId(5)).return_ok(None);

    let orchestrator = orchestrator_over(&users, &menu, OrderClient::new(store.client())).await;

    let err = orchestrator
        .create_order(CreateOrderRequest::new(5, vec![OrderLine::new(3, 1)]))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        OrderError::InvalidArgument("user not found: not_found: user not found".into())
    );

    users.verify();
    menu.verify();
    store.verify();
}

#[tokio::test]
async fn test_catalog_failure_collapses_to_item_not_found() {
    let mut users = MockClient::<User>::new();
    let mut menu = MockClient::<MenuItem>::new();
    let store = MockClient::<Order>::new();
    users.expect_get(UserId(1)).return_ok(Some(alice()));
    menu.expect_get(MenuItemId(3))
        .return_err(actor_framework::FrameworkError::ActorClosed);

    let orchestrator = orchestrator_over(&users, &menu, OrderClient::new(store.client())).await;

    let err = orchestrator
        .create_order(CreateOrderRequest::new(1, vec![OrderLine::new(3, 1)]))
        .await
        .unwrap_err();
    match err {
        OrderError::InvalidArgument(reason) => {
            assert!(reason.starts_with("menu item 3 not found: internal:"), "{reason}");
        }
        other => panic!("expected invalid argument, got {other}"),
    }

    users.verify();
    menu.verify();
    store.verify();
}
