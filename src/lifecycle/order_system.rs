use crate::clients::{MenuClient, OrderClient, UserClient};
use crate::config::{Config, ServiceEndpointConfig};
use crate::discovery::{ConnectionCache, InMemoryRegistry, ServiceInstance};
use crate::gateway::{Gateway, ServiceNames};
use crate::order_service::{OrderOrchestrator, OrderQueryService, OrderService};
use crate::rpc::{
    serve, CatalogService, Network, OrderRpcService, RpcService, TransportError,
    UserDirectoryService,
};
use crate::validation::{RemoteCatalogValidator, RemoteUserValidator};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The whole pipeline running in one process.
///
/// # Example
///
/// ```rust
/// use order_pipeline::config::Config;
/// use order_pipeline::lifecycle::OrderSystem;
/// use order_pipeline::model::{CreateOrderRequest, MenuItemCreate, OrderLine, UserCreate};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let system = OrderSystem::start(Config::default()).await?;
///
///     let user = system.gateway.create_user(UserCreate::new("Ana", "ana@example.com")).await?;
///     let item = system.gateway.create_menu_item(MenuItemCreate::new("Tea", 1.5)).await?;
///     let order = system
///         .gateway
///         .create_order(CreateOrderRequest::new(user.id, vec![OrderLine::new(item.id, 2)]))
///         .await?;
///     assert_eq!(order.status, "pending");
///
///     system.shutdown().await?;
///     Ok(())
/// }
/// ```
pub struct OrderSystem {
    /// Entry point for external callers.
    pub gateway: Gateway,

    /// Health-checked catalog every service registers in.
    pub registry: Arc<InMemoryRegistry>,

    /// Direct handles on the stores, bypassing RPC.
    pub user_client: UserClient,
    pub menu_client: MenuClient,
    pub order_client: OrderClient,

    servers: Vec<JoinHandle<()>>,
    actors: Vec<JoinHandle<()>>,
}

impl OrderSystem {
    /// Starts every actor and server and registers the services.
    ///
    /// Fails if any configured address is already bound on the network.
    pub async fn start(config: Config) -> Result<Self, TransportError> {
        let network = Network::new(config.transport.call_timeout());
        Self::start_on(config, network).await
    }

    /// Like [`start`](Self::start), on an existing network. Calls use that network's
    /// timeout.
    pub async fn start_on(config: Config, network: Network) -> Result<Self, TransportError> {
        let mailbox = config.actors.mailbox_size;

        // 1. Stores
        let (user_actor, user_client) = crate::user_actor::new(mailbox);
        let (menu_actor, menu_client) = crate::menu_actor::new(mailbox);
        let (order_actor, order_client) = crate::order_actor::new(mailbox);
        let actors = vec![
            tokio::spawn(user_actor.run()),
            tokio::spawn(menu_actor.run()),
            tokio::spawn(order_actor.run()),
        ];

        let registry = Arc::new(InMemoryRegistry::new());
        let mut servers = Vec::new();

        // 2-3. Services
        let booted = launch_services(
            &config,
            &network,
            &registry,
            (&user_client, &menu_client, &order_client),
            &mut servers,
        )
        .await;
        if let Err(e) = booted {
            error!(error = %e, "Boot failed");
            for server in &servers {
                server.abort();
            }
            return Err(e);
        }

        // 4. Gateway
        let gateway = Gateway::new(
            ConnectionCache::new(registry.clone(), Arc::new(network)),
            ServiceNames::from(&config.services),
        );

        info!("Order system started");
        Ok(Self {
            gateway,
            registry,
            user_client,
            menu_client,
            order_client,
            servers,
            actors,
        })
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Returns an error if any actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // Servers own store clients; stopping them releases those clones
        for server in &self.servers {
            server.abort();
        }
        for server in self.servers {
            if let Err(e) = server.await {
                if !e.is_cancelled() {
                    error!(error = %e, "Server task failed");
                }
            }
        }

        drop(self.gateway);
        drop(self.user_client);
        drop(self.menu_client);
        drop(self.order_client);

        let mut failed = 0;
        for handle in self.actors {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                failed += 1;
            }
        }

        if failed > 0 {
            return Err(format!("{failed} actor task(s) failed during shutdown"));
        }
        info!("System shutdown complete");
        Ok(())
    }
}

async fn launch_services(
    config: &Config,
    network: &Network,
    registry: &Arc<InMemoryRegistry>,
    (user_client, menu_client, order_client): (&UserClient, &MenuClient, &OrderClient),
    servers: &mut Vec<JoinHandle<()>>,
) -> Result<(), TransportError> {
    let services = &config.services;

    let users = UserDirectoryService::new(&services.user.name, user_client.clone());
    servers.push(launch(network, registry, &services.user, users).await?);

    let catalog = CatalogService::new(&services.menu.name, menu_client.clone());
    servers.push(launch(network, registry, &services.menu, catalog).await?);

    let cache = Arc::new(ConnectionCache::new(
        registry.clone(),
        Arc::new(network.clone()),
    ));
    let orchestrator = OrderOrchestrator::new(
        RemoteUserValidator::new(cache.clone(), &services.user.name),
        RemoteCatalogValidator::new(cache, &services.menu.name),
        order_client.clone(),
    );
    let orders = OrderService::new(orchestrator, OrderQueryService::new(order_client.clone()));
    let order_rpc = OrderRpcService::new(&services.order.name, orders);
    servers.push(launch(network, registry, &services.order, order_rpc).await?);

    Ok(())
}

/// Binds `endpoint`, starts serving `service` on it and registers it.
async fn launch<S: RpcService>(
    network: &Network,
    registry: &InMemoryRegistry,
    endpoint: &ServiceEndpointConfig,
    service: S,
) -> Result<JoinHandle<()>, TransportError> {
    let listener = network.bind(&endpoint.address, endpoint.port).await?;
    let handle = tokio::spawn(serve(listener, Arc::new(service)));
    registry
        .register(ServiceInstance::new(
            &endpoint.name,
            &endpoint.address,
            endpoint.port,
        ))
        .await;
    Ok(handle)
}
