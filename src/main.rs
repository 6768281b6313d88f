//! # Order Pipeline Demo
//!
//! Boots the whole pipeline, places an order, changes the price of what was ordered and
//! shows that the stored order still carries the price it was placed at.

use actor_framework::tracing::setup_tracing;
use order_pipeline::config::Config;
use order_pipeline::lifecycle::OrderSystem;
use order_pipeline::model::{
    CreateOrderRequest, MenuItemCreate, MenuItemUpdate, OrderLine, UserCreate,
};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = Config::load().map_err(|e| e.to_string())?;
    info!(?config, "Starting order pipeline");

    let system = OrderSystem::start(config)
        .await
        .map_err(|e| e.to_string())?;
    let gateway = &system.gateway;

    let span = tracing::info_span!("seeding");
    let (user, espresso) = async {
        let user = gateway
            .create_user(UserCreate::new("Alice", "alice@example.com"))
            .await
            .map_err(|e| e.to_string())?;
        let espresso = gateway
            .create_menu_item(
                MenuItemCreate::new("Espresso", 2.50).with_description("Double shot"),
            )
            .await
            .map_err(|e| e.to_string())?;
        Ok::<_, String>((user, espresso))
    }
    .instrument(span)
    .await?;
    info!(user_id = %user.id, menu_item_id = %espresso.id, "Seeded catalog");

    let span = tracing::info_span!("order_processing");
    let placed = async {
        gateway
            .create_order(CreateOrderRequest::new(
                user.id,
                vec![OrderLine::new(espresso.id, 2)],
            ))
            .await
    }
    .instrument(span)
    .await;

    let order = match placed {
        Ok(order) => {
            info!(order_id = %order.id, total = order.total(), "Order placed");
            order
        }
        Err(e) => {
            error!(error = %e, status = e.http_status(), "Order failed");
            system.shutdown().await?;
            return Err(e.to_string());
        }
    };

    // Rejections come back with the failing precondition spelled out
    if let Err(e) = gateway
        .create_order(CreateOrderRequest::new(user.id, vec![OrderLine::new(99, 1)]))
        .await
    {
        info!(error = %e, status = e.http_status(), "Rejected as expected");
    }

    gateway
        .update_menu_item(espresso.id, MenuItemUpdate::price(3.10))
        .await
        .map_err(|e| e.to_string())?;

    let stored = gateway
        .get_order(order.id)
        .await
        .map_err(|e| e.to_string())?;
    for item in &stored.items {
        info!(
            menu_item_id = %item.menu_item_id,
            name = %item.menu_item_name,
            quantity = item.quantity,
            price = item.price,
            "Stored line keeps its snapshot"
        );
    }

    let view = gateway
        .purchase_view(user.id, espresso.id)
        .await
        .map_err(|e| e.to_string())?;
    info!(
        user = %view.user.name,
        item = %view.menu_item.name,
        price = view.menu_item.price,
        "Purchase view"
    );

    let orders = gateway.list_orders().await.map_err(|e| e.to_string())?;
    info!(count = orders.len(), "Orders on record");

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
