//! Demo: two shops, one customer, one order taken from dispatch to completion.

use shop_dispatch::config::AppConfig;
use shop_dispatch::lifecycle::{setup_tracing, DispatchSystem};
use shop_dispatch::model::{Ingredient, OwnerQueue, Session, ShopCategory, ShopId, ShopProfile, ShoppingList};
use tracing::{info, warn, Instrument};

fn sample_list() -> ShoppingList {
    ShoppingList {
        vegetable_shop: vec![
            Ingredient::new("Tomato", 4.0, "pcs"),
            Ingredient::new("Onion", 2.0, "pcs"),
        ],
        grocery_shop: vec![Ingredient::new("Salt", 1.0, "tsp")],
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = AppConfig::from_env()?;
    let list = config.load_shopping_list()?.unwrap_or_else(sample_list);
    let system = DispatchSystem::new(&config);

    let ravi = Session::owner("Ravi", "9876543210");
    let meera = Session::owner("Meera", "9123456780");
    let asha = Session::customer("Asha", "9000000001");

    let span = tracing::info_span!("registration");
    async {
        system
            .shop_client
            .register_shop(
                &ravi,
                ShopProfile::new("Green Basket", ShopCategory::VegetableShop, "MG Road")
                    .with_coordinates_text("18.5210, 73.8570"),
            )
            .await?;
        system
            .shop_client
            .register_shop(
                &meera,
                ShopProfile::new("Daily Needs", ShopCategory::Supermarket, "FC Road")
                    .with_coordinates_text("18.5300, 73.8400"),
            )
            .await?;
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    for nearby in system.shop_client.list_shops_near(Some("18.5204, 73.8567")).await? {
        info!(shop = %nearby.shop.name, category = %nearby.shop.category, distance = %nearby.label(), "Nearby");
    }

    // Both sides watch their orders.
    let owner_view = system
        .order_client
        .subscribe_shop_orders(&ravi, |orders| {
            let queue = OwnerQueue::from_orders(orders);
            info!(
                pending = queue.pending.len(),
                active = queue.active.len(),
                completed = queue.completed.len(),
                "Owner queue"
            );
        })
        .await?;
    let customer_view = system
        .order_client
        .subscribe_customer_orders(&asha, |orders| {
            for order in orders.iter().take(1) {
                info!(
                    shop = %order.shop_name,
                    status = %order.status,
                    available = order.available_count(),
                    total = order.items.len(),
                    "Latest order"
                );
            }
        })
        .await?;

    let span = tracing::info_span!("order_processing");
    async {
        let green_basket = ShopId::from(ravi.phone.as_str());
        let order = system.order_client.dispatch(&asha, &green_basket, &list).await?;
        system.order_client.accept(&ravi, &order.id).await?;
        for index in 0..order.items.len() {
            system.order_client.set_item_availability(&ravi, &order.id, index, true).await?;
        }
        system.order_client.complete(&ravi, &order.id).await?;

        if let Err(e) = system.order_client.set_item_availability(&ravi, &order.id, 0, false).await {
            warn!(error = %e, "Completed orders are locked");
        }
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    owner_view.cancel();
    customer_view.cancel();
    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
