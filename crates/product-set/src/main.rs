//! # Product Set Demo
//!
//! Walks one product set through its life:
//! 1. Loading the [`CommerceConfig`] (optional TOML path as the first argument).
//! 2. Creating variations and a set made of them.
//! 3. Rendering the add-to-cart form and the priced listing.
//! 4. Changing the set after it is in the cart and refreshing the order.

use catalog_actor::tracing::setup_tracing;
use catalog_actor::EntityClient;
use product_set::add_to_cart::AddToCartShell;
use product_set::config::{CommerceConfig, ConfigLoader};
use product_set::lifecycle::CommerceSystem;
use product_set::model::{
    ConfiguredItem, OrderCreate, Price, ProductSetCreate, ProductSetUpdate, StoreId, UserId,
    VariationCreate,
};
use product_set::ports::PriceContext;
use rust_decimal::Decimal;
use tracing::{error, info, Instrument};

fn price(number: &str) -> Result<Price, String> {
    Price::parse(number, "EUR").map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let mut loader = ConfigLoader::new();
    if let Some(path) = std::env::args().nth(1) {
        loader = loader.with_config_path(path);
    }
    let config: CommerceConfig = loader.load().map_err(|e| e.to_string())?;
    let set_type = config
        .set_types
        .first()
        .map(|t| t.id.clone())
        .ok_or("no product set type configured")?;

    let system = CommerceSystem::new(&config);
    if let Some(t) = system.set_types().get(&set_type) {
        info!(set_type = %t.id, order_item_type = %t.order_item_type, "Using product set type");
    }

    let span = tracing::info_span!("catalog_setup");
    let (cup, saucer, set_id) = async {
        let cup = system
            .variation_client
            .create_variation(VariationCreate {
                sku: "CUP-WHITE".into(),
                title: "Cup, white".into(),
                price: price("6.50")?,
            })
            .await
            .map_err(|e| e.to_string())?;
        let saucer = system
            .variation_client
            .create_variation(VariationCreate {
                sku: "SAUCER-WHITE".into(),
                title: "Saucer, white".into(),
                price: price("3.00")?,
            })
            .await
            .map_err(|e| e.to_string())?;

        system
            .product_set_client
            .validate_sku("TEA-FOR-TWO", None, &system.variation_client)
            .await
            .map_err(|e| e.to_string())?;

        let set_id = system
            .product_set_client
            .create_set(ProductSetCreate {
                set_type: set_type.clone(),
                title: "Tea for two".into(),
                sku: "TEA-FOR-TWO".into(),
                price: price("15.00")?,
                owner_id: UserId(1),
                published: true,
                store_ids: vec![StoreId(1)],
                items: vec![
                    ConfiguredItem::new(cup, Decimal::TWO).map_err(|e| e.to_string())?,
                ],
            })
            .await
            .map_err(|e| e.to_string())?;
        Ok::<_, String>((cup, saucer, set_id))
    }
    .instrument(span)
    .await?;

    info!(%set_id, "Product set created");

    // A set may not reuse a variation SKU.
    if let Err(e) = system
        .product_set_client
        .validate_sku("CUP-WHITE", None, &system.variation_client)
        .await
    {
        info!(error = %e, "SKU validation rejected a duplicate");
    }

    let form = system
        .add_to_cart(&AddToCartShell::new(set_id, "full", true))
        .await
        .map_err(|e| e.to_string())?;
    info!(form_id = %form.form_id, title = %form.order_line.title, "Add-to-cart form ready");

    let context = PriceContext {
        customer_id: Some(UserId(2)),
        store_id: StoreId(1),
    };
    if let Some(listing) = system
        .listing(set_id, &context)
        .await
        .map_err(|e| e.to_string())?
    {
        info!("{}", listing.title);
        for item in &listing.items {
            let unit_price = item.unit_price().map(|p| p.to_string()).unwrap_or_default();
            info!("  {} x {} ({})", item.quantity(), item.title(), unit_price);
        }
    }

    let span = tracing::info_span!("order_processing");
    let order_result = async {
        let order_id = system
            .order_client
            .create_order(OrderCreate {
                customer_id: UserId(2),
                store_id: StoreId(1),
                lines: vec![form.order_line.clone()],
            })
            .await
            .map_err(|e| e.to_string())?;

        // The set gains saucers while it sits in the cart.
        system
            .product_set_client
            .update_set(
                set_id,
                ProductSetUpdate {
                    items: Some(vec![
                        ConfiguredItem::new(cup, Decimal::TWO).map_err(|e| e.to_string())?,
                        ConfiguredItem::new(saucer, Decimal::TWO).map_err(|e| e.to_string())?,
                    ]),
                    ..Default::default()
                },
            )
            .await
            .map_err(|e| e.to_string())?;

        let refreshed = system
            .order_client
            .process_set_items(order_id)
            .await
            .map_err(|e| e.to_string())?;
        info!(%order_id, refreshed, "Set items refreshed");

        let order = system
            .order_client
            .get(order_id)
            .await
            .map_err(|e| e.to_string())?;
        Ok::<_, String>(order)
    }
    .instrument(span)
    .await;

    match order_result {
        Ok(Some(order)) => {
            for line in &order.lines {
                let parts = line.set_items.as_ref().map_or(0, Vec::len);
                match line.total_price() {
                    Ok(total) => info!(title = %line.title, parts, %total, "Order line"),
                    Err(e) => error!(title = %line.title, error = %e, "Order line total"),
                }
            }
        }
        Ok(None) => error!("Order disappeared"),
        Err(e) => error!(error = %e, "Order processing failed"),
    }

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
