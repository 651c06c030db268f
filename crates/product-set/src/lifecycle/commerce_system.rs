use crate::add_to_cart::{AddToCartForm, AddToCartShell};
use crate::clients::{OrderClient, ProductSetClient, VariationClient};
use crate::config::CommerceConfig;
use crate::error::DomainError;
use crate::listing::{ListingSettings, SetItemsListing};
use crate::model::{ProductSet, ProductSetId, ProductSetTypeRegistry, StoreId, StoreScoped};
use crate::order_actor::OrderContext;
use crate::ports::{PriceContext, ProductSetLookup};
use crate::pricing::RateCalculator;
use crate::product_set_actor::ProductSetError;
use tracing::{error, info, instrument};

/// The runtime orchestrator for the product set catalog.
///
/// `CommerceSystem` owns:
/// - **Stores**: the Variation, Product Set and Order stores, each in its own task
/// - **Wiring**: the set store gets the variation client, the order store gets both
/// - **Configuration**: the set type registry, the listing settings and the price calculator
///
/// # Example
///
/// ```ignore
/// let system = CommerceSystem::new(&CommerceConfig::default());
///
/// let mug = system.variation_client.create_variation(mug_params).await?;
/// let set = system.product_set_client.create_set(set_params).await?;
/// let form = system.add_to_cart(&AddToCartShell::new(set, "full", true)).await?;
///
/// system.shutdown().await?;
/// ```
pub struct CommerceSystem {
    pub variation_client: VariationClient,
    pub product_set_client: ProductSetClient,
    pub order_client: OrderClient,

    types: ProductSetTypeRegistry,
    listing_settings: ListingSettings,
    calculator: RateCalculator,

    /// Task handles for all running stores (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CommerceSystem {
    /// Creates the stores, wires their contexts and spawns them.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(config: &CommerceConfig) -> Self {
        // 1. Create stores (no dependencies yet)
        let (variation_actor, variation_client) = crate::variation_actor::new(config.store_buffer);
        let (set_actor, product_set_client) = crate::product_set_actor::new(config.store_buffer);
        let (order_actor, order_client) = crate::order_actor::new(config.store_buffer);

        // 2. Start stores with injected context
        let variation_handle = tokio::spawn(variation_actor.run(()));
        let set_handle = tokio::spawn(set_actor.run(variation_client.clone()));
        let order_handle = tokio::spawn(order_actor.run(OrderContext {
            product_sets: product_set_client.clone(),
            variations: variation_client.clone(),
        }));

        info!(
            set_types = config.set_types.len(),
            rates = config.rates.len(),
            "Commerce system started"
        );

        Self {
            variation_client,
            product_set_client,
            order_client,
            types: config.type_registry(),
            listing_settings: config.listing_settings(),
            calculator: config.rate_calculator(),
            handles: vec![order_handle, set_handle, variation_handle],
        }
    }

    pub fn set_types(&self) -> &ProductSetTypeRegistry {
        &self.types
    }

    /// Fills an add-to-cart placeholder against the live stores.
    pub async fn add_to_cart(&self, shell: &AddToCartShell) -> Result<AddToCartForm, DomainError> {
        shell
            .fill(&self.product_set_client, &self.variation_client, &self.types)
            .await
    }

    /// The "set consisting of" listing of a set, priced for `context`.
    #[instrument(skip(self, context))]
    pub async fn listing(
        &self,
        id: ProductSetId,
        context: &PriceContext,
    ) -> Result<Option<SetItemsListing>, DomainError> {
        let set = self
            .product_set_client
            .product_set(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(id.to_string()))?;
        SetItemsListing::build(
            &set,
            &self.listing_settings,
            &self.variation_client,
            &self.calculator,
            context,
        )
        .await
    }

    /// Published sets sold in `store`, ordered by ID.
    pub async fn storefront(&self, store: StoreId) -> Result<Vec<ProductSet>, ProductSetError> {
        let sets = self.product_set_client.list_sets().await?;
        Ok(sets
            .into_iter()
            .filter(|set| set.published && set.is_sold_in(store))
            .collect())
    }

    /// Gracefully shuts down every store.
    ///
    /// Drops all clients, which closes the channels, then waits for each store task. The
    /// order store holds clients of the other two, so they stop once it has stopped.
    /// Returns an error if any task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.product_set_client);
        drop(self.variation_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Store task failed: {:?}", e);
                return Err(format!("Store task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
