//! [`CatalogEntity`] implementation for [`ProductSet`].
//!
//! The store indexes set SKUs, so two sets can never share one. Sets also share the
//! storefront SKU namespace with variations: `on_create` and `on_update` ask the variation
//! store (the injected [`VariationClient`]) whether the SKU is taken there.

use super::actions::{ProductSetAction, ProductSetActionResult};
use super::error::ProductSetError;
use crate::clients::VariationClient;
use crate::composer::SetComposer;
use crate::model::{ProductSet, ProductSetCreate, ProductSetId, ProductSetUpdate};
use crate::ports::VariationSkuLookup;
use crate::set_item::MAX_TEXT_LENGTH;
use async_trait::async_trait;
use catalog_actor::CatalogEntity;
use tracing::debug;

fn required(field: &str, value: &str) -> Result<(), ProductSetError> {
    if value.is_empty() {
        return Err(ProductSetError::ValidationError(format!("{field} is required")));
    }
    if value.chars().count() > MAX_TEXT_LENGTH {
        return Err(ProductSetError::ValidationError(format!(
            "{field} exceeds {MAX_TEXT_LENGTH} characters"
        )));
    }
    Ok(())
}

async fn ensure_no_variation_uses(sku: &str, variations: &VariationClient) -> Result<(), ProductSetError> {
    if variations.variation_sku_exists(sku).await? {
        return Err(ProductSetError::SkuConflict(sku.to_string()));
    }
    Ok(())
}

#[async_trait]
impl CatalogEntity for ProductSet {
    type Id = ProductSetId;
    type Create = ProductSetCreate;
    type Update = ProductSetUpdate;
    type Action = ProductSetAction;
    type ActionResult = ProductSetActionResult;
    type Context = VariationClient;
    type Error = ProductSetError;

    /// Requires a title and a SKU.
    fn from_create_params(id: ProductSetId, params: ProductSetCreate) -> Result<Self, ProductSetError> {
        required("Title", &params.title)?;
        required("SKU", &params.sku)?;
        Ok(Self {
            id,
            set_type: params.set_type,
            title: params.title,
            sku: params.sku,
            price: params.price,
            owner_id: params.owner_id,
            published: params.published,
            store_ids: params.store_ids,
            items: params.items,
        })
    }

    fn sku(&self) -> Option<&str> {
        Some(&self.sku)
    }

    async fn on_create(&mut self, variations: &VariationClient) -> Result<(), ProductSetError> {
        ensure_no_variation_uses(&self.sku, variations).await
    }

    /// # Fields Updated
    /// Every `Some` field of [`ProductSetUpdate`]. A new SKU is checked against the
    /// variation store; the set store checks it against the other sets.
    async fn on_update(
        &mut self,
        update: ProductSetUpdate,
        variations: &VariationClient,
    ) -> Result<(), ProductSetError> {
        if let Some(title) = update.title {
            required("Title", &title)?;
            self.title = title;
        }
        if let Some(sku) = update.sku {
            required("SKU", &sku)?;
            if sku != self.sku {
                ensure_no_variation_uses(&sku, variations).await?;
            }
            self.sku = sku;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(owner_id) = update.owner_id {
            self.owner_id = owner_id;
        }
        if let Some(published) = update.published {
            self.published = published;
        }
        if let Some(store_ids) = update.store_ids {
            self.store_ids = store_ids;
        }
        if let Some(items) = update.items {
            self.items = items;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProductSetAction,
        variations: &VariationClient,
    ) -> Result<ProductSetActionResult, ProductSetError> {
        match action {
            ProductSetAction::ComposeItems => {
                let items = SetComposer::compose(&self.items, variations).await?;
                debug!(product_set_id = %self.id, items = items.len(), "Composed items");
                Ok(ProductSetActionResult::ComposeItems(items))
            }
        }
    }
}
