/// A sellable bundle of several variations at one fixed price.
///
/// # Catalog Store
/// Implements [`CatalogEntity`](catalog_actor::CatalogEntity) in
/// [`product_set_actor`](crate::product_set_actor).
///
/// The set's own `sku` and `price` are independent of its parts: the bundle sells at
/// `price` whatever its parts cost on their own. `items` only describes the composition.
use crate::error::DomainError;
use crate::model::{Price, StoreId, UserId, VariationId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

entity_id!(
    /// Type-safe identifier for product sets.
    ProductSetId,
    "set"
);

/// One stored (variation, quantity) pair of a set's configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfiguredItem {
    pub variation_id: VariationId,
    pub quantity: Decimal,
}

impl ConfiguredItem {
    /// Creates a pair, rejecting quantities a set item could not hold.
    pub fn new(variation_id: VariationId, quantity: Decimal) -> Result<Self, DomainError> {
        let quantity = crate::set_item::validate_quantity(quantity)?;
        Ok(Self {
            variation_id,
            quantity,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSet {
    pub id: ProductSetId,
    /// Bundle name, resolved through the [`ProductSetTypeRegistry`](crate::model::ProductSetTypeRegistry).
    pub set_type: String,
    pub title: String,
    pub sku: String,
    pub price: Price,
    pub owner_id: UserId,
    pub published: bool,
    pub store_ids: Vec<StoreId>,
    /// Composition in display order.
    pub items: Vec<ConfiguredItem>,
}

/// Payload for creating a product set.
#[derive(Debug, Clone)]
pub struct ProductSetCreate {
    pub set_type: String,
    pub title: String,
    pub sku: String,
    pub price: Price,
    pub owner_id: UserId,
    pub published: bool,
    pub store_ids: Vec<StoreId>,
    pub items: Vec<ConfiguredItem>,
}

/// Payload for updating a product set. `None` leaves a field as it is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductSetUpdate {
    pub title: Option<String>,
    pub sku: Option<String>,
    pub price: Option<Price>,
    pub owner_id: Option<UserId>,
    pub published: Option<bool>,
    pub store_ids: Option<Vec<StoreId>>,
    pub items: Option<Vec<ConfiguredItem>>,
}
