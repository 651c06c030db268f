/// An individually sellable product unit (one SKU / size / colour).
///
/// # Catalog Store
/// Implements [`CatalogEntity`](catalog_actor::CatalogEntity) in
/// [`variation_actor`](crate::variation_actor); the store keeps variation SKUs unique.
use crate::model::Price;
use serde::{Deserialize, Serialize};

entity_id!(
    /// Type-safe identifier for variations.
    VariationId,
    "variation"
);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variation {
    pub id: VariationId,
    pub sku: String,
    pub title: String,
    pub price: Price,
}

impl Variation {
    pub fn new(
        id: VariationId,
        sku: impl Into<String>,
        title: impl Into<String>,
        price: Price,
    ) -> Self {
        Self {
            id,
            sku: sku.into(),
            title: title.into(),
            price,
        }
    }
}

/// Payload for creating a variation.
#[derive(Debug, Clone)]
pub struct VariationCreate {
    pub sku: String,
    pub title: String,
    pub price: Price,
}

/// Payload for updating a variation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VariationUpdate {
    pub sku: Option<String>,
    pub title: Option<String>,
    pub price: Option<Price>,
}
