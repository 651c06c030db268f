//! # Collaborator Ports
//!
//! The domain code never reaches into a global registry; every collaborator it needs is
//! one of these traits, passed in explicitly. The clients in [`crate::clients`] implement
//! them against the catalog stores, and tests implement them with plain in-memory maps.
//!
//! Every method returns `Result<_, DomainError>`: "the entity does not exist" is `Ok(None)` /
//! `Ok(false)`, and `Err` is reserved for a collaborator that failed.

use crate::error::DomainError;
use crate::model::{Price, ProductSet, ProductSetId, StoreId, UserId, Variation, VariationId};
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Resolves variations by ID.
#[async_trait]
pub trait VariationLookup: Send + Sync {
    async fn variation(&self, id: VariationId) -> Result<Option<Variation>, DomainError>;
}

/// Resolves product sets by ID.
#[async_trait]
pub trait ProductSetLookup: Send + Sync {
    async fn product_set(&self, id: ProductSetId) -> Result<Option<ProductSet>, DomainError>;
}

/// Answers whether a product set other than `exclude` already uses a SKU.
#[async_trait]
pub trait SetSkuLookup: Send + Sync {
    async fn set_sku_exists(
        &self,
        sku: &str,
        exclude: Option<ProductSetId>,
    ) -> Result<bool, DomainError>;
}

/// Answers whether any variation uses a SKU.
#[async_trait]
pub trait VariationSkuLookup: Send + Sync {
    async fn variation_sku_exists(&self, sku: &str) -> Result<bool, DomainError>;
}

/// Kinds of price adjustment a calculation may apply.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjustmentType {
    Promotion,
    Tax,
    Fee,
    Custom(String),
}

/// Who is buying and where; the input every price calculation depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceContext {
    pub customer_id: Option<UserId>,
    pub store_id: StoreId,
}

/// The outcome of a price calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceCalculation {
    /// The catalog price the calculation started from.
    pub base_price: Price,
    /// The price after the requested adjustments.
    pub calculated_price: Price,
}

/// Calculates the price of a variation in a context, applying only the adjustment types
/// listed in `adjustment_types`.
#[async_trait]
pub trait PriceCalculator: Send + Sync {
    async fn calculate(
        &self,
        variation: &Variation,
        quantity: Decimal,
        context: &PriceContext,
        adjustment_types: &[AdjustmentType],
    ) -> Result<PriceCalculation, DomainError>;
}

#[async_trait]
impl VariationLookup for HashMap<VariationId, Variation> {
    async fn variation(&self, id: VariationId) -> Result<Option<Variation>, DomainError> {
        Ok(self.get(&id).cloned())
    }
}

#[async_trait]
impl VariationSkuLookup for HashMap<VariationId, Variation> {
    async fn variation_sku_exists(&self, sku: &str) -> Result<bool, DomainError> {
        Ok(self.values().any(|v| v.sku == sku))
    }
}

#[async_trait]
impl ProductSetLookup for HashMap<ProductSetId, ProductSet> {
    async fn product_set(&self, id: ProductSetId) -> Result<Option<ProductSet>, DomainError> {
        Ok(self.get(&id).cloned())
    }
}

#[async_trait]
impl SetSkuLookup for HashMap<ProductSetId, ProductSet> {
    async fn set_sku_exists(
        &self,
        sku: &str,
        exclude: Option<ProductSetId>,
    ) -> Result<bool, DomainError> {
        Ok(self
            .values()
            .any(|set| set.sku == sku && Some(set.id) != exclude))
    }
}
