//! # Product Set Client
//!
//! Typed API for the Product Set store, plus the [`ProductSetLookup`] and [`SetSkuLookup`]
//! ports backed by it.
use crate::error::DomainError;
use crate::model::{ProductSet, ProductSetCreate, ProductSetId, ProductSetUpdate};
use crate::ports::{ProductSetLookup, SetSkuLookup, VariationSkuLookup};
use crate::product_set_actor::{ProductSetAction, ProductSetActionResult, ProductSetError};
use crate::set_item::SetItem;
use crate::sku::SkuUniquenessChecker;
use async_trait::async_trait;
use catalog_actor::{CatalogClient, EntityClient, StoreError};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct ProductSetClient {
    inner: CatalogClient<ProductSet>,
}

impl ProductSetClient {
    pub fn new(inner: CatalogClient<ProductSet>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(sku = %params.sku))]
    pub async fn create_set(&self, params: ProductSetCreate) -> Result<ProductSetId, ProductSetError> {
        debug!(?params, "create_set called");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_set(
        &self,
        id: ProductSetId,
        update: ProductSetUpdate,
    ) -> Result<ProductSet, ProductSetError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn list_sets(&self) -> Result<Vec<ProductSet>, ProductSetError> {
        self.inner.list().await.map_err(Self::map_error)
    }

    /// Form-level SKU validation for a set being created (`exclude = None`) or edited.
    ///
    /// Reports a conflict before anything is written. The stores enforce the same rule
    /// again when the set is saved.
    #[instrument(skip(self, variations))]
    pub async fn validate_sku<V>(
        &self,
        sku: &str,
        exclude: Option<ProductSetId>,
        variations: &V,
    ) -> Result<(), ProductSetError>
    where
        V: VariationSkuLookup + ?Sized,
    {
        SkuUniquenessChecker::check(sku, exclude, self, variations)
            .await
            .map_err(ProductSetError::from)
    }

    /// The set's current composition, resolved by the store.
    #[instrument(skip(self))]
    pub async fn set_items(&self, id: ProductSetId) -> Result<Vec<SetItem>, ProductSetError> {
        debug!("Composing set items");
        let ProductSetActionResult::ComposeItems(items) = self
            .inner
            .perform_action(id, ProductSetAction::ComposeItems)
            .await
            .map_err(Self::map_error)?;
        Ok(items)
    }
}

#[async_trait]
impl EntityClient<ProductSet> for ProductSetClient {
    type Error = ProductSetError;

    fn inner(&self) -> &CatalogClient<ProductSet> {
        &self.inner
    }

    fn map_error(e: StoreError) -> ProductSetError {
        if let Some(inner) = e.entity_error::<ProductSetError>() {
            return inner.clone();
        }
        match e {
            StoreError::NotFound(id) => ProductSetError::NotFound(id),
            StoreError::DuplicateSku(sku) => ProductSetError::SkuConflict(sku),
            other => ProductSetError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[async_trait]
impl ProductSetLookup for ProductSetClient {
    async fn product_set(&self, id: ProductSetId) -> Result<Option<ProductSet>, DomainError> {
        self.inner
            .get(id)
            .await
            .map_err(|e| DomainError::Lookup(e.to_string()))
    }
}

#[async_trait]
impl SetSkuLookup for ProductSetClient {
    async fn set_sku_exists(
        &self,
        sku: &str,
        exclude: Option<ProductSetId>,
    ) -> Result<bool, DomainError> {
        self.sku_taken(sku, exclude)
            .await
            .map_err(|e| DomainError::Lookup(e.to_string()))
    }
}
