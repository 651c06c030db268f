//! # EntityClient Trait
//!
//! Common interface for domain-specific clients: default `get`, `delete` and `sku_taken`
//! built on top of the wrapped [`CatalogClient`].
use crate::{CatalogClient, CatalogEntity, StoreError};
use async_trait::async_trait;

/// Trait for domain clients to inherit the standard store operations.
///
/// Implementors provide access to the inner [`CatalogClient`] and map [`StoreError`]
/// into their own error type; `get`, `delete` and `sku_taken` come for free.
#[async_trait]
pub trait EntityClient<T: CatalogEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic client.
    fn inner(&self) -> &CatalogClient<T>;

    /// Map store errors to the resource error type.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    /// Whether `sku` is held by an entity of this store other than `exclude`.
    #[tracing::instrument(skip(self))]
    async fn sku_taken(&self, sku: &str, exclude: Option<T::Id>) -> Result<bool, Self::Error> {
        tracing::debug!("Sending request");
        self.inner()
            .sku_exists(sku, exclude)
            .await
            .map_err(Self::map_error)
    }
}
