//! # Variation Client
//!
//! Typed API for the Variation store. Also serves as the [`VariationLookup`] and
//! [`VariationSkuLookup`] the composition and SKU checks run against.
use crate::error::DomainError;
use crate::model::{Variation, VariationCreate, VariationId, VariationUpdate};
use crate::ports::{VariationLookup, VariationSkuLookup};
use crate::variation_actor::VariationError;
use async_trait::async_trait;
use catalog_actor::{CatalogClient, EntityClient, StoreError};
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct VariationClient {
    inner: CatalogClient<Variation>,
}

impl VariationClient {
    pub fn new(inner: CatalogClient<Variation>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_variation(&self, params: VariationCreate) -> Result<VariationId, VariationError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_variation(
        &self,
        id: VariationId,
        update: VariationUpdate,
    ) -> Result<Variation, VariationError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn list_variations(&self) -> Result<Vec<Variation>, VariationError> {
        self.inner.list().await.map_err(Self::map_error)
    }
}

#[async_trait]
impl EntityClient<Variation> for VariationClient {
    type Error = VariationError;

    fn inner(&self) -> &CatalogClient<Variation> {
        &self.inner
    }

    fn map_error(e: StoreError) -> VariationError {
        if let Some(inner) = e.entity_error::<VariationError>() {
            return inner.clone();
        }
        match e {
            StoreError::NotFound(id) => VariationError::NotFound(id),
            StoreError::DuplicateSku(sku) => VariationError::DuplicateSku(sku),
            other => VariationError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[async_trait]
impl VariationLookup for VariationClient {
    async fn variation(&self, id: VariationId) -> Result<Option<Variation>, DomainError> {
        self.inner
            .get(id)
            .await
            .map_err(|e| DomainError::Lookup(e.to_string()))
    }
}

#[async_trait]
impl VariationSkuLookup for VariationClient {
    async fn variation_sku_exists(&self, sku: &str) -> Result<bool, DomainError> {
        self.sku_taken(sku, None)
            .await
            .map_err(|e| DomainError::Lookup(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Price;
    use catalog_actor::mock::{create_mock_client, expect_get, expect_sku_exists, MockCatalog};

    fn mug() -> Variation {
        Variation::new(VariationId(1), "MUG", "Mug", Price::parse("8.00", "EUR").unwrap())
    }

    #[tokio::test]
    async fn test_lookup_answers_from_store() {
        let mut mock = MockCatalog::<Variation>::new();
        mock.expect_get(VariationId(1)).return_ok(Some(mug()));
        mock.expect_get(VariationId(2)).return_ok(None);
        let client = VariationClient::new(mock.client());

        assert_eq!(client.variation(VariationId(1)).await.unwrap(), Some(mug()));
        assert_eq!(client.variation(VariationId(2)).await.unwrap(), None);
        mock.verify();
    }

    #[tokio::test]
    async fn test_store_failure_becomes_lookup_error() {
        let mut mock = MockCatalog::<Variation>::new();
        mock.expect_get(VariationId(1)).return_err(StoreError::ActorClosed);
        let client = VariationClient::new(mock.client());

        let err = client.variation(VariationId(1)).await.unwrap_err();
        assert!(matches!(err, DomainError::Lookup(_)));
    }

    #[tokio::test]
    async fn test_sku_query_excludes_nothing() {
        let (client, mut receiver) = create_mock_client::<Variation>(10);
        let client = VariationClient::new(client);

        let task = tokio::spawn(async move { client.variation_sku_exists("MUG").await });

        let (sku, exclude, responder) = expect_sku_exists(&mut receiver)
            .await
            .expect("Expected SkuExists request");
        assert_eq!(sku, "MUG");
        assert_eq!(exclude, None);
        responder.send(Ok(true)).unwrap();

        assert!(task.await.unwrap().unwrap());
    }

    #[tokio::test]
    async fn test_entity_errors_keep_their_type() {
        let (client, mut receiver) = create_mock_client::<Variation>(10);
        let client = VariationClient::new(client);

        let task = tokio::spawn(async move { client.get(VariationId(3)).await });

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, VariationId(3));
        responder
            .send(Err(StoreError::EntityError(Box::new(
                VariationError::ValidationError("SKU is required".into()),
            ))))
            .unwrap();

        assert_eq!(
            task.await.unwrap().unwrap_err(),
            VariationError::ValidationError("SKU is required".into())
        );
    }
}
