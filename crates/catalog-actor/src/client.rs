//! # Generic Client
//!
//! The type-safe handle used to talk to a [`CatalogActor`](crate::CatalogActor).

use crate::entity::CatalogEntity;
use crate::error::StoreError;
use crate::message::CatalogRequest;
use tokio::sync::{mpsc, oneshot};

/// ## CatalogClient
///
/// Forwards requests over the store's mpsc channel and awaits the answer on a oneshot
/// channel. Holds only a sender, so cloning is cheap and clones can be shared across tasks.
/// The store shuts down once every clone is dropped.
pub struct CatalogClient<T: CatalogEntity> {
    sender: mpsc::Sender<CatalogRequest<T>>,
}

impl<T: CatalogEntity> Clone for CatalogClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: CatalogEntity> CatalogClient<T> {
    pub fn new(sender: mpsc::Sender<CatalogRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(oneshot::Sender<Result<R, StoreError>>) -> CatalogRequest<T>,
    ) -> Result<R, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }

    pub async fn create(&self, params: T::Create) -> Result<T::Id, StoreError> {
        self.request(|respond_to| CatalogRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        self.request(|respond_to| CatalogRequest::Get { id, respond_to })
            .await
    }

    pub async fn list(&self) -> Result<Vec<T>, StoreError> {
        self.request(|respond_to| CatalogRequest::List { respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, StoreError> {
        self.request(|respond_to| CatalogRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), StoreError> {
        self.request(|respond_to| CatalogRequest::Delete { id, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, StoreError> {
        self.request(|respond_to| CatalogRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }

    /// Asks whether any entity other than `exclude` holds `sku`.
    pub async fn sku_exists(
        &self,
        sku: impl Into<String>,
        exclude: Option<T::Id>,
    ) -> Result<bool, StoreError> {
        let sku = sku.into();
        self.request(|respond_to| CatalogRequest::SkuExists {
            sku,
            exclude,
            respond_to,
        })
        .await
    }
}
