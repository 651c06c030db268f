//! # Store Messages
//!
//! The request type sent from a [`CatalogClient`](crate::CatalogClient) to a
//! [`CatalogActor`](crate::CatalogActor).

use crate::entity::CatalogEntity;
use crate::error::StoreError;
use tokio::sync::oneshot;

/// One-shot response channel used by stores.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Requests understood by a catalog store.
///
/// The CRUD variants plus `Action` cover the lifecycle of any stored resource.
/// `SkuExists` queries the store's SKU index and `List` returns a snapshot of all
/// entities ordered by ID.
#[derive(Debug)]
pub enum CatalogRequest<T: CatalogEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    SkuExists {
        sku: String,
        exclude: Option<T::Id>,
        respond_to: Response<bool>,
    },
}
