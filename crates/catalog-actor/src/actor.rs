//! # Catalog Store Actor
//!
//! `CatalogActor` is the server half of a store: it owns the entity map and processes
//! requests one at a time, so the map needs no lock and the SKU index is consistent
//! with every insert.

use crate::client::CatalogClient;
use crate::entity::CatalogEntity;
use crate::error::StoreError;
use crate::message::CatalogRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that owns a collection of entities.
///
/// # Usage Pattern
///
/// 1. **Create**: `CatalogActor::new()` returns the actor and its client.
/// 2. **Wire**: pass dependencies (other clients) into `actor.run(context)`.
/// 3. **Run**: spawn the run loop in a background task.
///
/// # Operations
///
/// * **Create** – allocates the next sequential ID, builds the entity, runs `on_create`,
///   then checks the SKU index before inserting.
/// * **Get / List** – clones out of the store; `List` is ordered by ID.
/// * **Update** – runs `on_update` on a working copy and commits it only if the hook
///   succeeds and the resulting SKU is still unique.
/// * **Delete** – runs `on_delete` and removes the entity.
/// * **Action** – runs `handle_action` on the stored entity.
/// * **SkuExists** – answers from the SKU index, optionally ignoring one ID.
pub struct CatalogActor<T: CatalogEntity> {
    receiver: mpsc::Receiver<CatalogRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: CatalogEntity> CatalogActor<T> {
    /// Creates a new store and its client.
    ///
    /// `buffer_size` is the channel capacity; clients wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, CatalogClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        (actor, CatalogClient::new(sender))
    }

    /// Returns the ID of another entity already holding `sku`, if any.
    fn sku_holder(&self, sku: &str, exclude: Option<&T::Id>) -> Option<&T::Id> {
        if sku.is_empty() {
            return None;
        }
        self.store
            .iter()
            .find(|(id, item)| Some(*id) != exclude && item.sku() == Some(sku))
            .map(|(id, _)| id)
    }

    fn duplicate_sku(&self, item: &T, exclude: Option<&T::Id>) -> Option<String> {
        let sku = item.sku()?;
        self.sku_holder(sku, exclude).map(|_| sku.to_string())
    }

    /// Runs the event loop until every client has been dropped.
    ///
    /// `context` is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Store started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CatalogRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);

                    let mut item = match T::from_create_params(id.clone(), params) {
                        Ok(item) => item,
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(StoreError::EntityError(Box::new(e))));
                            continue;
                        }
                    };
                    if let Err(e) = item.on_create(&context).await {
                        warn!(entity_type, error = %e, "on_create failed");
                        let _ = respond_to.send(Err(StoreError::EntityError(Box::new(e))));
                        continue;
                    }
                    if let Some(sku) = self.duplicate_sku(&item, None) {
                        warn!(entity_type, sku, "Duplicate SKU");
                        let _ = respond_to.send(Err(StoreError::DuplicateSku(sku)));
                        continue;
                    }

                    self.next_id += 1;
                    self.store.insert(id.clone(), item);
                    info!(entity_type, %id, size = self.store.len(), "Created");
                    let _ = respond_to.send(Ok(id));
                }
                CatalogRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                CatalogRequest::List { respond_to } => {
                    let mut items: Vec<(&T::Id, &T)> = self.store.iter().collect();
                    items.sort_by(|a, b| a.0.cmp(b.0));
                    debug!(entity_type, size = items.len(), "List");
                    let _ = respond_to.send(Ok(items.into_iter().map(|(_, v)| v.clone()).collect()));
                }
                CatalogRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let Some(current) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                        continue;
                    };

                    let mut candidate = current.clone();
                    if let Err(e) = candidate.on_update(update, &context).await {
                        warn!(entity_type, %id, error = %e, "Update failed");
                        let _ = respond_to.send(Err(StoreError::EntityError(Box::new(e))));
                        continue;
                    }
                    if let Some(sku) = self.duplicate_sku(&candidate, Some(&id)) {
                        warn!(entity_type, %id, sku, "Duplicate SKU");
                        let _ = respond_to.send(Err(StoreError::DuplicateSku(sku)));
                        continue;
                    }

                    self.store.insert(id.clone(), candidate.clone());
                    info!(entity_type, %id, "Updated");
                    let _ = respond_to.send(Ok(candidate));
                }
                CatalogRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(StoreError::EntityError(Box::new(e))));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
                CatalogRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(|e| StoreError::EntityError(Box::new(e)));
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
                    }
                }
                CatalogRequest::SkuExists {
                    sku,
                    exclude,
                    respond_to,
                } => {
                    let exists = self.sku_holder(&sku, exclude.as_ref()).is_some();
                    debug!(entity_type, sku, exists, "SkuExists");
                    let _ = respond_to.send(Ok(exists));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Part {
        id: u32,
        sku: String,
    }

    #[derive(Debug)]
    struct PartCreate {
        sku: String,
    }

    #[derive(Debug)]
    struct PartUpdate {
        sku: String,
    }

    #[derive(Debug)]
    enum PartAction {
        ReadSku,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Part error: {0}")]
    struct PartError(String);

    #[async_trait]
    impl CatalogEntity for Part {
        type Id = u32;
        type Create = PartCreate;
        type Update = PartUpdate;
        type Action = PartAction;
        type ActionResult = String;
        type Context = ();
        type Error = PartError;

        fn from_create_params(id: u32, params: PartCreate) -> Result<Self, Self::Error> {
            if params.sku == "reject" {
                return Err(PartError("rejected".into()));
            }
            Ok(Self { id, sku: params.sku })
        }

        fn sku(&self) -> Option<&str> {
            Some(&self.sku)
        }

        async fn on_update(&mut self, update: PartUpdate, _: &()) -> Result<(), Self::Error> {
            if update.sku == "reject" {
                return Err(PartError("rejected".into()));
            }
            self.sku = update.sku;
            Ok(())
        }

        async fn handle_action(&mut self, action: PartAction, _: &()) -> Result<String, Self::Error> {
            match action {
                PartAction::ReadSku => Ok(self.sku.clone()),
            }
        }
    }

    fn spawn_store() -> CatalogClient<Part> {
        let (actor, client) = CatalogActor::<Part>::new(8);
        tokio::spawn(actor.run(()));
        client
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_sku() {
        let client = spawn_store();
        let first = client.create(PartCreate { sku: "A-1".into() }).await.unwrap();
        assert_eq!(first, 1);

        let err = client
            .create(PartCreate { sku: "A-1".into() })
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateSku(sku) if sku == "A-1"));

        // The failed create must not consume an ID.
        let second = client.create(PartCreate { sku: "A-2".into() }).await.unwrap();
        assert_eq!(second, 2);
    }

    #[tokio::test]
    async fn test_sku_exists_honours_exclusion() {
        let client = spawn_store();
        let id = client.create(PartCreate { sku: "A-1".into() }).await.unwrap();

        assert!(client.sku_exists("A-1", None).await.unwrap());
        assert!(!client.sku_exists("A-1", Some(id)).await.unwrap());
        assert!(!client.sku_exists("B-1", None).await.unwrap());
        assert!(!client.sku_exists("", None).await.unwrap());
    }

    #[tokio::test]
    async fn test_failed_update_leaves_entity_untouched() {
        let client = spawn_store();
        let a = client.create(PartCreate { sku: "A-1".into() }).await.unwrap();
        let b = client.create(PartCreate { sku: "B-1".into() }).await.unwrap();

        let err = client
            .update(b, PartUpdate { sku: "A-1".into() })
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::DuplicateSku(_)));

        let err = client
            .update(b, PartUpdate { sku: "reject".into() })
            .await
            .unwrap_err();
        assert!(err.entity_error::<PartError>().is_some());

        let stored = client.get(b).await.unwrap().unwrap();
        assert_eq!(stored.sku, "B-1");

        // Keeping its own SKU is not a collision.
        let updated = client.update(a, PartUpdate { sku: "A-1".into() }).await.unwrap();
        assert_eq!(updated.sku, "A-1");
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id_and_delete_removes() {
        let client = spawn_store();
        for sku in ["C", "A", "B"] {
            client.create(PartCreate { sku: sku.into() }).await.unwrap();
        }
        client.delete(2).await.unwrap();

        let skus: Vec<String> = client.list().await.unwrap().into_iter().map(|p| p.sku).collect();
        assert_eq!(skus, vec!["C", "B"]);

        let err = client.delete(2).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
        assert_eq!(
            client.perform_action(3, PartAction::ReadSku).await.unwrap(),
            "B"
        );
    }
}
