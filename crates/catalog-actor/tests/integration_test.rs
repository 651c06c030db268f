use async_trait::async_trait;
use catalog_actor::{CatalogActor, CatalogEntity, StoreError};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Sticker {
    id: u32,
    sku: String,
    stock: u32,
}

#[derive(Debug)]
struct StickerCreate {
    sku: String,
}

#[derive(Debug)]
struct StickerUpdate {
    sku: Option<String>,
}

#[derive(Debug)]
enum StickerAction {
    Restock(u32),
}

#[derive(Debug, thiserror::Error)]
#[error("Sticker error")]
struct StickerError;

#[async_trait]
impl CatalogEntity for Sticker {
    type Id = u32;
    type Create = StickerCreate;
    type Update = StickerUpdate;
    type Action = StickerAction;
    type ActionResult = u32;
    type Context = ();
    type Error = StickerError;

    fn from_create_params(id: u32, params: StickerCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            sku: params.sku,
            stock: 0,
        })
    }

    fn sku(&self) -> Option<&str> {
        Some(&self.sku)
    }

    async fn on_update(
        &mut self,
        update: StickerUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(sku) = update.sku {
            self.sku = sku;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: StickerAction,
        _ctx: &Self::Context,
    ) -> Result<u32, Self::Error> {
        match action {
            StickerAction::Restock(amount) => {
                self.stock += amount;
                Ok(self.stock)
            }
        }
    }
}

fn sticker(sku: &str) -> StickerCreate {
    StickerCreate { sku: sku.into() }
}

// --- Tests ---

#[tokio::test]
async fn test_store_full_lifecycle() {
    let (actor, client) = CatalogActor::new(10);
    let handle = tokio::spawn(actor.run(()));

    // 1. Create
    let id: u32 = client.create(sticker("STAR")).await.unwrap();
    assert_eq!(id, 1);

    // 2. Action
    let stock = client
        .perform_action(id, StickerAction::Restock(5))
        .await
        .unwrap();
    assert_eq!(stock, 5);

    // 3. Update, the SKU index follows
    let update = StickerUpdate {
        sku: Some("MOON".into()),
    };
    let updated: Sticker = client.update(id, update).await.unwrap();
    assert_eq!(updated.sku, "MOON");
    assert!(client.sku_exists("MOON", None).await.unwrap());
    assert!(!client.sku_exists("STAR", None).await.unwrap());

    // 4. Delete frees the SKU
    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());
    assert!(!client.sku_exists("MOON", None).await.unwrap());
    assert!(client.create(sticker("MOON")).await.is_ok());

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_concurrent_creates_with_same_sku() {
    let (actor, client) = CatalogActor::<Sticker>::new(10);
    tokio::spawn(actor.run(()));

    let tasks: Vec<_> = (0..8)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.create(sticker("SUN")).await })
        })
        .collect();

    let mut created = Vec::new();
    let mut rejected = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(id) => created.push(id),
            Err(StoreError::DuplicateSku(sku)) => {
                assert_eq!(sku, "SUN");
                rejected += 1;
            }
            Err(e) => panic!("unexpected error: {e}"),
        }
    }

    assert_eq!(created, vec![1]);
    assert_eq!(rejected, 7);
    assert_eq!(client.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_requests_after_shutdown_fail() {
    let (actor, client) = CatalogActor::<Sticker>::new(10);
    let handle = tokio::spawn(actor.run(()));
    let survivor = client.clone();

    handle.abort();
    let _ = handle.await;

    let err = survivor.create(sticker("COMET")).await.unwrap_err();
    assert!(matches!(err, StoreError::ActorClosed | StoreError::ActorDropped));
}
