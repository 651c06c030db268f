//! # Catalog Actor
//!
//! An in-memory, actor-backed entity store. Each store is a Tokio task that owns a map of
//! entities and processes requests strictly one after another; the rest of the application
//! talks to it through a cloneable [`CatalogClient`].
//!
//! ## Layers
//!
//! 1. **Entity** ([`CatalogEntity`]) - the stored resource, its DTOs and lifecycle hooks
//! 2. **Store** ([`CatalogActor`]) - the message loop, ID allocation and the SKU index
//! 3. **Client** ([`CatalogClient`], [`EntityClient`]) - the typed request API
//!
//! ## SKU Index
//!
//! Entities that report a SKU through [`CatalogEntity::sku`] get a unique index: a create or
//! update that would duplicate another entity's SKU fails with
//! [`StoreError::DuplicateSku`]. Because the store processes one request at a time, this
//! check and the insert cannot interleave with another write to the same store.
//! [`CatalogClient::sku_exists`] queries the same index.
//!
//! ## Example
//!
//! ```rust
//! use catalog_actor::{CatalogActor, CatalogEntity};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Part { id: u32, sku: String }
//! #[derive(Debug)] struct PartCreate { sku: String }
//! #[derive(Debug)] struct PartUpdate;
//! #[derive(Debug)] enum PartAction {}
//! #[derive(Debug, thiserror::Error)] #[error("part error")] struct PartError;
//!
//! #[async_trait]
//! impl CatalogEntity for Part {
//!     type Id = u32;
//!     type Create = PartCreate;
//!     type Update = PartUpdate;
//!     type Action = PartAction;
//!     type ActionResult = ();
//!     type Context = ();
//!     type Error = PartError;
//!
//!     fn from_create_params(id: u32, params: PartCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, sku: params.sku })
//!     }
//!     fn sku(&self) -> Option<&str> { Some(&self.sku) }
//!     async fn on_update(&mut self, _: PartUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, a: PartAction, _: &()) -> Result<(), Self::Error> { match a {} }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = CatalogActor::<Part>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(PartCreate { sku: "P-1".into() }).await.unwrap();
//!     assert!(client.sku_exists("P-1", None).await.unwrap());
//!     assert!(!client.sku_exists("P-1", Some(id)).await.unwrap());
//!     assert!(client.create(PartCreate { sku: "P-1".into() }).await.is_err());
//! }
//! ```
//!
//! ## Testing
//!
//! [`mock::MockCatalog`] answers a client's requests from scripted expectations, so code
//! that depends on a store can be tested without running one.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::CatalogActor;
pub use client::CatalogClient;
pub use client_trait::EntityClient;
pub use entity::CatalogEntity;
pub use error::StoreError;
pub use message::{CatalogRequest, Response};
