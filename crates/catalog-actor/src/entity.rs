//! # CatalogEntity Trait
//!
//! The `CatalogEntity` trait is the contract every stored resource (variation, product set,
//! order, …) implements to be managed by the generic [`CatalogActor`](crate::CatalogActor).
//! It names the associated types for IDs, DTOs, actions, context and errors, and provides the
//! lifecycle hooks (`on_create`, `on_update`, `on_delete`, `handle_action`).
//!
//! # SKU Index
//! Purchasable resources share one storefront SKU namespace. An entity exposes its SKU through
//! [`CatalogEntity::sku`]; the store keeps those values unique and answers `SkuExists`
//! queries from them. Entities without a SKU (orders) keep the default `None`.
//!
//! # Provided Methods (Hooks)
//! - [`CatalogEntity::on_create`]
//! - [`CatalogEntity::on_delete`]
//! - [`CatalogEntity::sku`]
//!
//! The defaults do nothing (`Ok(())` / `None`).

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource must implement to be managed by a [`CatalogActor`](crate::CatalogActor).
///
/// # Async & Context
/// Hooks are `async` so they can call other stores through their clients. The `Context`
/// type is injected into every hook at `run()` time, so stores can be created first and
/// wired afterwards.
#[async_trait]
pub trait CatalogEntity: Clone + Send + Sync + 'static {
    /// The unique identifier. Must be convertible from u32 for sequential ID generation.
    type Id: Eq + Hash + Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Resource-specific operations beyond CRUD.
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime dependencies injected into the store. Use `()` if none.
    type Context: Send + Sync;

    /// One error enum per store rather than one per message.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the entity from the allocated ID and the payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// The SKU this entity occupies in the shared namespace, if any.
    fn sku(&self) -> Option<&str> {
        None
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called after construction and before the entity is inserted.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called on a working copy of the stored entity. The store commits the copy only
    /// when this returns `Ok`.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
