//! # Variation Store
//!
//! The catalog of individually sellable units. Product sets reference variations by ID and
//! read their SKU, title and price when they are composed.
//!
//! - [`entity`] - [`CatalogEntity`](catalog_actor::CatalogEntity) implementation for [`Variation`]
//! - [`error`] - [`VariationError`]
//! - [`new()`] - factory returning the store and its client

pub mod entity;
pub mod error;

pub use entity::VariationAction;
pub use error::*;

use crate::clients::VariationClient;
use crate::model::Variation;
use catalog_actor::CatalogActor;

/// Creates a new Variation store and its client.
pub fn new(buffer_size: usize) -> (CatalogActor<Variation>, VariationClient) {
    let (actor, generic_client) = CatalogActor::new(buffer_size);
    (actor, VariationClient::new(generic_client))
}
