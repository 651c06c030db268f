//! # Product Set Store
//!
//! Stores product sets and keeps their SKUs unique across sets and variations.
//!
//! ## Structure
//!
//! - [`entity`] - [`CatalogEntity`](catalog_actor::CatalogEntity) implementation for [`ProductSet`]
//! - [`error`] - [`ProductSetError`]
//! - [`actions`] - [`ProductSetAction`] and [`ProductSetActionResult`]
//! - [`new()`] - factory returning the store and its client
//!
//! ## Usage
//!
//! ```rust
//! use product_set::model::{Price, ProductSetCreate, UserId, VariationCreate};
//! use product_set::{product_set_actor, variation_actor};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (variation_actor, variations) = variation_actor::new(32);
//!     let (set_actor, sets) = product_set_actor::new(32);
//!
//!     // The set store needs the variation store for SKU checks and composition.
//!     tokio::spawn(variation_actor.run(()));
//!     tokio::spawn(set_actor.run(variations.clone()));
//!
//!     variations
//!         .create_variation(VariationCreate {
//!             sku: "MUG".into(),
//!             title: "Mug".into(),
//!             price: Price::parse("8.00", "EUR")?,
//!         })
//!         .await?;
//!
//!     let taken = sets
//!         .create_set(ProductSetCreate {
//!             set_type: "default".into(),
//!             title: "Mug set".into(),
//!             sku: "MUG".into(),
//!             price: Price::parse("20.00", "EUR")?,
//!             owner_id: UserId(1),
//!             published: true,
//!             store_ids: Vec::new(),
//!             items: Vec::new(),
//!         })
//!         .await;
//!     assert!(taken.is_err());
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ProductSetClient;
use crate::model::ProductSet;
use catalog_actor::CatalogActor;

/// Creates a new Product Set store and its client.
///
/// Run it with a [`VariationClient`](crate::clients::VariationClient) as context.
pub fn new(buffer_size: usize) -> (CatalogActor<ProductSet>, ProductSetClient) {
    let (actor, generic_client) = CatalogActor::new(buffer_size);
    (actor, ProductSetClient::new(generic_client))
}
