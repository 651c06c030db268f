//! # Order Store
//!
//! Orders and their lines. A line that buys a product set carries a snapshot of the set's
//! items; the store refreshes those snapshots through
//! [`ProductSetItemsProcessor`](crate::order_processor::ProductSetItemsProcessor).
//!
//! - [`entity`] - [`CatalogEntity`](catalog_actor::CatalogEntity) implementation for [`Order`] and the [`OrderContext`]
//! - [`error`] - [`OrderError`]
//! - [`actions`] - [`OrderAction`] and [`OrderActionResult`]

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::OrderContext;
pub use error::*;

use crate::clients::OrderClient;
use crate::model::Order;
use catalog_actor::CatalogActor;

/// Creates a new Order store and its client.
///
/// Run it with an [`OrderContext`].
pub fn new(buffer_size: usize) -> (CatalogActor<Order>, OrderClient) {
    let (actor, generic_client) = CatalogActor::new(buffer_size);
    (actor, OrderClient::new(generic_client))
}
