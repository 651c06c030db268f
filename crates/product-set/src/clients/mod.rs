//! Type-safe wrappers around [`CatalogClient`](catalog_actor::CatalogClient), one per store.
//!
//! Besides the typed store API, the variation and product set clients implement the
//! lookup ports of [`crate::ports`], so the domain code runs against live stores.

pub mod order_client;
pub mod product_set_client;
pub mod variation_client;

pub use order_client::*;
pub use product_set_client::*;
pub use variation_client::*;
