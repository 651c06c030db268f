//! # Product Set
//!
//! Product sets: bundles of catalog variations sold together at one fixed price.
//!
//! ## Domain
//!
//! - [`set_item`] - [`SetItem`](set_item::SetItem), one part of a set with its cached
//!   SKU, title and price, plus its nested and flat storage records
//! - [`composer`] - [`SetComposer`](composer::SetComposer) builds a set's current
//!   composition, optionally with calculated prices
//! - [`sku`] - [`SkuUniquenessChecker`](sku::SkuUniquenessChecker) keeps set SKUs clear
//!   of other sets and of variations
//! - [`order_processor`] - refreshes the set items snapshot on order lines
//! - [`add_to_cart`], [`listing`] - the two storefront surfaces of a set
//! - [`ports`] - the collaborator traits all of the above depend on
//!
//! ## Runtime
//!
//! - [`variation_actor`], [`product_set_actor`], [`order_actor`] - the catalog stores,
//!   built on [`catalog_actor`]
//! - [`clients`] - typed store clients that also implement the [`ports`]
//! - [`lifecycle`] - [`CommerceSystem`](lifecycle::CommerceSystem) wires everything up
//! - [`config`] - layered configuration (defaults, TOML, environment)

pub mod add_to_cart;
pub mod clients;
pub mod composer;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod listing;
pub mod model;
pub mod order_actor;
pub mod order_processor;
pub mod ports;
pub mod pricing;
pub mod product_set_actor;
pub mod set_item;
pub mod sku;
pub mod variation_actor;
