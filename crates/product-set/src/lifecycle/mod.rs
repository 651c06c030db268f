//! # System Lifecycle & Orchestration
//!
//! Starts, wires and stops the catalog stores.
//!
//! ## Dependency Injection via Context
//!
//! Stores are created without dependencies and receive them at `run(context)` time:
//!
//! ```rust,ignore
//! // No dependencies
//! impl CatalogEntity for Variation {
//!     type Context = ();
//! }
//!
//! // SKU checks and composition ask the variation store
//! impl CatalogEntity for ProductSet {
//!     type Context = VariationClient;
//! }
//!
//! // Set items processing reads both
//! impl CatalogEntity for Order {
//!     type Context = OrderContext; // { product_sets, variations }
//! }
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of the channels
//! 2. **Stores detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - wait for every store task
//!
//! The clients held in contexts are clones. The dependency graph (order → set → variation)
//! is acyclic, so each store stops once every store that depends on it has stopped.

pub mod commerce_system;

pub use commerce_system::*;
