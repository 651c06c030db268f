//! # Observability
//!
//! Every store logs its lifecycle and each request with structured fields
//! (`entity_type`, `id`, `sku`, `size`), and the domain clients wrap their methods in
//! `#[instrument]` spans, so one request can be followed across stores.
//!
//! ```bash
//! RUST_LOG=info cargo run    # one line per create/update/delete
//! RUST_LOG=debug cargo run   # adds payloads, lookups and SKU queries
//! ```
//!
//! Typical `debug` output while an order's set items are refreshed:
//!
//! ```text
//! DEBUG Action entity_type="Order" id=order_1 action=ProcessSetItems
//! DEBUG Get entity_type="ProductSet" id=set_1 found=true
//! DEBUG Get entity_type="Variation" id=variation_2 found=false
//! WARN  compose: Skipping unresolved variation variation_id=variation_2
//! INFO  Action ok entity_type="Order" id=order_1
//! ```

/// Installs the global `fmt` subscriber, filtered by `RUST_LOG`.
///
/// Call once per process. The compact format prints spans inline
/// (e.g. `process_set_items:compose`).
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
