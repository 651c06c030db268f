//! Custom actions for the Product Set store.

use crate::set_item::SetItem;

/// Custom actions for product sets.
#[derive(Debug, Clone)]
pub enum ProductSetAction {
    /// Composes the set's current items against the variation store.
    ///
    /// Read-only; unresolved variations are left out of the result.
    ComposeItems,
}

/// Results from ProductSetActions - variants match 1:1 with ProductSetAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProductSetActionResult {
    ComposeItems(Vec<SetItem>),
}
