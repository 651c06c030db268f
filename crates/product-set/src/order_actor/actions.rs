//! Custom actions for the Order store.

use crate::model::OrderLine;

#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Appends a line to the order.
    ///
    /// # Errors
    /// Fails if the line quantity is not positive.
    AddLine(OrderLine),
    /// Re-composes the set items of every product set line.
    ProcessSetItems,
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone, PartialEq)]
pub enum OrderActionResult {
    /// Number of lines on the order after the append.
    AddLine(usize),
    /// Number of refreshed lines.
    ProcessSetItems(usize),
}
