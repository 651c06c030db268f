use crate::error::DomainError;
use crate::model::ProductSet;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Bundle-level configuration of product sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSetType {
    pub id: String,
    pub label: String,
    /// Order line type used when a set of this type is purchased.
    pub order_item_type: String,
}

/// The configured product set types, keyed by ID.
#[derive(Debug, Clone, Default)]
pub struct ProductSetTypeRegistry {
    types: HashMap<String, ProductSetType>,
}

impl ProductSetTypeRegistry {
    pub fn new(types: impl IntoIterator<Item = ProductSetType>) -> Self {
        Self {
            types: types.into_iter().map(|t| (t.id.clone(), t)).collect(),
        }
    }

    pub fn get(&self, id: &str) -> Option<&ProductSetType> {
        self.types.get(id)
    }

    /// The order line type to use when `set` is purchased.
    pub fn order_item_type_for(&self, set: &ProductSet) -> Result<&str, DomainError> {
        self.get(&set.set_type)
            .map(|t| t.order_item_type.as_str())
            .ok_or_else(|| DomainError::NotFound(format!("product set type '{}'", set.set_type)))
    }
}
