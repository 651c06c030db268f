/// A customer order.
///
/// # Catalog Store
/// Implements [`CatalogEntity`](catalog_actor::CatalogEntity) in
/// [`order_actor`](crate::order_actor). Orders carry no SKU.
use crate::error::DomainError;
use crate::model::{Price, ProductSetId, Purchasable, StoreId, UserId, VariationId};
use crate::set_item::SetItem;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

entity_id!(
    /// Type-safe identifier for orders.
    OrderId,
    "order"
);

/// What an order line buys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PurchasedEntity {
    Variation(VariationId),
    ProductSet(ProductSetId),
}

/// A purchased quantity of one purchasable entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub purchased: PurchasedEntity,
    pub title: String,
    pub quantity: Decimal,
    pub unit_price: Price,
    pub order_item_type: String,
    /// Snapshot of the purchased set's composition.
    ///
    /// `None` when the line type has no set-items attribute at all; such lines are never
    /// touched by [`ProductSetItemsProcessor`](crate::order_processor::ProductSetItemsProcessor).
    pub set_items: Option<Vec<SetItem>>,
}

impl OrderLine {
    /// Builds a line for `entity`, copying its title and price.
    pub fn from_purchasable(
        purchased: PurchasedEntity,
        entity: &impl Purchasable,
        order_item_type: impl Into<String>,
        quantity: Decimal,
    ) -> Self {
        Self {
            purchased,
            title: entity.order_item_title().to_string(),
            quantity,
            unit_price: entity.price().clone(),
            order_item_type: order_item_type.into(),
            set_items: None,
        }
    }

    /// Gives the line a set-items attribute holding `items`.
    pub fn with_set_items(mut self, items: Vec<SetItem>) -> Self {
        self.set_items = Some(items);
        self
    }

    /// `unit_price × quantity`.
    pub fn total_price(&self) -> Result<Price, DomainError> {
        self.unit_price.multiply(self.quantity)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: UserId,
    pub store_id: StoreId,
    pub lines: Vec<OrderLine>,
}

/// Payload for creating an order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub customer_id: UserId,
    pub store_id: StoreId,
    pub lines: Vec<OrderLine>,
}

/// Payload for updating an order.
#[derive(Debug, Clone, Default)]
pub struct OrderUpdate {
    pub customer_id: Option<UserId>,
    pub lines: Option<Vec<OrderLine>>,
}
