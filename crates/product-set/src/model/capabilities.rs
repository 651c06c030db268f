//! Narrow capability traits.
//!
//! Consumers ask for exactly the capability they use ("has a price", "can be put on an
//! order line") instead of depending on a full entity type.

use crate::model::{Price, ProductSet, StoreId, UserId, Variation};

/// Has a catalog price.
pub trait Priced {
    fn price(&self) -> &Price;
}

/// Belongs to a user.
pub trait Owned {
    fn owner_id(&self) -> UserId;
}

/// Is sold in a set of stores.
pub trait StoreScoped {
    fn store_ids(&self) -> &[StoreId];

    fn is_sold_in(&self, store: StoreId) -> bool {
        self.store_ids().contains(&store)
    }
}

/// Can be referenced by an order line.
pub trait Purchasable: Priced {
    /// Title copied onto the order line.
    fn order_item_title(&self) -> &str;
}

impl Priced for Variation {
    fn price(&self) -> &Price {
        &self.price
    }
}

impl Purchasable for Variation {
    fn order_item_title(&self) -> &str {
        &self.title
    }
}

impl Priced for ProductSet {
    fn price(&self) -> &Price {
        &self.price
    }
}

impl Owned for ProductSet {
    fn owner_id(&self) -> UserId {
        self.owner_id
    }
}

impl StoreScoped for ProductSet {
    fn store_ids(&self) -> &[StoreId] {
        &self.store_ids
    }
}

impl Purchasable for ProductSet {
    fn order_item_title(&self) -> &str {
        &self.title
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProductSetId, VariationId};

    fn gift_box() -> ProductSet {
        ProductSet {
            id: ProductSetId(1),
            set_type: "default".into(),
            title: "Gift box".into(),
            sku: "GIFT".into(),
            price: Price::parse("30.00", "EUR").unwrap(),
            owner_id: UserId(4),
            published: true,
            store_ids: vec![StoreId(1), StoreId(3)],
            items: Vec::new(),
        }
    }

    fn title_and_price(entity: &impl Purchasable) -> String {
        format!("{} @ {}", entity.order_item_title(), entity.price())
    }

    #[test]
    fn test_product_set_capabilities() {
        let set = gift_box();
        assert_eq!(set.owner_id(), UserId(4));
        assert!(set.is_sold_in(StoreId(3)));
        assert!(!set.is_sold_in(StoreId(2)));
        assert_eq!(title_and_price(&set), "Gift box @ 30.00 EUR");
    }

    #[test]
    fn test_variation_is_purchasable() {
        let ribbon = Variation::new(
            VariationId(2),
            "RIBBON",
            "Ribbon",
            Price::parse("1.50", "EUR").unwrap(),
        );
        assert_eq!(title_and_price(&ribbon), "Ribbon @ 1.50 EUR");
    }
}
