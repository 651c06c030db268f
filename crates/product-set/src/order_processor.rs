//! # Order Processing
//!
//! A set's composition can change between the moment it is put in the cart and checkout.
//! [`ProductSetItemsProcessor`] re-composes the set items snapshot on every order line that
//! buys a product set, so the order always describes what the set contains now.

use crate::composer::SetComposer;
use crate::error::DomainError;
use crate::model::{Order, PurchasedEntity};
use crate::ports::{ProductSetLookup, VariationLookup};
use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

/// A step of the order refresh pipeline.
#[async_trait]
pub trait OrderProcessor: Send + Sync {
    /// Adjusts `order` in place. Returns the number of lines changed.
    async fn process(&self, order: &mut Order) -> Result<usize, DomainError>;
}

/// Overwrites the set items snapshot of product set lines.
///
/// A line is refreshed only if it buys a product set, the set still exists and the line
/// carries a set items attribute (`set_items` is `Some`). Every other line is left as it is.
pub struct ProductSetItemsProcessor<S, V> {
    sets: S,
    variations: V,
}

impl<S, V> ProductSetItemsProcessor<S, V>
where
    S: ProductSetLookup,
    V: VariationLookup,
{
    pub fn new(sets: S, variations: V) -> Self {
        Self { sets, variations }
    }
}

#[async_trait]
impl<S, V> OrderProcessor for ProductSetItemsProcessor<S, V>
where
    S: ProductSetLookup,
    V: VariationLookup,
{
    #[instrument(skip_all, fields(order_id = %order.id))]
    async fn process(&self, order: &mut Order) -> Result<usize, DomainError> {
        let mut refreshed = 0;
        for line in order.lines.iter_mut() {
            let PurchasedEntity::ProductSet(set_id) = line.purchased else {
                continue;
            };
            if line.set_items.is_none() {
                debug!(%set_id, "Line has no set items attribute");
                continue;
            }
            let Some(set) = self.sets.product_set(set_id).await? else {
                warn!(%set_id, "Purchased product set no longer exists");
                continue;
            };

            let items = SetComposer::compose(&set.items, &self.variations).await?;
            debug!(%set_id, items = items.len(), "Refreshed set items");
            line.set_items = Some(items);
            refreshed += 1;
        }
        info!(refreshed, "Processed order");
        Ok(refreshed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        ConfiguredItem, OrderId, OrderLine, Price, ProductSet, ProductSetId, StoreId, UserId,
        Variation, VariationId,
    };
    use crate::set_item::SetItem;
    use rust_decimal::Decimal;
    use std::collections::HashMap;

    fn price(number: &str) -> Price {
        Price::parse(number, "EUR").unwrap()
    }

    fn variations() -> HashMap<VariationId, Variation> {
        [
            Variation::new(VariationId(1), "CUP", "Cup", price("4.00")),
            Variation::new(VariationId(2), "SAUCER", "Saucer", price("3.00")),
        ]
        .into_iter()
        .map(|v| (v.id, v))
        .collect()
    }

    fn tea_set(items: Vec<ConfiguredItem>) -> ProductSet {
        ProductSet {
            id: ProductSetId(1),
            set_type: "default".into(),
            title: "Tea set".into(),
            sku: "TEA-SET".into(),
            price: price("12.00"),
            owner_id: UserId(1),
            published: true,
            store_ids: vec![StoreId(1)],
            items,
        }
    }

    fn set_line(set: &ProductSet, snapshot: Option<Vec<SetItem>>) -> OrderLine {
        let line = OrderLine::from_purchasable(
            PurchasedEntity::ProductSet(set.id),
            set,
            "product_set",
            Decimal::ONE,
        );
        match snapshot {
            Some(items) => line.with_set_items(items),
            None => line,
        }
    }

    fn order(lines: Vec<OrderLine>) -> Order {
        Order {
            id: OrderId(1),
            customer_id: UserId(1),
            store_id: StoreId(1),
            lines,
        }
    }

    #[tokio::test]
    async fn test_refreshes_stale_snapshot() {
        let cart_time = tea_set(vec![ConfiguredItem::new(VariationId(1), Decimal::ONE).unwrap()]);
        let stale = SetComposer::compose(&cart_time.items, &variations()).await.unwrap();

        // The set gained a saucer after it was added to the cart.
        let current = tea_set(vec![
            ConfiguredItem::new(VariationId(1), Decimal::ONE).unwrap(),
            ConfiguredItem::new(VariationId(2), Decimal::TWO).unwrap(),
        ]);
        let sets: HashMap<_, _> = [(current.id, current.clone())].into_iter().collect();

        let mut order = order(vec![set_line(&cart_time, Some(stale))]);
        let processor = ProductSetItemsProcessor::new(sets, variations());
        assert_eq!(processor.process(&mut order).await.unwrap(), 1);

        let items = order.lines[0].set_items.as_ref().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].sku(), "SAUCER");
        assert_eq!(items[1].quantity(), Decimal::TWO);
    }

    #[tokio::test]
    async fn test_leaves_other_lines_alone() {
        let set = tea_set(vec![ConfiguredItem::new(VariationId(1), Decimal::ONE).unwrap()]);
        let cup = variations()[&VariationId(1)].clone();
        let variation_line = OrderLine::from_purchasable(
            PurchasedEntity::Variation(cup.id),
            &cup,
            "default",
            Decimal::ONE,
        );
        let without_attribute = set_line(&set, None);
        let sets: HashMap<_, _> = [(set.id, set.clone())].into_iter().collect();

        let mut order = order(vec![variation_line.clone(), without_attribute.clone()]);
        let processor = ProductSetItemsProcessor::new(sets, variations());
        assert_eq!(processor.process(&mut order).await.unwrap(), 0);
        assert_eq!(order.lines, vec![variation_line, without_attribute]);
    }

    #[tokio::test]
    async fn test_deleted_set_keeps_snapshot() {
        let set = tea_set(vec![ConfiguredItem::new(VariationId(1), Decimal::ONE).unwrap()]);
        let snapshot = vec![SetItem::new(VariationId(1), Decimal::ONE).unwrap()];
        let mut order = order(vec![set_line(&set, Some(snapshot.clone()))]);

        let sets: HashMap<ProductSetId, ProductSet> = HashMap::new();
        let processor = ProductSetItemsProcessor::new(sets, variations());
        assert_eq!(processor.process(&mut order).await.unwrap(), 0);
        assert_eq!(order.lines[0].set_items, Some(snapshot));
    }
}
