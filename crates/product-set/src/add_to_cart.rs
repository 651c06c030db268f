//! # Add-to-Cart Rendering
//!
//! The add-to-cart form of a product set is rendered in two phases. The page first gets an
//! [`AddToCartShell`], which is cheap to build and holds only what identifies the form. The
//! host later calls [`AddToCartShell::fill`] to load the set, compose it and build the order
//! line the form submits.

use crate::composer::SetComposer;
use crate::error::DomainError;
use crate::model::{OrderLine, ProductSetId, ProductSetTypeRegistry, PurchasedEntity};
use crate::ports::{ProductSetLookup, VariationLookup};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Form base ID every add-to-cart form derives from.
pub const ADD_TO_CART_BASE_FORM_ID: &str = "commerce_order_item_add_to_cart_form";

/// Placeholder for a product set's add-to-cart form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddToCartShell {
    pub product_set_id: ProductSetId,
    pub view_mode: String,
    /// Whether adding the set again increases the quantity of an existing cart line.
    pub combine: bool,
}

/// A filled add-to-cart form.
#[derive(Debug, Clone, PartialEq)]
pub struct AddToCartForm {
    pub form_id: String,
    pub view_mode: String,
    pub combine: bool,
    /// The line that is added to the cart on submit.
    pub order_line: OrderLine,
}

impl AddToCartShell {
    pub fn new(product_set_id: ProductSetId, view_mode: impl Into<String>, combine: bool) -> Self {
        Self {
            product_set_id,
            view_mode: view_mode.into(),
            combine,
        }
    }

    /// Per-set form ID, so several add-to-cart forms can live on one page.
    pub fn form_id(&self) -> String {
        format!(
            "{ADD_TO_CART_BASE_FORM_ID}_commerce_product_set_{}",
            self.product_set_id.0
        )
    }

    /// Loads the set and builds the form.
    ///
    /// Fails with [`DomainError::NotFound`] if the set or its type no longer exists. The
    /// line buys one set at the set's own price and carries the current composition.
    #[instrument(skip(self, sets, variations, types), fields(product_set_id = %self.product_set_id))]
    pub async fn fill<S, V>(
        &self,
        sets: &S,
        variations: &V,
        types: &ProductSetTypeRegistry,
    ) -> Result<AddToCartForm, DomainError>
    where
        S: ProductSetLookup + ?Sized,
        V: VariationLookup + ?Sized,
    {
        let set = sets
            .product_set(self.product_set_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(self.product_set_id.to_string()))?;
        let order_item_type = types.order_item_type_for(&set)?;
        let items = SetComposer::compose(&set.items, variations).await?;
        debug!(items = items.len(), order_item_type, "Filled add-to-cart form");

        let order_line = OrderLine::from_purchasable(
            PurchasedEntity::ProductSet(set.id),
            &set,
            order_item_type,
            Decimal::ONE,
        )
        .with_set_items(items);

        Ok(AddToCartForm {
            form_id: self.form_id(),
            view_mode: self.view_mode.clone(),
            combine: self.combine,
            order_line,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        ConfiguredItem, Price, ProductSet, ProductSetType, StoreId, UserId, Variation, VariationId,
    };
    use std::collections::HashMap;

    fn registry() -> ProductSetTypeRegistry {
        ProductSetTypeRegistry::new([ProductSetType {
            id: "bundle".into(),
            label: "Bundle".into(),
            order_item_type: "bundle_item".into(),
        }])
    }

    fn fixtures(set_type: &str) -> (HashMap<ProductSetId, ProductSet>, HashMap<VariationId, Variation>) {
        let pen = Variation::new(VariationId(4), "PEN", "Pen", Price::parse("2.50", "EUR").unwrap());
        let set = ProductSet {
            id: ProductSetId(7),
            set_type: set_type.into(),
            title: "Desk kit".into(),
            sku: "DESK-KIT".into(),
            price: Price::parse("9.99", "EUR").unwrap(),
            owner_id: UserId(1),
            published: true,
            store_ids: vec![StoreId(1)],
            items: vec![ConfiguredItem::new(pen.id, Decimal::from(3)).unwrap()],
        };
        (
            [(set.id, set)].into_iter().collect(),
            [(pen.id, pen)].into_iter().collect(),
        )
    }

    #[test]
    fn test_form_id_is_per_set() {
        let shell = AddToCartShell::new(ProductSetId(7), "full", true);
        assert_eq!(
            shell.form_id(),
            "commerce_order_item_add_to_cart_form_commerce_product_set_7"
        );
    }

    #[tokio::test]
    async fn test_fill_builds_order_line() {
        let (sets, variations) = fixtures("bundle");
        let shell = AddToCartShell::new(ProductSetId(7), "full", false);

        let form = shell.fill(&sets, &variations, &registry()).await.unwrap();
        assert_eq!(form.form_id, shell.form_id());
        assert!(!form.combine);

        let line = &form.order_line;
        assert_eq!(line.purchased, PurchasedEntity::ProductSet(ProductSetId(7)));
        assert_eq!(line.title, "Desk kit");
        assert_eq!(line.quantity, Decimal::ONE);
        assert_eq!(line.unit_price, Price::parse("9.99", "EUR").unwrap());
        assert_eq!(line.order_item_type, "bundle_item");

        let items = line.set_items.as_ref().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].sku(), "PEN");
        assert_eq!(items[0].quantity(), Decimal::from(3));
    }

    #[tokio::test]
    async fn test_fill_missing_set() {
        let (_, variations) = fixtures("bundle");
        let shell = AddToCartShell::new(ProductSetId(8), "full", true);

        let sets: HashMap<ProductSetId, ProductSet> = HashMap::new();
        let err = shell
            .fill(&sets, &variations, &registry())
            .await
            .unwrap_err();
        assert_eq!(err, DomainError::NotFound("set_8".into()));
    }

    #[tokio::test]
    async fn test_fill_unknown_set_type() {
        let (sets, variations) = fixtures("gift_box");
        let shell = AddToCartShell::new(ProductSetId(7), "full", true);

        let err = shell.fill(&sets, &variations, &registry()).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }
}
