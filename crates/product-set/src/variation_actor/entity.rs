//! [`CatalogEntity`] implementation for [`Variation`].
//!
//! Variations have no dependencies (`Context = ()`) and no custom actions. Their SKU is
//! indexed by the store, so two variations can never share one.

use super::error::VariationError;
use crate::model::{Variation, VariationCreate, VariationId, VariationUpdate};
use crate::set_item::MAX_TEXT_LENGTH;
use async_trait::async_trait;
use catalog_actor::CatalogEntity;

/// Variations support CRUD only.
#[derive(Debug, Clone)]
pub enum VariationAction {}

fn validate_sku(sku: &str) -> Result<(), VariationError> {
    if sku.is_empty() {
        return Err(VariationError::ValidationError("SKU is required".into()));
    }
    if sku.chars().count() > MAX_TEXT_LENGTH {
        return Err(VariationError::ValidationError(format!(
            "SKU exceeds {MAX_TEXT_LENGTH} characters"
        )));
    }
    Ok(())
}

fn validate_title(title: &str) -> Result<(), VariationError> {
    if title.chars().count() > MAX_TEXT_LENGTH {
        return Err(VariationError::ValidationError(format!(
            "title exceeds {MAX_TEXT_LENGTH} characters"
        )));
    }
    Ok(())
}

#[async_trait]
impl CatalogEntity for Variation {
    type Id = VariationId;
    type Create = VariationCreate;
    type Update = VariationUpdate;
    type Action = VariationAction;
    type ActionResult = ();
    type Context = ();
    type Error = VariationError;

    fn from_create_params(id: VariationId, params: VariationCreate) -> Result<Self, VariationError> {
        validate_sku(&params.sku)?;
        validate_title(&params.title)?;
        Ok(Self::new(id, params.sku, params.title, params.price))
    }

    fn sku(&self) -> Option<&str> {
        Some(&self.sku)
    }

    /// # Fields Updated
    /// - `sku`: must stay non-empty
    /// - `title`: at most 255 characters
    /// - `price`
    async fn on_update(&mut self, update: VariationUpdate, _ctx: &()) -> Result<(), VariationError> {
        if let Some(sku) = update.sku {
            validate_sku(&sku)?;
            self.sku = sku;
        }
        if let Some(title) = update.title {
            validate_title(&title)?;
            self.title = title;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: VariationAction,
        _ctx: &(),
    ) -> Result<(), VariationError> {
        match action {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Price;

    fn params(sku: &str) -> VariationCreate {
        VariationCreate {
            sku: sku.into(),
            title: "Mug".into(),
            price: Price::parse("8.00", "EUR").unwrap(),
        }
    }

    #[test]
    fn test_create_requires_sku() {
        let err = Variation::from_create_params(VariationId(1), params("")).unwrap_err();
        assert!(matches!(err, VariationError::ValidationError(_)));

        let mug = Variation::from_create_params(VariationId(1), params("MUG")).unwrap();
        assert_eq!(mug.sku(), Some("MUG"));
    }

    #[tokio::test]
    async fn test_update_fields() {
        let mut mug = Variation::from_create_params(VariationId(1), params("MUG")).unwrap();
        let update = VariationUpdate {
            title: Some("Large mug".into()),
            price: Some(Price::parse("9.50", "EUR").unwrap()),
            ..Default::default()
        };
        mug.on_update(update, &()).await.unwrap();
        assert_eq!(mug.title, "Large mug");
        assert_eq!(mug.sku, "MUG");

        let clear_sku = VariationUpdate {
            sku: Some(String::new()),
            ..Default::default()
        };
        assert!(mug.on_update(clear_sku, &()).await.is_err());
    }

    #[tokio::test]
    async fn test_title_fits_set_item_column() {
        let mut long = params("MUG");
        long.title = "x".repeat(MAX_TEXT_LENGTH + 1);
        let err = Variation::from_create_params(VariationId(1), long).unwrap_err();
        assert!(matches!(err, VariationError::ValidationError(_)));

        let mut mug = Variation::from_create_params(VariationId(1), params("MUG")).unwrap();
        let rename = VariationUpdate {
            title: Some("x".repeat(MAX_TEXT_LENGTH + 1)),
            ..Default::default()
        };
        assert!(mug.on_update(rename, &()).await.is_err());
        assert_eq!(mug.title, "Mug");
    }
}
