//! [`CatalogEntity`] implementation for [`Order`].
//!
//! Orders depend on the product set and variation stores ([`OrderContext`]): whenever set
//! items are processed, each product set line is re-composed from the set's current
//! configuration. This happens once when the order is created and again on every
//! [`OrderAction::ProcessSetItems`].

use super::actions::{OrderAction, OrderActionResult};
use super::error::OrderError;
use crate::clients::{ProductSetClient, VariationClient};
use crate::model::{Order, OrderCreate, OrderId, OrderLine, OrderUpdate};
use crate::order_processor::{OrderProcessor, ProductSetItemsProcessor};
use async_trait::async_trait;
use catalog_actor::CatalogEntity;
use rust_decimal::Decimal;

/// Dependencies injected into the Order store.
#[derive(Clone)]
pub struct OrderContext {
    pub product_sets: ProductSetClient,
    pub variations: VariationClient,
}

impl OrderContext {
    fn processor(&self) -> ProductSetItemsProcessor<ProductSetClient, VariationClient> {
        ProductSetItemsProcessor::new(self.product_sets.clone(), self.variations.clone())
    }
}

fn validate_line(line: &OrderLine) -> Result<(), OrderError> {
    if line.quantity <= Decimal::ZERO {
        return Err(OrderError::ValidationError(format!(
            "line '{}' needs a positive quantity, got {}",
            line.title, line.quantity
        )));
    }
    Ok(())
}

#[async_trait]
impl CatalogEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = OrderContext;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        params.lines.iter().try_for_each(validate_line)?;
        Ok(Self {
            id,
            customer_id: params.customer_id,
            store_id: params.store_id,
            lines: params.lines,
        })
    }

    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), OrderError> {
        ctx.processor().process(self).await?;
        Ok(())
    }

    async fn on_update(&mut self, update: OrderUpdate, _ctx: &OrderContext) -> Result<(), OrderError> {
        if let Some(customer_id) = update.customer_id {
            self.customer_id = customer_id;
        }
        if let Some(lines) = update.lines {
            lines.iter().try_for_each(validate_line)?;
            self.lines = lines;
        }
        Ok(())
    }

    /// # Actions
    /// - `AddLine`: appends a validated line
    /// - `ProcessSetItems`: refreshes set items snapshots, returns the refreshed count.
    ///   Works on a copy, so a failed lookup leaves every line as it was.
    async fn handle_action(
        &mut self,
        action: OrderAction,
        ctx: &OrderContext,
    ) -> Result<OrderActionResult, OrderError> {
        match action {
            OrderAction::AddLine(line) => {
                validate_line(&line)?;
                self.lines.push(line);
                Ok(OrderActionResult::AddLine(self.lines.len()))
            }
            OrderAction::ProcessSetItems => {
                let mut draft = self.clone();
                let refreshed = ctx.processor().process(&mut draft).await?;
                *self = draft;
                Ok(OrderActionResult::ProcessSetItems(refreshed))
            }
        }
    }
}
