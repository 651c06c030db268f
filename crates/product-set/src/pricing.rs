//! # Rate-based price calculation
//!
//! [`RateCalculator`] is the stock [`PriceCalculator`]: it starts from the variation's
//! catalog price and adds a percentage for every configured [`RateRule`] whose adjustment
//! type was requested and whose store (if the rule names one) is the context store.

use crate::error::DomainError;
use crate::model::{StoreId, Variation};
use crate::ports::{AdjustmentType, PriceCalculation, PriceCalculator, PriceContext};
use async_trait::async_trait;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Scale calculated prices are rounded to.
const PRICE_ROUNDING_SCALE: u32 = 2;

/// A percentage adjustment, e.g. `-10` for a 10 % promotion or `19` for VAT.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateRule {
    pub adjustment_type: AdjustmentType,
    pub percent: Decimal,
    /// Restricts the rule to one store; `None` applies everywhere.
    #[serde(default)]
    pub store_id: Option<StoreId>,
}

#[derive(Debug, Clone, Default)]
pub struct RateCalculator {
    rules: Vec<RateRule>,
}

impl RateCalculator {
    pub fn new(rules: Vec<RateRule>) -> Self {
        Self { rules }
    }

    fn applies(rule: &RateRule, context: &PriceContext, adjustment_types: &[AdjustmentType]) -> bool {
        adjustment_types.contains(&rule.adjustment_type)
            && rule.store_id.map_or(true, |store| store == context.store_id)
    }
}

#[async_trait]
impl PriceCalculator for RateCalculator {
    async fn calculate(
        &self,
        variation: &Variation,
        quantity: Decimal,
        context: &PriceContext,
        adjustment_types: &[AdjustmentType],
    ) -> Result<PriceCalculation, DomainError> {
        let base = variation.price.number();
        let overflow = || {
            DomainError::invalid(format!(
                "price adjustment of {} overflows",
                variation.price
            ))
        };
        let percent = self
            .rules
            .iter()
            .filter(|rule| Self::applies(rule, context, adjustment_types))
            .try_fold(Decimal::ZERO, |sum, rule| sum.checked_add(rule.percent))
            .ok_or_else(overflow)?;

        let adjusted = base
            .checked_mul(percent)
            .and_then(|delta| delta.checked_div(Decimal::ONE_HUNDRED))
            .and_then(|delta| base.checked_add(delta))
            .ok_or_else(overflow)?
            .round_dp_with_strategy(PRICE_ROUNDING_SCALE, RoundingStrategy::MidpointAwayFromZero);
        debug!(variation_id = %variation.id, %quantity, %percent, %adjusted, "Calculated price");

        Ok(PriceCalculation {
            base_price: variation.price.clone(),
            calculated_price: variation.price.with_number(adjusted),
        })
    }
}
