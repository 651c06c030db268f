//! # Set Items
//!
//! A [`SetItem`] is one line of a product set's composition: which variation, how many, and
//! a snapshot of the variation's SKU, title and price taken when the item was built. The
//! snapshot may be stale relative to the live variation; that is the point of caching it on
//! order lines.
//!
//! Items are rebuilt on every read of a composition and never mutated afterwards.
//! [`SetItem::with_unit_price`] is the one sanctioned change and returns a new item, so a
//! calculated (tax- or promotion-adjusted) price can replace the catalog price without
//! touching the original.
//!
//! ## Storage Layouts
//!
//! - [`SetItemRecord`] keeps the price nested, for structured storage and serde.
//! - [`FlatSetItemRecord`] splits the price into `unit_price__number` and
//!   `unit_price__currency_code` columns, one row per item:
//!
//! | column | type |
//! |---|---|
//! | `variation_id` | integer |
//! | `sku` | string ≤ 255 |
//! | `title` | string ≤ 255 |
//! | `quantity` | decimal(10,2) |
//! | `unit_price__number` | decimal(19,6) |
//! | `unit_price__currency_code` | string(3) |

use crate::error::DomainError;
use crate::model::{Price, Variation, VariationId};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Width of the `sku` and `title` columns.
pub const MAX_TEXT_LENGTH: usize = 255;
/// Scale of the `quantity` column.
pub const QUANTITY_SCALE: u32 = 2;
/// Scale of the `unit_price__number` column.
pub const PRICE_SCALE: u32 = 6;
/// Digits left of the point in `decimal(10,2)`.
const QUANTITY_INTEGER_DIGITS: u32 = 10 - QUANTITY_SCALE;
/// Digits left of the point in `decimal(19,6)`.
const PRICE_INTEGER_DIGITS: u32 = 19 - PRICE_SCALE;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SetItemRecord", into = "SetItemRecord")]
pub struct SetItem {
    variation_id: VariationId,
    sku: String,
    title: String,
    quantity: Decimal,
    unit_price: Option<Price>,
}

impl SetItem {
    /// Creates an item without descriptive snapshot or price.
    pub fn new(variation_id: VariationId, quantity: Decimal) -> Result<Self, DomainError> {
        Self::with_snapshot(variation_id, quantity, "", "", None)
    }

    /// Creates an item carrying a descriptive snapshot and, optionally, a unit price.
    ///
    /// Applies the same checks as reading a stored record, so every item can be written
    /// back to either layout.
    pub fn with_snapshot(
        variation_id: VariationId,
        quantity: Decimal,
        sku: impl Into<String>,
        title: impl Into<String>,
        unit_price: Option<Price>,
    ) -> Result<Self, DomainError> {
        let (sku, title) = (sku.into(), title.into());
        validate_variation_id(Some(variation_id))?;
        validate_quantity(quantity)?;
        validate_text("sku", &sku)?;
        validate_text("title", &title)?;
        validate_unit_price(unit_price.as_ref())?;
        Ok(Self {
            variation_id,
            sku,
            title,
            quantity,
            unit_price,
        })
    }

    /// Snapshots a live variation: its SKU, title and catalog price.
    pub fn from_variation(variation: &Variation, quantity: Decimal) -> Result<Self, DomainError> {
        Self::with_snapshot(
            variation.id,
            quantity,
            variation.sku.clone(),
            variation.title.clone(),
            Some(variation.price.clone()),
        )
    }

    /// Rebuilds an item from its nested record.
    pub fn from_record(record: SetItemRecord) -> Result<Self, DomainError> {
        let variation_id = validate_variation_id(record.variation_id)?;
        let quantity = parse_quantity(record.quantity.as_deref())?;
        validate_text("sku", &record.sku)?;
        validate_text("title", &record.title)?;
        validate_unit_price(record.unit_price.as_ref())?;
        Ok(Self {
            variation_id,
            sku: record.sku,
            title: record.title,
            quantity,
            unit_price: record.unit_price,
        })
    }

    /// Rebuilds an item from a flat storage row.
    ///
    /// The price is only restored when both price columns are filled; a half-filled pair
    /// reads as "no price".
    pub fn from_flat_record(record: FlatSetItemRecord) -> Result<Self, DomainError> {
        let variation_id = validate_variation_id(record.variation_id)?;
        let quantity = parse_quantity(record.quantity.as_deref())?;
        validate_text("sku", &record.sku)?;
        validate_text("title", &record.title)?;

        let number = record.unit_price_number.trim();
        let currency_code = record.unit_price_currency_code.trim();
        let unit_price = if number.is_empty() || currency_code.is_empty() {
            None
        } else {
            Some(Price::parse(number, currency_code)?)
        };
        validate_unit_price(unit_price.as_ref())?;

        Ok(Self {
            variation_id,
            sku: record.sku,
            title: record.title,
            quantity,
            unit_price,
        })
    }

    pub fn to_record(&self) -> SetItemRecord {
        SetItemRecord {
            variation_id: Some(self.variation_id),
            sku: self.sku.clone(),
            title: self.title.clone(),
            quantity: Some(self.quantity.to_string()),
            unit_price: self.unit_price.clone(),
        }
    }

    /// Flattens the item into one storage row, rounding quantity and price to the column
    /// scales. A missing price becomes two empty columns.
    pub fn to_flat_record(&self) -> FlatSetItemRecord {
        let (unit_price_number, unit_price_currency_code) = match &self.unit_price {
            Some(price) => (
                round(price.number(), PRICE_SCALE).to_string(),
                price.currency_code().to_string(),
            ),
            None => (String::new(), String::new()),
        };
        FlatSetItemRecord {
            variation_id: Some(self.variation_id),
            sku: self.sku.clone(),
            title: self.title.clone(),
            quantity: Some(round(self.quantity, QUANTITY_SCALE).to_string()),
            unit_price_number,
            unit_price_currency_code,
        }
    }

    /// Returns a copy of this item with `unit_price` replacing the current price.
    pub fn with_unit_price(&self, unit_price: Price) -> Self {
        Self {
            unit_price: Some(unit_price),
            ..self.clone()
        }
    }

    pub fn variation_id(&self) -> VariationId {
        self.variation_id
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn unit_price(&self) -> Option<&Price> {
        self.unit_price.as_ref()
    }

    /// `unit_price × quantity`, or `None` if the item has no price.
    pub fn total_price(&self) -> Result<Option<Price>, DomainError> {
        self.unit_price
            .as_ref()
            .map(|price| price.multiply(self.quantity))
            .transpose()
    }
}

/// Nested representation of a [`SetItem`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetItemRecord {
    pub variation_id: Option<VariationId>,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub title: String,
    /// Decimal string, e.g. `"2.5"`.
    pub quantity: Option<String>,
    #[serde(default)]
    pub unit_price: Option<Price>,
}

/// Flat, one-row-per-item representation of a [`SetItem`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatSetItemRecord {
    pub variation_id: Option<VariationId>,
    #[serde(default)]
    pub sku: String,
    #[serde(default)]
    pub title: String,
    pub quantity: Option<String>,
    #[serde(default, rename = "unit_price__number")]
    pub unit_price_number: String,
    #[serde(default, rename = "unit_price__currency_code")]
    pub unit_price_currency_code: String,
}

impl TryFrom<SetItemRecord> for SetItem {
    type Error = DomainError;

    fn try_from(record: SetItemRecord) -> Result<Self, Self::Error> {
        SetItem::from_record(record)
    }
}

impl From<SetItem> for SetItemRecord {
    fn from(item: SetItem) -> Self {
        item.to_record()
    }
}

impl TryFrom<FlatSetItemRecord> for SetItem {
    type Error = DomainError;

    fn try_from(record: FlatSetItemRecord) -> Result<Self, Self::Error> {
        SetItem::from_flat_record(record)
    }
}

fn validate_variation_id(id: Option<VariationId>) -> Result<VariationId, DomainError> {
    match id {
        Some(id) if id.0 > 0 => Ok(id),
        _ => Err(DomainError::invalid("a set item requires a variation ID")),
    }
}

pub(crate) fn validate_quantity(quantity: Decimal) -> Result<Decimal, DomainError> {
    if quantity < Decimal::ZERO {
        return Err(DomainError::invalid(format!(
            "quantity {quantity} must not be negative"
        )));
    }
    if !fits_column(quantity, QUANTITY_SCALE, QUANTITY_INTEGER_DIGITS) {
        return Err(DomainError::invalid(format!(
            "quantity {quantity} exceeds decimal(10,2)"
        )));
    }
    Ok(quantity)
}

fn validate_unit_price(price: Option<&Price>) -> Result<(), DomainError> {
    match price {
        Some(price) if !fits_column(price.number(), PRICE_SCALE, PRICE_INTEGER_DIGITS) => Err(
            DomainError::invalid(format!("unit price {price} exceeds decimal(19,6)")),
        ),
        _ => Ok(()),
    }
}

/// Whether `value`, rounded to `scale`, has at most `integer_digits` digits left of the point.
fn fits_column(value: Decimal, scale: u32, integer_digits: u32) -> bool {
    round(value, scale).abs() < Decimal::from(10u64.pow(integer_digits))
}

/// Parses a stored quantity with decimal semantics. Accepts plain and scientific
/// notation; rejects empty, non-numeric, negative and out-of-column values.
pub fn parse_quantity(raw: Option<&str>) -> Result<Decimal, DomainError> {
    let raw = raw.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(DomainError::invalid("a set item requires a quantity"));
    }
    let quantity = Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|_| DomainError::invalid(format!("quantity '{raw}' is not numeric")))?;
    validate_quantity(quantity)
}

fn validate_text(field: &str, value: &str) -> Result<(), DomainError> {
    if value.chars().count() > MAX_TEXT_LENGTH {
        return Err(DomainError::invalid(format!(
            "{field} exceeds {MAX_TEXT_LENGTH} characters"
        )));
    }
    Ok(())
}

fn round(value: Decimal, scale: u32) -> Decimal {
    value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero)
}
