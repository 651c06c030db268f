use crate::error::DomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// A monetary amount in one currency.
///
/// The number is an exact decimal; serialized it is a string (`"12.50"`), never a float.
/// Deserialization goes through [`Price::new`], so a stored price obeys the same rules as a
/// constructed one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PriceRecord", into = "PriceRecord")]
pub struct Price {
    number: Decimal,
    currency_code: String,
}

impl Price {
    /// Creates a price, rejecting currency codes that are not three uppercase letters.
    pub fn new(number: Decimal, currency_code: impl Into<String>) -> Result<Self, DomainError> {
        let currency_code = currency_code.into();
        if currency_code.len() != 3 || !currency_code.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(DomainError::invalid(format!(
                "invalid currency code '{currency_code}'"
            )));
        }
        Ok(Self {
            number,
            currency_code,
        })
    }

    /// Parses the number from its string form, e.g. a stored `unit_price__number` column.
    pub fn parse(number: &str, currency_code: &str) -> Result<Self, DomainError> {
        let number = Decimal::from_str(number.trim())
            .map_err(|_| DomainError::invalid(format!("'{number}' is not a valid price number")))?;
        Self::new(number, currency_code)
    }

    pub fn number(&self) -> Decimal {
        self.number
    }

    pub fn currency_code(&self) -> &str {
        &self.currency_code
    }

    /// Returns a copy with the number replaced and the currency kept.
    pub fn with_number(&self, number: Decimal) -> Self {
        Self {
            number,
            currency_code: self.currency_code.clone(),
        }
    }

    /// `number × factor`, failing instead of overflowing.
    pub fn multiply(&self, factor: Decimal) -> Result<Self, DomainError> {
        self.number
            .checked_mul(factor)
            .map(|number| self.with_number(number))
            .ok_or_else(|| DomainError::invalid(format!("{self} × {factor} overflows")))
    }
}

/// Wire form of a [`Price`].
#[derive(Serialize, Deserialize)]
struct PriceRecord {
    number: Decimal,
    currency_code: String,
}

impl TryFrom<PriceRecord> for Price {
    type Error = DomainError;

    fn try_from(record: PriceRecord) -> Result<Self, Self::Error> {
        Price::new(record.number, record.currency_code)
    }
}

impl From<Price> for PriceRecord {
    fn from(price: Price) -> Self {
        Self {
            number: price.number,
            currency_code: price.currency_code,
        }
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.number, self.currency_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_code_must_be_three_uppercase_letters() {
        assert!(Price::parse("1.00", "EUR").is_ok());
        assert!(Price::parse("1.00", "eur").is_err());
        assert!(Price::parse("1.00", "EURO").is_err());
        assert!(Price::parse("1.00", "").is_err());
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        let err = Price::parse("12,50", "EUR").unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn test_deserialize_validates_currency_code() {
        let price: Price =
            serde_json::from_str(r#"{"number":"12.50","currency_code":"EUR"}"#).unwrap();
        assert_eq!(price, Price::parse("12.50", "EUR").unwrap());

        let err = serde_json::from_str::<Price>(r#"{"number":"12.50","currency_code":"euro"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("invalid currency code 'euro'"));
    }

    #[test]
    fn test_multiply_reports_overflow() {
        let price = Price::parse("2.50", "EUR").unwrap();
        assert_eq!(
            price.multiply(Decimal::from(3)).unwrap(),
            Price::parse("7.50", "EUR").unwrap()
        );

        let huge = Price::new(Decimal::MAX, "EUR").unwrap();
        assert!(matches!(
            huge.multiply(Decimal::TWO),
            Err(DomainError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_display() {
        let price = Price::parse("12.50", "EUR").unwrap();
        assert_eq!(price.to_string(), "12.50 EUR");
    }
}
