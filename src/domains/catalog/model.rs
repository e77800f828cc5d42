//! Product entity and its transfer shapes.
//!
//! [`Product`] is the storage row. [`ProductCreate`] is the inbound write
//! shape and [`ProductRead`] the outbound read shape shared by the REST API
//! and the MCP tools.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::error::{CatalogError, CatalogResult};

/// Fractional digits kept for prices (`NUMERIC(10, 2)`).
pub const PRICE_SCALE: u32 = 2;

/// Integer digits allowed by `NUMERIC(10, 2)`.
const PRICE_INTEGER_DIGITS: u32 = 8;

/// A persisted product row.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
}

/// Write shape accepted by the create operation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProductCreate {
    #[validate(length(min = 1, max = 255, message = "must be between 1 and 255 characters"))]
    pub name: String,

    #[serde(with = "rust_decimal::serde::float")]
    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,

    #[serde(default)]
    pub description: Option<String>,
}

impl ProductCreate {
    pub fn new(name: impl Into<String>, price: Decimal, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            price,
            description,
        }
    }

    /// Run field validation and round the price to storage precision.
    ///
    /// Rounding is midpoint-away-from-zero, the same coercion PostgreSQL
    /// applies to `NUMERIC(10, 2)`, so every backend stores the same value.
    pub fn validated(mut self) -> CatalogResult<Self> {
        self.price = round_price(self.price);
        self.validate().map_err(CatalogError::from)?;
        Ok(self)
    }
}

/// Read shape returned by every read and by create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRead {
    pub id: i32,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub description: Option<String>,
}

impl From<Product> for ProductRead {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            description: product.description,
        }
    }
}

/// Round a price to [`PRICE_SCALE`] fractional digits.
pub fn round_price(price: Decimal) -> Decimal {
    price.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    let limit = Decimal::from(10_i64.pow(PRICE_INTEGER_DIGITS));
    if price.abs() >= limit {
        let mut error = ValidationError::new("price_range");
        error.message = Some("must fit NUMERIC(10, 2)".into());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_create_accepts_float_price_and_null_description() {
        let json = r#"{"name": "Widget", "price": 9.99}"#;
        let create: ProductCreate = serde_json::from_str(json).unwrap();
        assert_eq!(create.name, "Widget");
        assert_eq!(create.price, dec("9.99"));
        assert!(create.description.is_none());
    }

    #[test]
    fn test_create_missing_price_is_rejected() {
        let json = r#"{"name": "Widget"}"#;
        assert!(serde_json::from_str::<ProductCreate>(json).is_err());
    }

    #[test]
    fn test_create_wrong_price_type_is_rejected() {
        let json = r#"{"name": "Widget", "price": true}"#;
        assert!(serde_json::from_str::<ProductCreate>(json).is_err());
    }

    #[test]
    fn test_price_rounding_is_pinned() {
        assert_eq!(round_price(dec("19.999")), dec("20.00"));
        assert_eq!(round_price(dec("9.994")), dec("9.99"));
        assert_eq!(round_price(dec("9.995")), dec("10.00"));
        assert_eq!(round_price(dec("-1.005")), dec("-1.01"));
    }

    #[test]
    fn test_validated_rounds_price() {
        let create = ProductCreate::new("Widget", dec("19.999"), None)
            .validated()
            .unwrap();
        assert_eq!(create.price, dec("20.00"));
    }

    #[test]
    fn test_validated_rejects_empty_name() {
        let err = ProductCreate::new("", dec("1.00"), None)
            .validated()
            .unwrap_err();
        assert!(matches!(err, CatalogError::Validation(ref msg) if msg.contains("name")));
    }

    #[test]
    fn test_validated_rejects_oversized_price() {
        let err = ProductCreate::new("Yacht", dec("100000000"), None)
            .validated()
            .unwrap_err();
        assert!(matches!(err, CatalogError::Validation(ref msg) if msg.contains("price")));
    }

    #[test]
    fn test_negative_price_is_allowed() {
        assert!(ProductCreate::new("Refund", dec("-5.00"), None)
            .validated()
            .is_ok());
    }

    #[test]
    fn test_read_shape_serializes_price_as_number() {
        let read = ProductRead::from(Product {
            id: 1,
            name: "Widget".to_string(),
            price: dec("9.99"),
            description: None,
        });
        let value = serde_json::to_value(&read).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["price"].as_f64(), Some(9.99));
        assert!(value["description"].is_null());
    }
}
