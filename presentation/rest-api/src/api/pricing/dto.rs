use std::collections::BTreeMap;

use poem_openapi::Object;

use business::domain::shared::value_objects::Cents;

/// Resolved price of a product.
#[derive(Debug, Clone, Object)]
pub struct PriceResponse {
    /// Final price in cents, after any price override and gift card.
    /// Can be negative when a gift card exceeds the price.
    pub price: i64,
}

impl From<Cents> for PriceResponse {
    fn from(price: Cents) -> Self {
        Self {
            price: price.value(),
        }
    }
}

/// Returned with HTTP 404. The `price` key holds the error message
/// instead of a number.
#[derive(Debug, Clone, Object)]
pub struct PriceNotFoundResponse {
    pub price: String,
}

/// Validation messages keyed by field name, e.g. `{"date": ["..."]}`.
pub type FieldErrorsResponse = BTreeMap<String, Vec<String>>;
