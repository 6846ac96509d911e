use super::value_objects::ProductCode;
use crate::domain::shared::value_objects::Cents;

/// A sellable product and its undiscounted list price.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub code: ProductCode,
    /// Customer facing name.
    pub name: String,
    pub base_price: Cents,
}

impl Product {
    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(code: ProductCode, name: String, base_price: Cents) -> Self {
        Self {
            code,
            name,
            base_price,
        }
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.name, self.code)
    }
}
