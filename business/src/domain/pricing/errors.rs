use std::collections::BTreeMap;

/// Human readable message returned when a price is requested for an unknown product.
pub const NO_PRODUCT_FOUND_MSG: &str = "No product was found for that product code";

/// Validation messages keyed by the offending input field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.0
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PriceError {
    #[error("pricing.validation_failed")]
    Validation(FieldErrors),
    #[error("pricing.product_not_found")]
    ProductNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl PriceError {
    /// The message shown to API clients for a missing product.
    pub fn product_not_found_message() -> &'static str {
        NO_PRODUCT_FOUND_MSG
    }
}
