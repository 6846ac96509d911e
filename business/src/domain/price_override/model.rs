use chrono::NaiveDate;

use crate::domain::product::value_objects::ProductCode;
use crate::domain::shared::value_objects::Cents;

/// A price that replaces a product's base price for an inclusive date window.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceOverride {
    pub product_code: ProductCode,
    pub price: Cents,
    pub date_start: NaiveDate,
    /// Stored as nullable, but an override without an end date never applies.
    pub date_end: Option<NaiveDate>,
}

impl PriceOverride {
    pub fn from_repository(
        product_code: ProductCode,
        price: Cents,
        date_start: NaiveDate,
        date_end: Option<NaiveDate>,
    ) -> Self {
        Self {
            product_code,
            price,
            date_start,
            date_end,
        }
    }

    /// True when `date_start <= date <= date_end`. Both bounds are required.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        match self.date_end {
            Some(end) => self.date_start <= date && date <= end,
            None => false,
        }
    }

    /// True when this override belongs to `product_code` and is active on `date`.
    pub fn applies_to(&self, product_code: &ProductCode, date: NaiveDate) -> bool {
        &self.product_code == product_code && self.is_active_on(date)
    }
}
