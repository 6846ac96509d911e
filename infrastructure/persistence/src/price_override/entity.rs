use chrono::NaiveDate;
use sqlx::FromRow;

use business::domain::price_override::model::PriceOverride;
use business::domain::product::value_objects::ProductCode;
use business::domain::shared::value_objects::Cents;

#[derive(Debug, FromRow)]
pub struct PriceOverrideEntity {
    pub product_code: String,
    pub price: i32,
    pub date_start: NaiveDate,
    pub date_end: Option<NaiveDate>,
}

impl PriceOverrideEntity {
    pub fn into_domain(self) -> PriceOverride {
        PriceOverride::from_repository(
            ProductCode::new(self.product_code),
            Cents::new(i64::from(self.price)),
            self.date_start,
            self.date_end,
        )
    }
}
