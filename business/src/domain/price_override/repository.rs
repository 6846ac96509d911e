use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::errors::RepositoryError;
use crate::domain::product::value_objects::ProductCode;

use super::model::PriceOverride;

#[async_trait]
pub trait PriceOverrideRepository: Send + Sync {
    /// Returns the first override of `product_code` active on `date`, if any.
    /// Overlapping windows are not rejected; lookup order decides.
    async fn find_for_product_on_date(
        &self,
        product_code: &ProductCode,
        date: NaiveDate,
    ) -> Result<Option<PriceOverride>, RepositoryError>;
}
