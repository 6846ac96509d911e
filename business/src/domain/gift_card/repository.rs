use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::errors::RepositoryError;

use super::model::GiftCard;
use super::value_objects::GiftCardCode;

#[async_trait]
pub trait GiftCardRepository: Send + Sync {
    /// Returns the card with this exact code when it is valid on `date`.
    async fn find_valid(
        &self,
        code: &GiftCardCode,
        date: NaiveDate,
    ) -> Result<Option<GiftCard>, RepositoryError>;
}
