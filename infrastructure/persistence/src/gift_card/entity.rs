use chrono::NaiveDate;
use sqlx::FromRow;

use business::domain::gift_card::model::GiftCard;
use business::domain::gift_card::value_objects::GiftCardCode;
use business::domain::shared::value_objects::Cents;

#[derive(Debug, FromRow)]
pub struct GiftCardEntity {
    pub code: String,
    pub amount: i32,
    pub date_start: NaiveDate,
    pub date_end: Option<NaiveDate>,
}

impl GiftCardEntity {
    pub fn into_domain(self) -> GiftCard {
        GiftCard::from_repository(
            GiftCardCode::new(self.code),
            Cents::new(i64::from(self.amount)),
            self.date_start,
            self.date_end,
        )
    }
}
