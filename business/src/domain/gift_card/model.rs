use chrono::NaiveDate;

use super::value_objects::GiftCardCode;
use crate::domain::shared::value_objects::Cents;

/// A fixed-amount discount redeemable from `date_start`, until `date_end`
/// inclusive when one is set.
#[derive(Debug, Clone, PartialEq)]
pub struct GiftCard {
    pub code: GiftCardCode,
    pub amount: Cents,
    pub date_start: NaiveDate,
    pub date_end: Option<NaiveDate>,
}

impl GiftCard {
    pub fn from_repository(
        code: GiftCardCode,
        amount: Cents,
        date_start: NaiveDate,
        date_end: Option<NaiveDate>,
    ) -> Self {
        Self {
            code,
            amount,
            date_start,
            date_end,
        }
    }

    /// `date_start <= date AND (date_end IS NULL OR date_end >= date)`
    pub fn is_valid_on(&self, date: NaiveDate) -> bool {
        self.date_start <= date && self.date_end.is_none_or(|end| end >= date)
    }

    pub fn formatted_amount(&self) -> String {
        self.amount.formatted()
    }
}

impl std::fmt::Display for GiftCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.code, self.formatted_amount())
    }
}
