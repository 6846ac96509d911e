use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use super::errors::FieldErrors;
use crate::domain::gift_card::value_objects::GiftCardCode;
use crate::domain::product::value_objects::ProductCode;

pub const PRODUCT_CODE_FIELD: &str = "product_code";
pub const DATE_FIELD: &str = "date";

pub const NULL_FIELD_MSG: &str = "This field may not be null.";
pub const BLANK_FIELD_MSG: &str = "This field may not be blank.";
pub const NULL_CHARACTERS_MSG: &str = "Null characters are not allowed.";
pub const DATE_FORMAT_MSG: &str =
    "Date has wrong format. Use one of these formats instead: YYYY[-MM[-DD]].";

static ISO_DATE: Lazy<Option<Regex>> =
    Lazy::new(|| Regex::new(r"^(?P<year>\d{4})-(?P<month>\d{1,2})-(?P<day>\d{1,2})$").ok());

/// A price request whose inputs passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceQuery {
    pub product_code: ProductCode,
    pub date: NaiveDate,
    pub gift_card_code: Option<GiftCardCode>,
}

impl PriceQuery {
    /// Validates raw request inputs, collecting every field error.
    ///
    /// The product code is checked for blankness and NUL characters but kept
    /// verbatim for lookup.
    /// An empty gift card code counts as no gift card.
    pub fn parse(
        product_code: Option<String>,
        date: Option<String>,
        gift_card_code: Option<String>,
    ) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let product_code = match product_code {
            None => {
                errors.add(PRODUCT_CODE_FIELD, NULL_FIELD_MSG);
                None
            }
            Some(code) if code.trim().is_empty() => {
                errors.add(PRODUCT_CODE_FIELD, BLANK_FIELD_MSG);
                None
            }
            Some(code) if code.contains('\0') => {
                errors.add(PRODUCT_CODE_FIELD, NULL_CHARACTERS_MSG);
                None
            }
            Some(code) => Some(ProductCode::new(code)),
        };

        let date = match date {
            None => {
                errors.add(DATE_FIELD, NULL_FIELD_MSG);
                None
            }
            Some(raw) => match parse_iso_date(&raw) {
                Some(date) => Some(date),
                None => {
                    errors.add(DATE_FIELD, DATE_FORMAT_MSG);
                    None
                }
            },
        };

        match (product_code, date) {
            (Some(product_code), Some(date)) if errors.is_empty() => Ok(Self {
                product_code,
                date,
                gift_card_code: gift_card_code
                    .filter(|code| !code.is_empty())
                    .map(GiftCardCode::new),
            }),
            _ => Err(errors),
        }
    }
}

/// Parses `YYYY-M-D` style dates, rejecting impossible calendar days.
///
/// Years start at 1.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let caps = ISO_DATE.as_ref()?.captures(raw)?;
    let year = caps["year"].parse::<i32>().ok()?;
    if year < 1 {
        return None;
    }
    let month = caps["month"].parse::<u32>().ok()?;
    let day = caps["day"].parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn should_accept_valid_inputs() {
        let query = PriceQuery::parse(some("COOL"), some("2050-05-28"), some("10OFF")).unwrap();

        assert_eq!(query.product_code, ProductCode::from("COOL"));
        assert_eq!(query.date, NaiveDate::from_ymd_opt(2050, 5, 28).unwrap());
        assert_eq!(query.gift_card_code, Some(GiftCardCode::from("10OFF")));
    }

    #[test]
    fn should_treat_empty_gift_card_code_as_absent() {
        let query = PriceQuery::parse(some("COOL"), some("2050-05-28"), some("")).unwrap();
        assert!(query.gift_card_code.is_none());
    }

    #[test]
    fn should_reject_missing_product_code() {
        let errors = PriceQuery::parse(None, some("2020-05-15"), None).unwrap_err();

        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![PRODUCT_CODE_FIELD]);
        assert_eq!(
            errors.get(PRODUCT_CODE_FIELD),
            Some(&[NULL_FIELD_MSG.to_string()][..])
        );
    }

    #[test]
    fn should_reject_blank_product_code() {
        let errors = PriceQuery::parse(some("   "), some("2020-05-15"), None).unwrap_err();
        assert_eq!(
            errors.get(PRODUCT_CODE_FIELD),
            Some(&[BLANK_FIELD_MSG.to_string()][..])
        );
    }

    #[test]
    fn should_reject_product_code_with_null_characters() {
        let errors = PriceQuery::parse(some("CO\0OL"), some("2020-05-28"), None).unwrap_err();

        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![PRODUCT_CODE_FIELD]);
        assert_eq!(
            errors.get(PRODUCT_CODE_FIELD),
            Some(&[NULL_CHARACTERS_MSG.to_string()][..])
        );
    }

    #[test]
    fn should_reject_missing_date() {
        let errors = PriceQuery::parse(some("COOL"), None, None).unwrap_err();

        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![DATE_FIELD]);
        assert_eq!(errors.get(DATE_FIELD), Some(&[NULL_FIELD_MSG.to_string()][..]));
    }

    #[test]
    fn should_reject_malformed_date() {
        let errors =
            PriceQuery::parse(some("COOL"), some("202@@20-0111115-15"), None).unwrap_err();
        assert_eq!(errors.get(DATE_FIELD), Some(&[DATE_FORMAT_MSG.to_string()][..]));
    }

    #[test]
    fn should_report_both_fields_when_both_are_missing() {
        let errors = PriceQuery::parse(None, None, None).unwrap_err();
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec![DATE_FIELD, PRODUCT_CODE_FIELD]
        );
    }

    #[test]
    fn should_reject_year_zero_in_query() {
        let errors = PriceQuery::parse(some("COOL"), some("0000-05-28"), None).unwrap_err();
        assert_eq!(errors.get(DATE_FIELD), Some(&[DATE_FORMAT_MSG.to_string()][..]));
    }

    #[test]
    fn should_accept_year_one() {
        assert_eq!(parse_iso_date("0001-01-01"), NaiveDate::from_ymd_opt(1, 1, 1));
    }

    #[test]
    fn should_parse_single_digit_month_and_day() {
        assert_eq!(
            parse_iso_date("2020-5-1"),
            NaiveDate::from_ymd_opt(2020, 5, 1)
        );
    }

    #[test]
    fn should_reject_impossible_calendar_dates() {
        assert!(parse_iso_date("2019-02-29").is_none());
        assert!(parse_iso_date("2020-13-01").is_none());
        assert!(parse_iso_date("0000-05-28").is_none());
        assert!(parse_iso_date("").is_none());
        assert!(parse_iso_date("2020-05-15T10:00:00").is_none());
    }
}
