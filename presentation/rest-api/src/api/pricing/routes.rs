use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::pricing::use_cases::resolve_price::{ResolvePriceParams, ResolvePriceUseCase};

use crate::api::error::ErrorResponse;
use crate::api::pricing::dto::{FieldErrorsResponse, PriceNotFoundResponse, PriceResponse};
use crate::api::tags::ApiTags;

pub struct PricingApi {
    resolve_price_use_case: Arc<dyn ResolvePriceUseCase>,
}

impl PricingApi {
    pub fn new(resolve_price_use_case: Arc<dyn ResolvePriceUseCase>) -> Self {
        Self {
            resolve_price_use_case,
        }
    }
}

/// Pricing API
///
/// Resolves the price of a product on a given date.
#[OpenApi]
impl PricingApi {
    /// Get the price of a product
    ///
    /// Uses the price override active on `date` when there is one, otherwise
    /// the product's base price. A gift card valid on `date` is then subtracted.
    #[oai(path = "/api/get_price", method = "get", tag = "ApiTags::Pricing")]
    async fn get_price(
        &self,
        /// Product code, e.g. `COOL`
        #[oai(name = "productCode")]
        product_code: Query<Option<String>>,
        /// Reference date in `YYYY-MM-DD` format
        date: Query<Option<String>>,
        /// Optional gift card code, e.g. `200OFF`
        #[oai(name = "giftCardCode")]
        gift_card_code: Query<Option<String>>,
    ) -> GetPriceResponse {
        let params = ResolvePriceParams {
            product_code: product_code.0,
            date: date.0,
            gift_card_code: gift_card_code.0,
        };

        match self.resolve_price_use_case.execute(params).await {
            Ok(price) => GetPriceResponse::Ok(Json(price.into())),
            Err(err) => err.into(),
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetPriceResponse {
    #[oai(status = 200)]
    Ok(Json<PriceResponse>),
    #[oai(status = 400)]
    BadRequest(Json<FieldErrorsResponse>),
    #[oai(status = 404)]
    NotFound(Json<PriceNotFoundResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::application::pricing::resolve_price::ResolvePriceUseCaseImpl;
    use business::domain::gift_card::model::GiftCard;
    use business::domain::gift_card::value_objects::GiftCardCode;
    use business::domain::price_override::model::PriceOverride;
    use business::domain::product::model::Product;
    use business::domain::product::value_objects::ProductCode;
    use business::domain::shared::value_objects::Cents;
    use chrono::NaiveDate;
    use logger::TracingLogger;
    use persistence::memory::InMemoryCatalog;
    use poem::Endpoint;
    use poem::http::StatusCode;
    use poem::middleware::Cors;
    use poem::test::TestClient;
    use serde_json::json;

    use crate::api::health::routes::HealthApi;
    use crate::setup::dependency_injection::DependencyContainer;
    use crate::setup::server::Server;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn product(code: &str, name: &str, price: i64) -> Product {
        Product::from_repository(ProductCode::from(code), name.to_string(), Cents::new(price))
    }

    fn price_override(code: &str, price: i64, start: NaiveDate, end: NaiveDate) -> PriceOverride {
        PriceOverride::from_repository(ProductCode::from(code), Cents::new(price), start, Some(end))
    }

    fn gift_card(code: &str, amount: i64, start: NaiveDate) -> GiftCard {
        GiftCard::from_repository(GiftCardCode::from(code), Cents::new(amount), start, None)
    }

    fn seeded_catalog() -> Arc<InMemoryCatalog> {
        Arc::new(
            InMemoryCatalog::new()
                .with_product(product("COOL", "Cool Product 1", 100000))
                .with_product(product("AWESOME", "Awesome Product", 1000))
                .with_product(product("CRAPPY", "Crappy Product", 9900000))
                .with_price_override(price_override(
                    "COOL",
                    20000,
                    date(2050, 1, 1),
                    date(2050, 12, 31),
                ))
                .with_price_override(price_override(
                    "COOL",
                    500,
                    date(2020, 5, 1),
                    date(2020, 5, 28),
                ))
                .with_price_override(price_override(
                    "AWESOME",
                    90000,
                    date(2019, 11, 16),
                    date(2019, 11, 20),
                ))
                .with_gift_card(gift_card("10OFF", 1000, date(2050, 6, 22)))
                .with_gift_card(gift_card("150OFF", 15000, date(2022, 7, 1)))
                .with_gift_card(gift_card("200OFF", 20000, date(2017, 1, 15))),
        )
    }

    fn app() -> impl Endpoint {
        let catalog = seeded_catalog();
        let use_case = Arc::new(ResolvePriceUseCaseImpl {
            product_repository: catalog.clone(),
            price_override_repository: catalog.clone(),
            gift_card_repository: catalog,
            logger: Arc::new(TracingLogger),
        });
        let container = DependencyContainer {
            health_api: HealthApi::new(),
            pricing_api: PricingApi::new(use_case),
        };
        Server::app(container, Cors::new(), "http://localhost")
    }

    #[tokio::test]
    async fn should_return_base_price_for_valid_date_and_product() {
        let cli = TestClient::new(app());

        let resp = cli
            .get("/api/get_price/")
            .query("productCode", &"CRAPPY")
            .query("date", &"1990-02-20")
            .send()
            .await;

        resp.assert_status_is_ok();
        resp.assert_json(json!({ "price": 9900000 })).await;
    }

    #[tokio::test]
    async fn should_return_override_price_when_one_is_active() {
        let cli = TestClient::new(app());

        let resp = cli
            .get("/api/get_price/")
            .query("productCode", &"COOL")
            .query("date", &"2050-05-28")
            .send()
            .await;

        resp.assert_status_is_ok();
        resp.assert_json(json!({ "price": 20000 })).await;
    }

    #[tokio::test]
    async fn should_subtract_gift_card_from_price() {
        let cli = TestClient::new(app());

        let resp = cli
            .get("/api/get_price/")
            .query("productCode", &"CRAPPY")
            .query("date", &"2017-05-28")
            .query("giftCardCode", &"200OFF")
            .send()
            .await;

        resp.assert_status_is_ok();
        resp.assert_json(json!({ "price": 9880000 })).await;
    }

    #[tokio::test]
    async fn should_return_404_when_no_product_exists() {
        let cli = TestClient::new(app());

        let resp = cli
            .get("/api/get_price/")
            .query("productCode", &"THISCODEDOESNTEXIST")
            .query("date", &"2017-05-28")
            .send()
            .await;

        resp.assert_status(StatusCode::NOT_FOUND);
        resp.assert_json(json!({ "price": "No product was found for that product code" }))
            .await;
    }

    #[tokio::test]
    async fn should_return_400_for_badly_formatted_date() {
        let cli = TestClient::new(app());

        let resp = cli
            .get("/api/get_price/")
            .query("date", &"202@@20-0111115-15")
            .query("productCode", &"COOL")
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_json(json!({
            "date": ["Date has wrong format. Use one of these formats instead: YYYY[-MM[-DD]]."]
        }))
        .await;
    }

    #[tokio::test]
    async fn should_return_400_when_product_code_is_missing() {
        let cli = TestClient::new(app());

        let resp = cli
            .get("/api/get_price/")
            .query("date", &"2020-05-15")
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_json(json!({ "product_code": ["This field may not be null."] }))
            .await;
    }

    #[tokio::test]
    async fn should_return_400_when_date_is_missing() {
        let cli = TestClient::new(app());

        let resp = cli
            .get("/api/get_price/")
            .query("productCode", &"COOL")
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_json(json!({ "date": ["This field may not be null."] }))
            .await;
    }

    #[tokio::test]
    async fn should_serve_price_without_trailing_slash() {
        let cli = TestClient::new(app());

        let resp = cli
            .get("/api/get_price")
            .query("productCode", &"CRAPPY")
            .query("date", &"1990-02-20")
            .send()
            .await;

        resp.assert_status_is_ok();
        resp.assert_json(json!({ "price": 9900000 })).await;
    }

    #[tokio::test]
    async fn should_return_400_when_product_code_has_null_characters() {
        let cli = TestClient::new(app());

        let resp = cli
            .get("/api/get_price/")
            .query("productCode", &"CO\0OL")
            .query("date", &"2020-05-28")
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_json(json!({ "product_code": ["Null characters are not allowed."] }))
            .await;
    }

    #[tokio::test]
    async fn should_return_400_for_year_zero() {
        let cli = TestClient::new(app());

        let resp = cli
            .get("/api/get_price/")
            .query("productCode", &"COOL")
            .query("date", &"0000-05-28")
            .send()
            .await;

        resp.assert_status(StatusCode::BAD_REQUEST);
        resp.assert_json(json!({
            "date": ["Date has wrong format. Use one of these formats instead: YYYY[-MM[-DD]]."]
        }))
        .await;
    }
}
