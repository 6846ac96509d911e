use std::sync::Arc;

use business::application::pricing::resolve_price::ResolvePriceUseCaseImpl;
use logger::TracingLogger;
use persistence::gift_card::repository::GiftCardRepositoryPostgres;
use persistence::price_override::repository::PriceOverrideRepositoryPostgres;
use persistence::product::repository::ProductRepositoryPostgres;

use crate::api::health::routes::HealthApi;
use crate::api::pricing::routes::PricingApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub pricing_api: PricingApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let product_repository = Arc::new(ProductRepositoryPostgres::new(pool.clone()));
        let price_override_repository =
            Arc::new(PriceOverrideRepositoryPostgres::new(pool.clone()));
        let gift_card_repository = Arc::new(GiftCardRepositoryPostgres::new(pool));

        // Pricing use cases
        let resolve_price_use_case = Arc::new(ResolvePriceUseCaseImpl {
            product_repository,
            price_override_repository,
            gift_card_repository,
            logger,
        });

        Self {
            health_api: HealthApi::new(),
            pricing_api: PricingApi::new(resolve_price_use_case),
        }
    }
}
