use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::gift_card::repository::GiftCardRepository;
use crate::domain::logger::Logger;
use crate::domain::price_override::repository::PriceOverrideRepository;
use crate::domain::pricing::errors::PriceError;
use crate::domain::pricing::use_cases::resolve_price::{ResolvePriceParams, ResolvePriceUseCase};
use crate::domain::pricing::validation::PriceQuery;
use crate::domain::product::repository::ProductRepository;
use crate::domain::shared::value_objects::Cents;

pub struct ResolvePriceUseCaseImpl {
    pub product_repository: Arc<dyn ProductRepository>,
    pub price_override_repository: Arc<dyn PriceOverrideRepository>,
    pub gift_card_repository: Arc<dyn GiftCardRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ResolvePriceUseCase for ResolvePriceUseCaseImpl {
    async fn execute(&self, params: ResolvePriceParams) -> Result<Cents, PriceError> {
        let query = PriceQuery::parse(params.product_code, params.date, params.gift_card_code)
            .map_err(|errors| {
                self.logger.debug(&format!(
                    "Rejected price request, invalid fields: {}",
                    errors.fields().collect::<Vec<_>>().join(", ")
                ));
                PriceError::Validation(errors)
            })?;

        self.logger.info(&format!(
            "Resolving price for product {} on {}",
            query.product_code, query.date
        ));

        let product = self
            .product_repository
            .find_by_code(&query.product_code)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => {
                    self.logger
                        .warn(&format!("No product found for code {}", query.product_code));
                    PriceError::ProductNotFound
                }
                other => PriceError::Repository(other),
            })?;

        let mut price = match self
            .price_override_repository
            .find_for_product_on_date(&product.code, query.date)
            .await?
        {
            Some(price_override) => {
                self.logger.debug(&format!(
                    "Price override {} applies to {} (base {})",
                    price_override.price, product.code, product.base_price
                ));
                price_override.price
            }
            None => product.base_price,
        };

        if let Some(gift_card_code) = &query.gift_card_code {
            match self
                .gift_card_repository
                .find_valid(gift_card_code, query.date)
                .await?
            {
                Some(gift_card) => {
                    self.logger
                        .debug(&format!("Applying gift card {}", gift_card));
                    price = price.minus(gift_card.amount);
                }
                None => self.logger.debug(&format!(
                    "Gift card {} is unknown or not valid on {}",
                    gift_card_code, query.date
                )),
            }
        }

        self.logger
            .info(&format!("Resolved price for {}: {}", product.code, price));
        Ok(price)
    }
}
