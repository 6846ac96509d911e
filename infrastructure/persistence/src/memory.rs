//! In-memory catalog for tests and local development.

use async_trait::async_trait;
use chrono::NaiveDate;

use business::domain::errors::RepositoryError;
use business::domain::gift_card::model::GiftCard;
use business::domain::gift_card::repository::GiftCardRepository;
use business::domain::gift_card::value_objects::GiftCardCode;
use business::domain::price_override::model::PriceOverride;
use business::domain::price_override::repository::PriceOverrideRepository;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductCode;

/// Read-only record sets backing all three repository ports.
///
/// Lookups scan in insertion order, so the first inserted match wins.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
    price_overrides: Vec<PriceOverride>,
    gift_cards: Vec<GiftCard>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_product(mut self, product: Product) -> Self {
        self.products.push(product);
        self
    }

    pub fn with_price_override(mut self, price_override: PriceOverride) -> Self {
        self.price_overrides.push(price_override);
        self
    }

    pub fn with_gift_card(mut self, gift_card: GiftCard) -> Self {
        self.gift_cards.push(gift_card);
        self
    }
}

#[async_trait]
impl ProductRepository for InMemoryCatalog {
    async fn find_by_code(&self, code: &ProductCode) -> Result<Product, RepositoryError> {
        self.products
            .iter()
            .find(|p| &p.code == code)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }
}

#[async_trait]
impl PriceOverrideRepository for InMemoryCatalog {
    async fn find_for_product_on_date(
        &self,
        product_code: &ProductCode,
        date: NaiveDate,
    ) -> Result<Option<PriceOverride>, RepositoryError> {
        Ok(self
            .price_overrides
            .iter()
            .find(|o| o.applies_to(product_code, date))
            .cloned())
    }
}

#[async_trait]
impl GiftCardRepository for InMemoryCatalog {
    async fn find_valid(
        &self,
        code: &GiftCardCode,
        date: NaiveDate,
    ) -> Result<Option<GiftCard>, RepositoryError> {
        Ok(self
            .gift_cards
            .iter()
            .find(|g| &g.code == code && g.is_valid_on(date))
            .cloned())
    }
}
