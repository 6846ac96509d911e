use async_trait::async_trait;

use crate::domain::pricing::errors::PriceError;
use crate::domain::shared::value_objects::Cents;

/// Raw inputs of a price request, as received at the boundary.
pub struct ResolvePriceParams {
    pub product_code: Option<String>,
    pub date: Option<String>,
    pub gift_card_code: Option<String>,
}

#[async_trait]
pub trait ResolvePriceUseCase: Send + Sync {
    async fn execute(&self, params: ResolvePriceParams) -> Result<Cents, PriceError>;
}
