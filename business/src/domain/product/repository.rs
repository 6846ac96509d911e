use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;
use super::value_objects::ProductCode;

#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Returns `RepositoryError::NotFound` when no product has this code.
    async fn find_by_code(&self, code: &ProductCode) -> Result<Product, RepositoryError>;
}
