use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::product::value_objects::ProductCode;

use super::entity::ProductEntity;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn find_by_code(&self, code: &ProductCode) -> Result<Product, RepositoryError> {
        // Codes are not constrained unique; the oldest row wins.
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT code, name, price FROM products WHERE code = $1 ORDER BY id LIMIT 1",
        )
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, product_code = %code, "product lookup failed");
            RepositoryError::database_error()
        })?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }
}
