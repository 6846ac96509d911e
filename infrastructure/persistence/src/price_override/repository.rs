use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::price_override::model::PriceOverride;
use business::domain::price_override::repository::PriceOverrideRepository;
use business::domain::product::value_objects::ProductCode;

use super::entity::PriceOverrideEntity;

pub struct PriceOverrideRepositoryPostgres {
    pool: PgPool,
}

impl PriceOverrideRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PriceOverrideRepository for PriceOverrideRepositoryPostgres {
    async fn find_for_product_on_date(
        &self,
        product_code: &ProductCode,
        date: NaiveDate,
    ) -> Result<Option<PriceOverride>, RepositoryError> {
        // A NULL date_end fails the comparison, so open-ended rows never match.
        let entity = sqlx::query_as::<_, PriceOverrideEntity>(
            r#"SELECT product_code, price, date_start, date_end
            FROM price_overrides
            WHERE product_code = $1 AND date_start <= $2 AND date_end >= $2
            ORDER BY id
            LIMIT 1"#,
        )
        .bind(product_code.as_str())
        .bind(date)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, product_code = %product_code, %date, "price override lookup failed");
            RepositoryError::database_error()
        })?;

        Ok(entity.map(|e| e.into_domain()))
    }
}
