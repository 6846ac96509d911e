use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::gift_card::model::GiftCard;
use business::domain::gift_card::repository::GiftCardRepository;
use business::domain::gift_card::value_objects::GiftCardCode;

use super::entity::GiftCardEntity;

pub struct GiftCardRepositoryPostgres {
    pool: PgPool,
}

impl GiftCardRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Lowest id wins when codes repeat.
const FIND_VALID_SQL: &str = r#"SELECT code, amount, date_start, date_end
    FROM gift_cards
    WHERE code = $1 AND date_start <= $2 AND (date_end IS NULL OR date_end >= $2)
    ORDER BY id
    LIMIT 1"#;

#[async_trait]
impl GiftCardRepository for GiftCardRepositoryPostgres {
    async fn find_valid(
        &self,
        code: &GiftCardCode,
        date: NaiveDate,
    ) -> Result<Option<GiftCard>, RepositoryError> {
        let entity = sqlx::query_as::<_, GiftCardEntity>(FIND_VALID_SQL)
            .bind(code.as_str())
            .bind(date)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, gift_card_code = %code, %date, "gift card lookup failed");
                RepositoryError::database_error()
            })?;

        Ok(entity.map(|e| e.into_domain()))
    }
}
