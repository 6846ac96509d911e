use sqlx::FromRow;

use business::domain::product::model::Product;
use business::domain::product::value_objects::ProductCode;
use business::domain::shared::value_objects::Cents;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub code: String,
    pub name: String,
    pub price: i32,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            ProductCode::new(self.code),
            self.name,
            Cents::new(i64::from(self.price)),
        )
    }
}
