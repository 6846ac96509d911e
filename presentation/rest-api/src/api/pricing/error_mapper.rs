use poem_openapi::payload::Json;

use business::domain::pricing::errors::PriceError;

use crate::api::error::ErrorResponse;
use crate::api::pricing::dto::PriceNotFoundResponse;
use crate::api::pricing::routes::GetPriceResponse;

impl From<PriceError> for GetPriceResponse {
    fn from(err: PriceError) -> Self {
        match err {
            PriceError::Validation(errors) => GetPriceResponse::BadRequest(Json(errors.into_inner())),
            PriceError::ProductNotFound => GetPriceResponse::NotFound(Json(PriceNotFoundResponse {
                price: PriceError::product_not_found_message().to_string(),
            })),
            PriceError::Repository(_) => {
                GetPriceResponse::InternalError(Json(ErrorResponse::internal("repository.persistence")))
            }
        }
    }
}
