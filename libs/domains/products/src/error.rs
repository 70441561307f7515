use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

/// Public message for every not-found condition, including soft-deleted rows
pub const NOT_FOUND_MESSAGE: &str = "Product not found";

/// Public message for every record store failure
pub const STORE_FAILURE_MESSAGE: &str = "Product store operation failed";

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(i64),

    /// Path segment that is not a product id
    #[error("Invalid product id: {0}")]
    InvalidId(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_) | ProductError::InvalidId(_) => {
                AppError::NotFound(NOT_FOUND_MESSAGE.to_string())
            }
            ProductError::Validation(msg) => AppError::BadRequest(msg),
            ProductError::Database(e) => {
                tracing::error!(error = %e, "Product store operation failed");
                AppError::Database(STORE_FAILURE_MESSAGE.to_string())
            }
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
