use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use food_store::StoreError;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request body")]
    InvalidBody,

    #[error("Item not found")]
    NotFound,

    /// Storage failures reach the client with the driver message as is.
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "Item not found")]
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let code = self.error_code();

        if let AppError::Store(err) = &self {
            tracing::error!(error = %err, "storage operation failed");
        }

        let body = Json(ErrorBody {
            error: self.to_string(),
        });

        (code, body).into_response()
    }
}

impl AppError {
    fn error_code(&self) -> StatusCode {
        match self {
            AppError::InvalidBody => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
