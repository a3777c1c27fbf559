use axum::Json;
use axum::extract::{FromRequest, Request};
use validator::Validate;

use crate::error::AppError;
use crate::models::foods::FoodBody;

/// Request body of every food mutation, parsed, trimmed and validated.
///
/// Malformed JSON, missing fields, non-string fields and fields left empty after trimming are all
/// rejected with [`AppError::InvalidBody`] before a handler runs.
#[derive(Debug)]
pub struct ValidFood(pub FoodBody);

impl<S> FromRequest<S> for ValidFood
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<FoodBody>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(%rejection, "food body rejected");
                AppError::InvalidBody
            })?;

        let body = body.trimmed();
        if let Err(errors) = body.validate() {
            tracing::debug!(%errors, "food body failed validation");
            return Err(AppError::InvalidBody);
        }

        Ok(ValidFood(body))
    }
}
