use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{post, put};
use axum::{Json, Router};

use crate::error::{AppError, ErrorBody};
use crate::middlewares::ValidFood;
use crate::models::foods::{FoodBody, MessageBody};
use crate::{AppState, handlers};

const UPDATED_MESSAGE: &str = "Food updated successfully";

pub fn food_routes() -> Router<AppState> {
    Router::new().route("/foods", post(create_food)).route(
        "/foods/{id}",
        put(update_food).patch(patch_food).delete(delete_food),
    )
}

/// Create a new food item
///
/// Add a new food item to the database.
#[utoipa::path(
    post,
    path = "/foods",
    tag = "foods",
    request_body = FoodBody,
    responses(
        (status = 201, description = "Food item created successfully.", body = FoodBody),
        (status = 400, description = "Invalid request body.", body = ErrorBody),
        (status = 500, description = "Internal server error.", body = ErrorBody)
    )
)]
pub async fn create_food(
    State(state): State<AppState>,
    ValidFood(food): ValidFood,
) -> Result<(StatusCode, Json<FoodBody>), AppError> {
    handlers::foods::create_food(&state, &food).await?;
    Ok((StatusCode::CREATED, Json(food)))
}

/// Update a food item
///
/// Update an existing food item in the database.
#[utoipa::path(
    put,
    path = "/foods/{id}",
    tag = "foods",
    params(("id" = String, Path, description = "The ID of the food item to update.")),
    request_body = FoodBody,
    responses(
        (status = 200, description = "Food item updated successfully.", body = MessageBody),
        (status = 400, description = "Invalid request body.", body = ErrorBody),
        (status = 404, description = "Food item not found.", body = ErrorBody),
        (status = 500, description = "Internal server error.", body = ErrorBody)
    )
)]
pub async fn update_food(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidFood(food): ValidFood,
) -> Result<Json<MessageBody>, AppError> {
    handlers::foods::update_food(&state, &id, &food).await?;
    Ok(Json(MessageBody::new(UPDATED_MESSAGE)))
}

/// Update a food item partially
///
/// Accepts the same body as `PUT /foods/{id}`: all of `name`, `unit` and `companyId` are
/// required and all three are overwritten.
#[utoipa::path(
    patch,
    path = "/foods/{id}",
    tag = "foods",
    params(("id" = String, Path, description = "The ID of the food item to update.")),
    request_body = FoodBody,
    responses(
        (status = 200, description = "Food item updated successfully.", body = MessageBody),
        (status = 400, description = "Invalid request body.", body = ErrorBody),
        (status = 404, description = "Food item not found.", body = ErrorBody),
        (status = 500, description = "Internal server error.", body = ErrorBody)
    )
)]
pub async fn patch_food(
    state: State<AppState>,
    id: Path<String>,
    food: ValidFood,
) -> Result<Json<MessageBody>, AppError> {
    update_food(state, id, food).await
}

/// Delete a food item
///
/// Delete an existing food item from the database.
#[utoipa::path(
    delete,
    path = "/foods/{id}",
    tag = "foods",
    params(("id" = String, Path, description = "The ID of the food item to delete.")),
    responses(
        (status = 204, description = "Food item deleted successfully."),
        (status = 404, description = "Food item not found.", body = ErrorBody),
        (status = 500, description = "Internal server error.", body = ErrorBody)
    )
)]
pub async fn delete_food(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    handlers::foods::delete_food(&state, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
