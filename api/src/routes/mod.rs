use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::AppState;
use crate::error::ErrorBody;
use crate::models::foods::{FoodBody, MessageBody};

pub mod foods;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Personal Budget API",
        version = "1.0.0",
        description = "API for managing food items in a budget"
    ),
    paths(
        foods::create_food,
        foods::update_food,
        foods::patch_food,
        foods::delete_food
    ),
    components(schemas(FoodBody, MessageBody, ErrorBody)),
    tags((name = "foods", description = "Food items tracked by the budget"))
)]
pub struct ApiDoc;

/// Builds the whole HTTP surface: food routes, the interactive docs at `/api-docs` and the raw
/// OpenAPI document at `/api-docs.json`.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::<AppState>::new()
        .merge(foods::food_routes())
        .with_state(state)
        .merge(SwaggerUi::new("/api-docs").url("/api-docs.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
