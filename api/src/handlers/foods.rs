use crate::AppState;
use crate::error::AppError;
use crate::models::foods::FoodBody;

#[tracing::instrument(skip_all)]
pub async fn create_food(state: &AppState, food: &FoodBody) -> Result<u64, AppError> {
    let id = state.store.create(food.as_payload()).await?;
    tracing::info!(%id, "food created");
    Ok(id)
}

/// Overwrites every field of the food at `id`. Zero affected rows means there is no such food.
#[tracing::instrument(skip(state, food))]
pub async fn update_food(state: &AppState, id: &str, food: &FoodBody) -> Result<(), AppError> {
    let affected = state.store.update(id, food.as_payload()).await?;
    if affected == 0 {
        return Err(AppError::NotFound);
    }

    tracing::info!("food updated");
    Ok(())
}

#[tracing::instrument(skip(state))]
pub async fn delete_food(state: &AppState, id: &str) -> Result<(), AppError> {
    let affected = state.store.delete(id).await?;
    if affected == 0 {
        return Err(AppError::NotFound);
    }

    tracing::info!("food deleted");
    Ok(())
}
