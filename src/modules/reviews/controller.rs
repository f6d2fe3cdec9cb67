use anyhow::Context;
use axum::{Json, extract::State};
use bookvibe_core::AppError;
use bookvibe_db::Collection;
use bookvibe_models::{MessageResponse, Review};
use tracing::instrument;

use crate::state::AppState;

/// List all reviews
#[utoipa::path(
    get,
    path = "/reviews",
    responses(
        (status = 200, description = "Every review", body = Vec<Review>),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "Reviews"
)]
#[instrument(skip(state))]
pub async fn get_reviews(State(state): State<AppState>) -> Result<Json<Vec<Review>>, AppError> {
    let reviews = state
        .store
        .find_all(Collection::Reviews)
        .await
        .context("Failed to fetch reviews")
        .map_err(AppError::database)?;

    Ok(Json(reviews))
}
