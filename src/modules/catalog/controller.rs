use axum::{Json, extract::State};
use bookvibe_core::AppError;
use bookvibe_models::{Book, MessageResponse, UpcomingRelease};
use tracing::instrument;

use super::service::CatalogService;
use crate::state::AppState;

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    responses(
        (status = 200, description = "Every book in the catalog", body = Vec<Book>),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "Catalog"
)]
#[instrument(skip(state))]
pub async fn get_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>, AppError> {
    let books = CatalogService::get_books(&state.store).await?;
    Ok(Json(books))
}

/// List upcoming releases
#[utoipa::path(
    get,
    path = "/upcoming",
    responses(
        (status = 200, description = "Announced titles", body = Vec<UpcomingRelease>),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "Catalog"
)]
#[instrument(skip(state))]
pub async fn get_upcoming(
    State(state): State<AppState>,
) -> Result<Json<Vec<UpcomingRelease>>, AppError> {
    let releases = CatalogService::get_upcoming(&state.store).await?;
    Ok(Json(releases))
}
