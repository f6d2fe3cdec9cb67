use axum::{
    Json,
    extract::{Query, State},
};
use bookvibe_core::AppError;
use bookvibe_models::{CartItem, CartQuery, InsertOneResult, MessageResponse};
use tracing::instrument;

use super::service::CartService;
use crate::metrics::track_cart_item_added;
use crate::state::AppState;
use crate::validator::JsonBody;

/// Add an item to a cart
#[utoipa::path(
    post,
    path = "/carts",
    request_body = CartItem,
    responses(
        (status = 200, description = "Insert acknowledgement", body = InsertOneResult),
        (status = 400, description = "Malformed body", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "Carts"
)]
#[instrument(skip(state, item), fields(email = ?item.email))]
pub async fn add_cart_item(
    State(state): State<AppState>,
    JsonBody(item): JsonBody<CartItem>,
) -> Result<Json<InsertOneResult>, AppError> {
    let result = CartService::add_item(&state.store, item).await?;
    track_cart_item_added();

    Ok(Json(result))
}

/// List cart items by owner email
#[utoipa::path(
    get,
    path = "/carts",
    params(CartQuery),
    responses(
        (status = 200, description = "Matching cart items", body = Vec<CartItem>),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "Carts"
)]
#[instrument(skip(state))]
pub async fn get_cart_items(
    State(state): State<AppState>,
    Query(query): Query<CartQuery>,
) -> Result<Json<Vec<CartItem>>, AppError> {
    let items = CartService::items_for(&state.store, query.email.as_deref()).await?;
    Ok(Json(items))
}
