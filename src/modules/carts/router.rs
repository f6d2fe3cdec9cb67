use axum::{Router, routing::get};

use super::controller::{add_cart_item, get_cart_items};
use crate::state::AppState;

pub fn init_carts_router() -> Router<AppState> {
    Router::new().route("/", get(get_cart_items).post(add_cart_item))
}
