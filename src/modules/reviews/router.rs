use axum::{Router, routing::get};

use super::controller::get_reviews;
use crate::state::AppState;

pub fn init_reviews_router() -> Router<AppState> {
    Router::new().route("/", get(get_reviews))
}
