use axum::{Router, routing::get};

use super::controller::{get_books, get_upcoming};
use crate::state::AppState;

pub fn init_catalog_router() -> Router<AppState> {
    Router::new()
        .route("/books", get(get_books))
        .route("/upcoming", get(get_upcoming))
}
