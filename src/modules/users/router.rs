use axum::{
    Router,
    routing::{delete, get},
};

use super::controller::{
    delete_user, get_admin_status, get_users, promote_user, register_user,
};
use crate::state::AppState;

pub fn init_users_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_users).post(register_user))
        // Same segment, different meaning: GET takes an email, PATCH an id.
        .route("/admin/{id}", get(get_admin_status).patch(promote_user))
        .route("/{id}", delete(delete_user))
}
