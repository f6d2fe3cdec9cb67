use anyhow::anyhow;
use axum::{
    Json,
    extract::{Path, State},
};
use bookvibe_core::AppError;
use bookvibe_models::{
    AdminStatusResponse, DeleteResult, MessageResponse, NewUser, RegisterUserResponse,
    UpdateResult, User,
};
use tracing::instrument;

use crate::metrics::{track_admin_promoted, track_user_deleted, track_user_registered};
use crate::middleware::auth::AuthUser;
use crate::middleware::role::AdminUser;
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::validator::ValidatedJson;

/// List all users (admin only)
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "List of users", body = Vec<User>),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 403, description = "Caller is not an admin", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state, _admin))]
pub async fn get_users(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<Vec<User>>, AppError> {
    let users = UserService::get_users(&state.store).await?;
    Ok(Json(users))
}

/// Register a user
///
/// Registering an email twice is not an error; the second call reports that
/// the user already exists.
#[utoipa::path(
    post,
    path = "/users",
    request_body = NewUser,
    responses(
        (status = 200, description = "Insert acknowledgement, or the already-exists reply", body = RegisterUserResponse),
        (status = 400, description = "Missing or invalid email", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state, dto), fields(email = %dto.email))]
pub async fn register_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<NewUser>,
) -> Result<Json<RegisterUserResponse>, AppError> {
    let response = UserService::register_user(&state.store, dto).await?;
    track_user_registered(matches!(response, RegisterUserResponse::Created(_)));

    Ok(Json(response))
}

/// Check whether the caller is an admin
///
/// The path email must match the token's email claim.
#[utoipa::path(
    get,
    path = "/users/admin/{email}",
    params(
        ("email" = String, Path, description = "Email to check; must be the caller's own")
    ),
    responses(
        (status = 200, description = "Admin status", body = AdminStatusResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 403, description = "Email does not match the token", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state, auth_user))]
pub async fn get_admin_status(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(email): Path<String>,
) -> Result<Json<AdminStatusResponse>, AppError> {
    if auth_user.email() != Some(email.as_str()) {
        return Err(AppError::forbidden(anyhow!(
            "Token email does not match {}",
            email
        )));
    }

    let admin = UserService::is_admin(&state.store, &email).await?;
    Ok(Json(AdminStatusResponse { admin }))
}

/// Promote a user to admin (admin only)
#[utoipa::path(
    patch,
    path = "/users/admin/{id}",
    params(
        ("id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Update acknowledgement", body = UpdateResult),
        (status = 400, description = "Malformed id", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 403, description = "Caller is not an admin", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state, _admin))]
pub async fn promote_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> Result<Json<UpdateResult>, AppError> {
    let id = UserService::parse_id(&id)?;
    let result = UserService::promote_to_admin(&state.store, id).await?;
    track_admin_promoted(result.modified_count > 0);

    Ok(Json(result))
}

/// Delete a user (admin only)
///
/// Deleting an unknown id succeeds with `deletedCount: 0`.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(
        ("id" = String, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Delete acknowledgement", body = DeleteResult),
        (status = 400, description = "Malformed id", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = MessageResponse),
        (status = 403, description = "Caller is not an admin", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Users"
)]
#[instrument(skip(state, _admin))]
pub async fn delete_user(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> Result<Json<DeleteResult>, AppError> {
    let id = UserService::parse_id(&id)?;
    let result = UserService::delete_user(&state.store, id).await?;
    track_user_deleted(result.deleted_count);

    Ok(Json(result))
}
