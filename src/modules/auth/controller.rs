use axum::{Json, extract::State};
use bookvibe_auth::{IdentityPayload, issue_token};
use bookvibe_core::AppError;
use bookvibe_models::{MessageResponse, TokenResponse};
use tracing::instrument;

use crate::metrics::track_token_issued;
use crate::state::AppState;
use crate::validator::JsonBody;

/// Issue an access token
///
/// The body is embedded in the token as-is; it is not checked against the
/// users collection.
#[utoipa::path(
    post,
    path = "/jwt",
    request_body(content = serde_json::Value, description = "Identity payload as a JSON object, usually `{\"email\": ...}`"),
    responses(
        (status = 200, description = "Signed access token", body = TokenResponse),
        (status = 400, description = "Body is not a JSON object", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, payload))]
pub async fn issue_jwt(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<IdentityPayload>,
) -> Result<Json<TokenResponse>, AppError> {
    let token = issue_token(payload, &state.jwt_config)?;
    track_token_issued();

    Ok(Json(TokenResponse { token }))
}
