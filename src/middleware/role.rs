use anyhow::{Context, anyhow};
use axum::{extract::FromRequestParts, http::request::Parts};
use bookvibe_core::AppError;
use bookvibe_db::Collection;
use bookvibe_models::User;

use crate::metrics::track_authorization_check;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Whether a looked-up user may use admin-only routes.
pub fn is_admin(user: Option<&User>) -> bool {
    user.is_some_and(User::is_admin)
}

/// Extractor for admin-only routes.
///
/// Runs [`AuthUser`] first, then reads the users collection on every request;
/// a role change takes effect on the next call without reissuing tokens.
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthUser);

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_user = AuthUser::from_request_parts(parts, state).await?;

        let Some(email) = auth_user.email() else {
            track_authorization_check(false, "unknown");
            return Err(AppError::forbidden(anyhow!("Token carries no email claim")));
        };

        let user: Option<User> = state
            .store
            .find_one_by_field(Collection::Users, "email", email)
            .await
            .context("Failed to look up user for role check")
            .map_err(AppError::database)?;

        let allowed = is_admin(user.as_ref());
        let role = match user.as_ref() {
            Some(User { role: Some(role), .. }) => role.as_str(),
            Some(_) => "other",
            None => "unknown",
        };
        track_authorization_check(allowed, role);

        if !allowed {
            return Err(AppError::forbidden(anyhow!(
                "{} does not hold the admin role",
                email
            )));
        }

        Ok(AdminUser(auth_user))
    }
}
