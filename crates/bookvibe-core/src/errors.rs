//! Application error type and its conversion into HTTP responses.
//!
//! Every handler and extractor returns [`AppError`]. The status decides what
//! the client sees: authorization failures and server errors carry fixed
//! messages, while the underlying cause is only written to the log.

use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

pub const UNAUTHORIZED_ACCESS: &str = "Unauthorized access";
pub const FORBIDDEN_ACCESS: &str = "Forbidden access";
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
        }
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn database<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    /// Missing, malformed, forged or expired bearer token.
    pub fn unauthorized<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::UNAUTHORIZED, err)
    }

    /// Authenticated, but not allowed to touch this resource.
    pub fn forbidden<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::FORBIDDEN, err)
    }

    /// The message sent to the client for this error.
    pub fn public_message(&self) -> String {
        match self.status {
            StatusCode::UNAUTHORIZED => UNAUTHORIZED_ACCESS.to_string(),
            StatusCode::FORBIDDEN => FORBIDDEN_ACCESS.to_string(),
            status if status.is_server_error() => INTERNAL_SERVER_ERROR.to_string(),
            _ => self.error.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status.as_u16(), error = ?self.error, "Request failed");
        } else {
            tracing::debug!(status = %self.status.as_u16(), error = %self.error, "Request rejected");
        }

        let body = Json(json!({
            "message": self.public_message()
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}
