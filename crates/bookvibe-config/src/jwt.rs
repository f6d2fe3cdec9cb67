use std::env;

/// Lifetime of an issued access token when `ACCESS_TOKEN_EXPIRY` is unset.
pub const DEFAULT_ACCESS_TOKEN_EXPIRY: i64 = 3600;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("ACCESS_TOKEN_SECRET")
                .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string()),
            access_token_expiry: env::var("ACCESS_TOKEN_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_ACCESS_TOKEN_EXPIRY),
        }
    }
}
