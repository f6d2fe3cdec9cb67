//! Request guards.
//!
//! Both guards are extractors. A handler opts in by naming one in its
//! argument list, and the request is rejected before the handler body runs.
//!
//! - [`auth::AuthUser`]: a valid, unexpired bearer token. Missing or bad
//!   tokens are rejected with 401.
//! - [`role::AdminUser`]: an [`auth::AuthUser`] whose `email` claim belongs
//!   to a user holding the `admin` role. Anything else is rejected with 403.
//!
//! ```ignore
//! async fn list_users(_admin: AdminUser, State(state): State<AppState>) { /* ... */ }
//! ```

pub mod auth;
pub mod role;
