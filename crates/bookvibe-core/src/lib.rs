//! # Book Vibe Core
//!
//! Foundational types shared by every Book Vibe crate.
//!
//! - [`errors`]: the application error type and its HTTP mapping
//!
//! # Example
//!
//! ```ignore
//! use bookvibe_core::AppError;
//!
//! let error = AppError::forbidden(anyhow::anyhow!("email mismatch"));
//! ```

pub mod errors;

pub use errors::{AppError, FORBIDDEN_ACCESS, INTERNAL_SERVER_ERROR, UNAUTHORIZED_ACCESS};
