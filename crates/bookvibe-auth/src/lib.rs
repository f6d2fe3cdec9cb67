//! # Book Vibe Auth
//!
//! Bearer token claims and the credential issuer.
//!
//! A token embeds whatever identity payload the caller presented when it was
//! issued, plus `iat` and `exp`. Nothing checks that the payload names a real
//! user; the role guard does that later against the users collection.
//!
//! # Example
//!
//! ```ignore
//! use bookvibe_auth::{issue_token, verify_token};
//! use bookvibe_config::JwtConfig;
//! use serde_json::json;
//!
//! let config = JwtConfig::from_env();
//! let payload = json!({ "email": "reader@bookvibe.app" });
//!
//! let token = issue_token(payload.as_object().unwrap().clone(), &config)?;
//! let claims = verify_token(&token, &config)?;
//! assert_eq!(claims.email(), Some("reader@bookvibe.app"));
//! ```

pub mod claims;
pub mod jwt;

pub use claims::{Claims, IdentityPayload};
pub use jwt::{encode_claims, issue_token, verify_token};
