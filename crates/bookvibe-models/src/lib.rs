//! # Book Vibe Models
//!
//! Typed records for every collection, plus the request and response DTOs
//! used by the HTTP layer.
//!
//! Documents are schema-on-read: each record names the fields the API knows
//! about and keeps everything else in an `extra` map, so nothing a client
//! stored is lost on the way back out. Identifiers are exposed as `_id`.
//!
//! # Modules
//!
//! - [`auth`]: token issuance responses and generic messages
//! - [`carts`]: cart items and the cart query
//! - [`catalog`]: books and upcoming releases
//! - [`reviews`]: reader reviews
//! - [`store`]: write acknowledgements returned by the document store
//! - [`users`]: users, roles and registration

pub mod auth;
pub mod carts;
pub mod catalog;
mod lenient;
pub mod reviews;
pub mod store;
pub mod users;

pub use auth::{MessageResponse, TokenResponse};
pub use carts::{CartItem, CartQuery};
pub use catalog::{Book, UpcomingRelease};
pub use reviews::Review;
pub use store::{DeleteResult, InsertOneResult, UpdateResult};
pub use users::{
    AdminStatusResponse, ExistingUserResponse, NewUser, RegisterUserResponse, User,
    UserDocument, UserRole,
};

/// Open set of document fields not modelled explicitly.
pub type ExtraFields = serde_json::Map<String, serde_json::Value>;
