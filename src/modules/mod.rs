pub mod auth;
pub mod carts;
pub mod catalog;
pub mod reviews;
pub mod users;
