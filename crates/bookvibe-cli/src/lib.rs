//! # Book Vibe CLI
//!
//! Administrative and seeding utilities for the Book Vibe document store.
//!
//! The HTTP API can only promote users when an admin already exists, and it
//! has no write routes for the catalog. This crate covers both gaps:
//!
//! - [`admin::promote_admin`] grants the `admin` role by email, creating the
//!   user when needed.
//! - [`seeder`] fills the books, upcoming and reviews collections with fake
//!   data, and clears them again.
//!
//! ## Usage
//!
//! ```ignore
//! use bookvibe_cli::seeder::{SeedConfig, seed_all};
//!
//! let config = SeedConfig::new(50).with_upcoming(10).with_reviews(20);
//! seed_all(&store, config).await?;
//! ```

pub mod admin;
pub mod seeder;
