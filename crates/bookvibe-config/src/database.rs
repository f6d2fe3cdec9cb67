//! Document store configuration.
//!
//! The store is a PostgreSQL database holding one JSONB table per collection.
//! A full `DATABASE_URL` wins; otherwise the connection is assembled from its
//! parts so that credentials never need URL escaping.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: full connection string (optional)
//! - `DB_USER` / `DB_PASS`: credentials
//! - `DB_HOST`: default `localhost`
//! - `DB_PORT`: default `5432`
//! - `DB_NAME`: default `book_vibe`
//! - `DB_MAX_CONNECTIONS`: default `10`
//! - `DB_ACQUIRE_TIMEOUT_SECS`: default `30`

use std::env;

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            user: None,
            password: None,
            host: "localhost".to_string(),
            port: 5432,
            name: "book_vibe".to_string(),
            max_connections: 10,
            acquire_timeout_secs: 30,
        }
    }
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            url: non_empty_var("DATABASE_URL"),
            user: non_empty_var("DB_USER"),
            password: non_empty_var("DB_PASS"),
            host: non_empty_var("DB_HOST").unwrap_or(defaults.host),
            port: parsed_var("DB_PORT").unwrap_or(defaults.port),
            name: non_empty_var("DB_NAME").unwrap_or(defaults.name),
            max_connections: parsed_var("DB_MAX_CONNECTIONS").unwrap_or(defaults.max_connections),
            acquire_timeout_secs: parsed_var("DB_ACQUIRE_TIMEOUT_SECS")
                .unwrap_or(defaults.acquire_timeout_secs),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parsed_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    non_empty_var(key).and_then(|v| v.parse().ok())
}
