use anyhow::Context;
use bookvibe_core::AppError;
use bookvibe_db::{Collection, DocumentStore};
use bookvibe_models::{Book, UpcomingRelease};

pub struct CatalogService;

impl CatalogService {
    pub async fn get_books(store: &DocumentStore) -> Result<Vec<Book>, AppError> {
        store
            .find_all(Collection::Books)
            .await
            .context("Failed to fetch books")
            .map_err(AppError::database)
    }

    pub async fn get_upcoming(store: &DocumentStore) -> Result<Vec<UpcomingRelease>, AppError> {
        store
            .find_all(Collection::Upcoming)
            .await
            .context("Failed to fetch upcoming releases")
            .map_err(AppError::database)
    }
}
