//! Catalog seeding.
//!
//! Documents are generated in memory, then written per collection with one
//! batched insert each.

pub mod catalog;
pub mod models;
pub mod reviews;

use std::time::Instant;

use bookvibe_db::{Collection, DocumentStore, StoreError};

pub use catalog::{generate_books, generate_upcoming};
pub use models::{SeedConfig, SeedSummary};
pub use reviews::generate_reviews;

/// Collections written by the seeder and wiped by [`clear_catalog`].
pub const CATALOG_COLLECTIONS: [Collection; 3] =
    [Collection::Books, Collection::Upcoming, Collection::Reviews];

pub async fn seed_all(store: &DocumentStore, config: SeedConfig) -> Result<SeedSummary, StoreError> {
    let start_time = Instant::now();
    println!("🌱 Seeding the catalog...");

    let books = store
        .insert_many(Collection::Books, &generate_books(config.books))
        .await?;
    println!("   ✓ Inserted {} books", books.len());

    let upcoming = store
        .insert_many(Collection::Upcoming, &generate_upcoming(config.upcoming))
        .await?;
    println!("   ✓ Inserted {} upcoming releases", upcoming.len());

    let reviews = store
        .insert_many(Collection::Reviews, &generate_reviews(config.reviews))
        .await?;
    println!("   ✓ Inserted {} reviews", reviews.len());

    let summary = SeedSummary {
        books: books.len(),
        upcoming: upcoming.len(),
        reviews: reviews.len(),
    };

    println!(
        "✅ Seeded {} documents in {:?}",
        summary.total(),
        start_time.elapsed()
    );

    Ok(summary)
}

/// Removes every book, upcoming release and review. Users and carts are kept.
pub async fn clear_catalog(store: &DocumentStore) -> Result<u64, StoreError> {
    let start_time = Instant::now();
    let mut deleted = 0;

    for collection in CATALOG_COLLECTIONS {
        let count = store.delete_all(collection).await?;
        println!("   ✓ Deleted {} documents from {}", count, collection);
        deleted += count;
    }

    println!("🗑️  Cleared the catalog in {:?}", start_time.elapsed());
    Ok(deleted)
}
