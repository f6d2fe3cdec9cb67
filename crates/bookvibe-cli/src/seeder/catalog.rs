//! Fake books and upcoming releases.

use chrono::{Days, Utc};
use fake::Fake;
use fake::faker::lorem::en::{Paragraph, Sentence};
use fake::faker::name::en::Name;
use rayon::prelude::*;
use uuid::Uuid;

use bookvibe_models::{Book, UpcomingRelease};

pub const CATEGORIES: [&str; 8] = [
    "Fiction",
    "Mystery",
    "Fantasy",
    "Science Fiction",
    "Romance",
    "Biography",
    "History",
    "Self-Help",
];

pub(crate) fn cover_url() -> String {
    format!("https://picsum.photos/seed/{}/300/450", Uuid::new_v4().simple())
}

fn title() -> String {
    let sentence: String = Sentence(2..5).fake();
    sentence.trim_end_matches('.').to_string()
}

/// Rounds to cents, the precision prices are shown with.
fn to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Generates book documents in parallel using Rayon.
pub fn generate_books(count: usize) -> Vec<Book> {
    (0..count)
        .into_par_iter()
        .map(|_| Book {
            title: Some(title()),
            author: Some(Name().fake()),
            image: Some(cover_url()),
            category: Some(CATEGORIES[(0..CATEGORIES.len()).fake::<usize>()].to_string()),
            price: Some(to_cents((4.99..49.99).fake::<f64>())),
            rating: Some(to_cents((1.0..5.0).fake::<f64>())),
            description: Some(Paragraph(2..4).fake()),
            ..Default::default()
        })
        .collect()
}

/// Generates releases dated between two weeks and a year from today.
pub fn generate_upcoming(count: usize) -> Vec<UpcomingRelease> {
    let today = Utc::now().date_naive();

    (0..count)
        .into_par_iter()
        .map(|_| {
            let release_date = today
                .checked_add_days(Days::new((14..365).fake::<u64>()))
                .unwrap_or(today);

            UpcomingRelease {
                title: Some(title()),
                author: Some(Name().fake()),
                image: Some(cover_url()),
                release_date: Some(release_date.format("%Y-%m-%d").to_string()),
                description: Some(Paragraph(1..3).fake()),
                ..Default::default()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_generate_books() {
        let books = generate_books(25);
        assert_eq!(books.len(), 25);

        for book in &books {
            assert!(book.id.is_none());
            assert!(book.title.as_deref().is_some_and(|t| !t.is_empty()));
            assert!(CATEGORIES.contains(&book.category.as_deref().unwrap()));

            let price = book.price.unwrap();
            assert!((4.99..=49.99).contains(&price));
            let rating = book.rating.unwrap();
            assert!((1.0..=5.0).contains(&rating));
        }
    }

    #[test]
    fn test_generate_upcoming_dates_are_in_the_future() {
        let today = Utc::now().date_naive();

        for release in generate_upcoming(10) {
            let date =
                NaiveDate::parse_from_str(release.release_date.as_deref().unwrap(), "%Y-%m-%d")
                    .unwrap();
            assert!(date > today);
        }
    }

    #[test]
    fn test_to_cents() {
        assert_eq!(to_cents(12.345_6), 12.35);
        assert_eq!(to_cents(4.0), 4.0);
    }
}
