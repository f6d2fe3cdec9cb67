//! Fake reader reviews.

use fake::Fake;
use fake::faker::lorem::en::Paragraph;
use fake::faker::name::en::Name;
use rayon::prelude::*;

use bookvibe_models::Review;

use super::catalog::cover_url;

pub fn generate_reviews(count: usize) -> Vec<Review> {
    (0..count)
        .into_par_iter()
        .map(|_| Review {
            name: Some(Name().fake()),
            review: Some(Paragraph(1..3).fake()),
            rating: Some((1..=5).fake::<u8>().into()),
            image: Some(cover_url()),
            ..Default::default()
        })
        .collect()
}
