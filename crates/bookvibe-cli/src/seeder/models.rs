//! Seeding configuration.

/// How many documents of each catalog collection to generate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedConfig {
    pub books: usize,
    pub upcoming: usize,
    pub reviews: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            books: 50,
            upcoming: 10,
            reviews: 20,
        }
    }
}

impl SeedConfig {
    pub fn new(books: usize) -> Self {
        Self {
            books,
            ..Default::default()
        }
    }

    pub fn with_upcoming(mut self, upcoming: usize) -> Self {
        self.upcoming = upcoming;
        self
    }

    pub fn with_reviews(mut self, reviews: usize) -> Self {
        self.reviews = reviews;
        self
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub books: usize,
    pub upcoming: usize,
    pub reviews: usize,
}

impl SeedSummary {
    pub fn total(&self) -> usize {
        self.books + self.upcoming + self.reviews
    }
}
