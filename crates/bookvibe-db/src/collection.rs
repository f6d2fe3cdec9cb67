use std::fmt;

/// Named groups of documents. Each maps to one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Books,
    Upcoming,
    Reviews,
    Carts,
}

impl Collection {
    pub const ALL: [Collection; 5] = [
        Collection::Users,
        Collection::Books,
        Collection::Upcoming,
        Collection::Reviews,
        Collection::Carts,
    ];

    pub const fn table(self) -> &'static str {
        match self {
            Collection::Users => "users",
            Collection::Books => "books",
            Collection::Upcoming => "upcoming",
            Collection::Reviews => "reviews",
            Collection::Carts => "carts",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_names_are_distinct() {
        let mut tables: Vec<_> = Collection::ALL.iter().map(|c| c.table()).collect();
        tables.sort_unstable();
        tables.dedup();
        assert_eq!(tables.len(), Collection::ALL.len());
    }

    #[test]
    fn test_display_uses_table_name() {
        assert_eq!(Collection::Upcoming.to_string(), "upcoming");
    }
}
