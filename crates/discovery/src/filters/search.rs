//! Free-text search filter.

use crate::traits::Filter;
use catalog::Entry;

/// Case-insensitive substring search over name, description and category.
pub struct SearchFilter {
    needle: String,
}

impl SearchFilter {
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }
}

impl Filter for SearchFilter {
    fn name(&self) -> &str {
        "SearchFilter"
    }

    fn matches(&self, entry: &Entry) -> bool {
        entry.name.to_lowercase().contains(&self.needle)
            || entry.description.to_lowercase().contains(&self.needle)
            || entry.category.to_lowercase().contains(&self.needle)
    }
}
