//! Filter for the category picked from the category menu.
//!
//! The menu works with URL slugs ("developer-tools"), so an entry matches
//! when the slug of its category equals the requested slug exactly.

use crate::traits::Filter;
use catalog::Entry;

/// Keeps entries whose category slug equals `slug`.
pub struct CategoryFilter {
    slug: String,
}

impl CategoryFilter {
    /// Create a new CategoryFilter.
    ///
    /// # Arguments
    /// * `slug` - Category slug as produced by `catalog::category_slug`
    pub fn new(slug: impl Into<String>) -> Self {
        Self { slug: slug.into() }
    }
}

impl Filter for CategoryFilter {
    fn name(&self) -> &str {
        "CategoryFilter"
    }

    fn matches(&self, entry: &Entry) -> bool {
        entry.category_slug() == self.slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_filter_matches_slug() {
        let entries = vec![
            Entry::new(1, "GitHub Copilot", "Developer Tools"),
            Entry::new(2, "Recraft", "Design"),
            Entry::new(3, "Cursor", "developer tools"),
        ];

        let filter = CategoryFilter::new("developer-tools");
        let filtered = filter.apply(entries.iter().collect());

        let ids: Vec<_> = filtered.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_category_filter_is_exact() {
        let entry = Entry::new(1, "GitHub Copilot", "Developer Tools");

        // Display names and partial slugs do not match
        assert!(!CategoryFilter::new("Developer Tools").matches(&entry));
        assert!(!CategoryFilter::new("developer").matches(&entry));
    }
}
