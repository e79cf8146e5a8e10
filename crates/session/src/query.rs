//! The criteria a session recomputes from.

use discovery::{FilterState, SortMode};
use serde::{Deserialize, Serialize};

/// Everything that decides the ranked list. Changing any field means the
/// caller should `apply` again.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscoveryQuery {
    /// Free-text search; empty means no search
    pub search: String,

    /// Category slug from the category menu
    pub category: Option<String>,

    pub filters: FilterState,
    pub sort: SortMode,
}

impl DiscoveryQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_category(mut self, slug: impl Into<String>) -> Self {
        self.category = Some(slug.into());
        self
    }

    pub fn with_filters(mut self, filters: FilterState) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    /// Whether any criterion narrows the list. Sort order does not count.
    pub fn is_filtered(&self) -> bool {
        !self.search.is_empty()
            || self.category.as_deref().is_some_and(|slug| !slug.is_empty())
            || !self.filters.is_identity()
    }

    /// Count shown on the advanced-filter badge
    pub fn active_filter_count(&self) -> usize {
        self.filters.active_count()
    }
}
