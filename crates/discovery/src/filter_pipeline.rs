//! The FilterPipeline chains the active predicates.
//!
//! Predicates are combined with AND. The order is fixed (category, search,
//! pricing, rating, category tags, recency); it only affects how early an
//! entry is dropped, never the result.

use crate::filter_state::FilterState;
use crate::filters::*;
use crate::traits::Filter;
use catalog::Entry;
use chrono::{DateTime, Duration, Utc};
use tracing::instrument;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(SearchFilter::new("video"))
///     .add_filter(MinimumRatingFilter::new(4.0));
///
/// let filtered = pipeline.apply(snapshot.entries());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Build the pipeline for one set of discovery criteria.
    ///
    /// Only active criteria contribute a filter, so an empty query, no
    /// category and an identity `FilterState` give an empty pipeline.
    ///
    /// # Arguments
    /// * `query` - Free-text search; empty means no search
    /// * `category` - Category slug from the category menu
    /// * `state` - Advanced filter selections
    /// * `now` - Evaluation instant for the recency predicate
    /// * `recent_window` - How far back counts as recent
    pub fn for_criteria(
        query: &str,
        category: Option<&str>,
        state: &FilterState,
        now: DateTime<Utc>,
        recent_window: Duration,
    ) -> Self {
        let mut pipeline = Self::new();

        if let Some(slug) = category.filter(|slug| !slug.is_empty()) {
            pipeline = pipeline.add_filter(CategoryFilter::new(slug));
        }
        if !query.is_empty() {
            pipeline = pipeline.add_filter(SearchFilter::new(query));
        }
        if !state.pricing_tags.is_empty() {
            pipeline = pipeline.add_filter(PricingFilter::new(state.pricing_tags.iter().copied()));
        }
        if let Some(min_rating) = state.min_rating {
            pipeline = pipeline.add_filter(MinimumRatingFilter::new(min_rating));
        }
        if !state.category_tags.is_empty() {
            pipeline = pipeline.add_filter(CategoryTagsFilter::new(&state.category_tags));
        }
        if state.recent_only {
            pipeline = pipeline.add_filter(RecencyFilter::new(now, recent_window));
        }

        pipeline
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of active filters
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Names of the active filters, in application order
    pub fn filter_names(&self) -> Vec<&str> {
        self.filters.iter().map(|f| f.name()).collect()
    }

    /// Apply all filters in sequence to the entries.
    ///
    /// Returns references into `entries`, in their original order.
    #[instrument(skip_all, fields(input = entries.len(), filters = self.filters.len()))]
    pub fn apply<'a>(&self, entries: &'a [Entry]) -> Vec<&'a Entry> {
        let mut current: Vec<&'a Entry> = entries.iter().collect();
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// Filter a snapshot by query, category slug and advanced filters.
///
/// Pure: the same inputs and `now` always give the same output, and the
/// inputs are never modified. Uses the default 30 day recency window.
pub fn filter<'a>(
    snapshot: &'a [Entry],
    query: &str,
    category: Option<&str>,
    state: &FilterState,
    now: DateTime<Utc>,
) -> Vec<&'a Entry> {
    FilterPipeline::for_criteria(
        query,
        category,
        state,
        now,
        Duration::days(RECENT_WINDOW_DAYS),
    )
    .apply(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter_state::PricingTier;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 1, 0, 0, 0).unwrap()
    }

    fn create_test_entries() -> Vec<Entry> {
        vec![
            Entry::new(1, "Recraft", "Design")
                .with_description("Free vector graphics generator")
                .with_popularity(8.0)
                .with_created_at(now() - Duration::days(5)),
            Entry::new(2, "Jasper AI", "Marketing")
                .with_description("Premium marketing copy")
                .with_popularity(9.1),
            Entry::new(3, "Freepik AI", "Design")
                .with_description("Stock images with a subscription")
                .with_popularity(4.2)
                .with_created_at(now() - Duration::days(200)),
            Entry::new(4, "Cursor", "Developer Tools")
                .with_description("AI code editor, free tier available")
                .with_popularity(9.5)
                .with_created_at(now() - Duration::days(1)),
        ]
    }

    fn ids(entries: &[&Entry]) -> Vec<u64> {
        entries.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_empty_pipeline() {
        let entries = create_test_entries();
        let pipeline = FilterPipeline::new();

        let filtered = pipeline.apply(&entries);
        assert_eq!(ids(&filtered), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_identity_criteria_build_no_filters() {
        let pipeline = FilterPipeline::for_criteria(
            "",
            None,
            &FilterState::default(),
            now(),
            Duration::days(30),
        );
        assert!(pipeline.is_empty());
    }

    #[test]
    fn test_filter_order_is_fixed() {
        let state = FilterState::new()
            .with_recent_only(true)
            .with_category_tag("design")
            .with_min_rating(1.0)
            .with_pricing(PricingTier::Free);

        let pipeline = FilterPipeline::for_criteria("ai", Some("design"), &state, now(), Duration::days(30));
        assert_eq!(
            pipeline.filter_names(),
            vec![
                "CategoryFilter",
                "SearchFilter",
                "PricingFilter",
                "MinimumRatingFilter",
                "CategoryTagsFilter",
                "RecencyFilter",
            ]
        );
    }

    #[test]
    fn test_empty_category_slug_is_ignored() {
        let entries = create_test_entries();
        let filtered = filter(&entries, "", Some(""), &FilterState::default(), now());
        assert_eq!(filtered.len(), 4);
    }

    #[test]
    fn test_predicates_are_conjunctive() {
        let entries = create_test_entries();
        let state = FilterState::new()
            .with_pricing(PricingTier::Free)
            .with_min_rating(8.5);

        // Free: 1 and 4; rating >= 8.5: 2 and 4
        let filtered = filter(&entries, "", None, &state, now());
        assert_eq!(ids(&filtered), vec![4]);
    }

    #[test]
    fn test_category_and_search() {
        let entries = create_test_entries();

        let filtered = filter(&entries, "FREE", Some("design"), &FilterState::default(), now());
        assert_eq!(ids(&filtered), vec![1, 3]);
    }

    #[test]
    fn test_recent_only_uses_now() {
        let entries = create_test_entries();
        let state = FilterState::new().with_recent_only(true);

        let filtered = filter(&entries, "", None, &state, now());
        assert_eq!(ids(&filtered), vec![1, 4]);

        // A year later nothing is recent any more
        let later = now() + Duration::days(365);
        assert!(filter(&entries, "", None, &state, later).is_empty());
    }

    #[test]
    fn test_feature_tags_do_not_filter() {
        let entries = create_test_entries();
        let state = FilterState::new().with_feature_tag("api");

        let filtered = filter(&entries, "", None, &state, now());
        assert_eq!(filtered.len(), entries.len());
    }
}
