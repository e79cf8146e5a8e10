//! Filter to ensure a minimum popularity threshold.

use crate::traits::Filter;
use catalog::Entry;

/// Removes entries whose popularity score is below `min_rating`.
///
/// Entries without a score count as 0.
pub struct MinimumRatingFilter {
    min_rating: f64,
}

impl MinimumRatingFilter {
    /// Create a new MinimumRatingFilter.
    ///
    /// # Arguments
    /// * `min_rating` - Minimum score, inclusive (the menu offers 4, 4.5 and 5)
    pub fn new(min_rating: f64) -> Self {
        Self { min_rating }
    }
}

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn matches(&self, entry: &Entry) -> bool {
        entry.popularity() >= self.min_rating
    }
}
