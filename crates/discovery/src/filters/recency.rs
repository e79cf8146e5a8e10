//! Filter for recently added entries.

use crate::traits::Filter;
use catalog::Entry;
use chrono::{DateTime, Duration, Utc};

/// Default length of the "recent" window
pub const RECENT_WINDOW_DAYS: i64 = 30;

/// Keeps entries created within `window` of the evaluation instant.
///
/// ## Algorithm
/// 1. The caller supplies `now`, so results are reproducible
/// 2. Keep entries with `created_at >= now - window`
/// 3. Entries with no `created_at` never match
pub struct RecencyFilter {
    now: DateTime<Utc>,
    window: Duration,
}

impl RecencyFilter {
    /// Create a new RecencyFilter.
    ///
    /// # Arguments
    /// * `now` - Evaluation instant
    /// * `window` - How far back counts as recent (typically 30 days)
    pub fn new(now: DateTime<Utc>, window: Duration) -> Self {
        Self { now, window }
    }
}

impl Filter for RecencyFilter {
    fn name(&self) -> &str {
        "RecencyFilter"
    }

    fn matches(&self, entry: &Entry) -> bool {
        entry.created_within(self.now, self.window)
    }
}
