//! Session configuration, injected at construction.

use chrono::Duration;
use discovery::DEFAULT_PAGE_SIZE;

#[derive(Debug, Clone)]
pub struct DiscoveryConfig {
    /// Entries revealed per page
    pub page_size: usize,

    /// Wait between starting and completing a page advance. Stands in for
    /// the fetch of the next page.
    pub load_delay: std::time::Duration,

    /// How far back "recent" reaches, for the filter and the picks
    pub recent_window_days: i64,

    /// Maximum related entries per recommendation
    pub recommendation_limit: usize,
}

impl DiscoveryConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_load_delay(mut self, delay: std::time::Duration) -> Self {
        self.load_delay = delay;
        self
    }

    pub fn with_recent_window_days(mut self, days: i64) -> Self {
        self.recent_window_days = days;
        self
    }

    pub fn with_recommendation_limit(mut self, limit: usize) -> Self {
        self.recommendation_limit = limit;
        self
    }

    pub fn recent_window(&self) -> Duration {
        Duration::days(self.recent_window_days)
    }
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            load_delay: std::time::Duration::from_millis(800),
            recent_window_days: 30,
            recommendation_limit: 4,
        }
    }
}
