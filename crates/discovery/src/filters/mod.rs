//! Filter implementations for the discovery pipeline.
//!
//! One filter per predicate; `FilterPipeline` composes the active ones.

pub mod category;
pub mod category_tags;
pub mod minimum_rating;
pub mod pricing;
pub mod recency;
pub mod search;

// Re-export for convenience
pub use category::CategoryFilter;
pub use category_tags::CategoryTagsFilter;
pub use minimum_rating::MinimumRatingFilter;
pub use pricing::PricingFilter;
pub use recency::{RecencyFilter, RECENT_WINDOW_DAYS};
pub use search::SearchFilter;
