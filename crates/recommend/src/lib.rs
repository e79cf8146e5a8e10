//! # Recommend Crate
//!
//! Content-based picks over a catalog snapshot.
//!
//! ## Components
//!
//! ### Related entries
//! Weighted additive score per candidate:
//! - Category match (weight 10)
//! - Popularity score (weight 0.1)
//! - Created in the last 30 days (bonus 2)
//! - Top 4, ties in snapshot order
//!
//! ### Spotlight
//! Landing-page picks that need no query:
//! - Product of the day: most popular featured entry
//! - Daily rotation: one curated pick per calendar day
//! - New this month: recently added entries, newest first
//!
//! ## Example Usage
//!
//! ```ignore
//! use recommend::{RelatedEntries, Spotlight};
//! use chrono::{Duration, Utc};
//!
//! let engine = RelatedEntries::new().with_limit(4);
//! let related = engine.recommend(snapshot.get(42), snapshot.entries(), Utc::now());
//!
//! let spotlight = Spotlight::compute(snapshot.entries(), Utc::now(), Duration::days(30));
//! ```

pub mod related;
pub mod spotlight;

// Re-export commonly used types
pub use related::{recommend, Recommendation, RelatedEntries};
pub use spotlight::{daily_rotation, new_this_month, product_of_the_day, Spotlight};
