//! Filter, rank and paginate the tool catalog.
//!
//! This crate provides:
//! - Filter trait and one implementation per predicate
//! - FilterPipeline for composing the active filters
//! - `rank` with the three sort modes
//! - PaginationWindow for the infinite-scroll prefix
//!
//! ## Architecture
//! Data flows one way, and every stage is a pure function of its inputs:
//! 1. Filters narrow the snapshot (AND of the active predicates)
//! 2. `rank` orders the survivors under the selected `SortMode`
//! 3. The window reveals the ranked list one page at a time
//!
//! ## Example Usage
//! ```ignore
//! use discovery::{filter, rank, FilterState, PaginationWindow, SortMode};
//!
//! let state = FilterState::new().with_min_rating(7.0);
//! let filtered = filter(snapshot.entries(), "video", None, &state, Utc::now());
//! let ranked = rank(filtered, SortMode::Popularity);
//!
//! let mut window = PaginationWindow::default();
//! window.reset(ranked);
//! window.load_more();
//! ```

pub mod error;
pub mod traits;
pub mod filter_state;
pub mod filters;
pub mod filter_pipeline;
pub mod ranking;
pub mod pagination;

// Re-export main types
pub use error::QueryError;
pub use traits::Filter;
pub use filter_state::{FilterState, PricingTier};
pub use filter_pipeline::{filter, FilterPipeline};
pub use ranking::{rank, SortMode};
pub use pagination::{LoadState, PageTicket, PaginationWindow, DEFAULT_PAGE_SIZE};
