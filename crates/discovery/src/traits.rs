//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that lets independent predicates
//! be composed into a FilterPipeline.

use catalog::Entry;

/// A single predicate over catalog entries.
///
/// ## Design Note
/// - `Send + Sync` allows a built pipeline to be shared across threads
/// - Filters borrow entries from the snapshot and never mutate them
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Whether `entry` passes this predicate.
    fn matches(&self, entry: &Entry) -> bool;

    /// Keep the entries that pass, preserving their relative order.
    fn apply<'a>(&self, entries: Vec<&'a Entry>) -> Vec<&'a Entry> {
        entries
            .into_iter()
            .filter(|entry| self.matches(entry))
            .collect()
    }
}
