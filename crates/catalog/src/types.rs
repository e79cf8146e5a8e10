//! Core domain types for the tool catalog.
//!
//! An [`Entry`] is immutable once it is part of a [`CatalogSnapshot`].
//! Derived values such as ranking keys or recommendation scores are always
//! computed alongside an entry and never written back into it.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

// =============================================================================
// Type Aliases
// =============================================================================

/// Stable, unique identifier of a catalog entry
pub type EntryId = u64;

// =============================================================================
// Entry
// =============================================================================

/// A single catalog item ("tool").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub name: String,
    pub description: String,
    pub link: String,
    /// Open enumerated set, e.g. "Design", "Developer Tools"
    pub category: String,
    pub logo_url: Option<String>,
    pub featured: bool,
    /// Conventionally 0-10. `None` behaves as 0 everywhere.
    pub popularity_score: Option<f64>,
    /// `None` when the source record had no timestamp or an unparseable one
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Entry {
    /// Create an entry with empty descriptive fields.
    ///
    /// Mostly useful for fixtures; real entries come from the loader.
    pub fn new(id: EntryId, name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            link: String::new(),
            category: category.into(),
            logo_url: None,
            featured: false,
            popularity_score: None,
            created_at: None,
            tags: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    pub fn with_popularity(mut self, score: f64) -> Self {
        self.popularity_score = Some(score);
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn with_featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Popularity with the missing value mapped to 0.
    pub fn popularity(&self) -> f64 {
        self.popularity_score.unwrap_or(0.0)
    }

    /// URL slug of this entry's category (see [`category_slug`]).
    pub fn category_slug(&self) -> String {
        category_slug(&self.category)
    }

    /// True if the entry was created at or after `now - window`.
    ///
    /// Entries without a timestamp are never recent.
    pub fn created_within(&self, now: DateTime<Utc>, window: Duration) -> bool {
        match self.created_at {
            Some(created_at) => created_at >= now - window,
            None => false,
        }
    }
}

/// Lower-case a category name and replace spaces with hyphens.
///
/// "Developer Tools" -> "developer-tools"
pub fn category_slug(category: &str) -> String {
    category.to_lowercase().replace(' ', "-")
}

// =============================================================================
// Category summaries
// =============================================================================

/// One row of the category listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    pub name: String,
    pub slug: String,
    pub entry_count: usize,
}

// =============================================================================
// CatalogSnapshot - the immutable in-memory catalog
// =============================================================================

/// The full set of entries loaded for a session.
///
/// Entries keep the order of the source; that order is what "snapshot
/// order" means for every stable tie-break downstream.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    pub(crate) entries: Vec<Entry>,
    /// Position of each entry in `entries`
    pub(crate) id_index: HashMap<EntryId, usize>,
    /// Positions grouped by exact category name, sorted by name
    pub(crate) category_index: BTreeMap<String, Vec<usize>>,
}

impl CatalogSnapshot {
    /// Creates a new, empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// All entries in snapshot order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get an entry by ID
    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.id_index.get(&id).map(|&pos| &self.entries[pos])
    }

    /// Entries whose category is exactly `category`, in snapshot order
    pub fn entries_in_category(&self, category: &str) -> Vec<&Entry> {
        self.category_index
            .get(category)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
            .iter()
            .map(|&pos| &self.entries[pos])
            .collect()
    }

    /// Category names with their slugs and entry counts, sorted by name
    pub fn categories(&self) -> Vec<CategorySummary> {
        self.category_index
            .iter()
            .map(|(name, positions)| CategorySummary {
                name: name.clone(),
                slug: category_slug(name),
                entry_count: positions.len(),
            })
            .collect()
    }

    /// Append an entry without touching the indices.
    ///
    /// Call [`CatalogSnapshot::build_indices`] and
    /// [`CatalogSnapshot::validate`] once all entries are in.
    pub(crate) fn push_entry(&mut self, entry: Entry) {
        self.entries.push(entry);
    }
}
