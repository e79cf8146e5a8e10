//! Ordering of the filtered list.
//!
//! Every mode is a stable sort: entries with equal keys keep the order they
//! had in the input, which is snapshot order when fed from the filter.

use crate::error::QueryError;
use catalog::Entry;
use chrono::Datelike;
use icu_collator::{Collator, CollatorOptions, Strength};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Incumbent names demoted by the popularity ordering (substring match).
pub const CLASSIC_NAMES: [&str; 5] = [
    "ChatGPT",
    "Grammarly",
    "Midjourney",
    "Adobe Photoshop",
    "AWS AI",
];

/// Year whose entries are promoted by the popularity ordering.
pub const SPOTLIGHT_YEAR: i32 = 2025;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    Popularity,
    Alphabetical,
    Newest,
}

impl SortMode {
    pub const ALL: [SortMode; 3] = [SortMode::Popularity, SortMode::Alphabetical, SortMode::Newest];
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortMode::Popularity => "popularity",
            SortMode::Alphabetical => "alphabetical",
            SortMode::Newest => "newest",
        };
        f.write_str(label)
    }
}

impl FromStr for SortMode {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "popularity" | "popular" => Ok(SortMode::Popularity),
            "alphabetical" | "name" => Ok(SortMode::Alphabetical),
            "newest" | "new" => Ok(SortMode::Newest),
            _ => Err(QueryError::UnknownSortMode(s.to_string())),
        }
    }
}

/// Whether the entry's name contains one of the classic names.
pub fn is_classic(entry: &Entry) -> bool {
    CLASSIC_NAMES.iter().any(|classic| entry.name.contains(classic))
}

fn created_in_spotlight_year(entry: &Entry) -> bool {
    entry
        .created_at
        .is_some_and(|created| created.year() == SPOTLIGHT_YEAR)
}

/// Popularity ordering: 2025 entries first, then non-classics, then
/// descending popularity score.
pub fn compare_popularity(a: &Entry, b: &Entry) -> Ordering {
    created_in_spotlight_year(b)
        .cmp(&created_in_spotlight_year(a))
        .then_with(|| is_classic(a).cmp(&is_classic(b)))
        .then_with(|| b.popularity().total_cmp(&a.popularity()))
}

/// Root-locale collator at tertiary strength: accents and case only break
/// ties between otherwise equal names, and lowercase sorts before uppercase.
fn name_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);
    match Collator::try_new(&Default::default(), options) {
        Ok(collator) => Some(collator),
        Err(err) => {
            tracing::warn!("Name collator unavailable, falling back to case-folded order: {}", err);
            None
        }
    }
}

fn sort_alphabetical(entries: &mut [&Entry]) {
    match name_collator() {
        // Raw comparison keeps the order total when the collator sees two
        // names as equal
        Some(collator) => entries.sort_by(|a, b| {
            collator
                .compare(&a.name, &b.name)
                .then_with(|| a.name.cmp(&b.name))
        }),
        None => entries.sort_by_cached_key(|entry| (entry.name.to_lowercase(), entry.name.clone())),
    }
}

fn created_millis(entry: &Entry) -> i64 {
    entry.created_at.map_or(0, |created| created.timestamp_millis())
}

/// Sort `entries` under `mode`.
///
/// Takes ownership of the filtered list so ranking never allocates a second
/// vector. The referenced entries are untouched.
pub fn rank(mut entries: Vec<&Entry>, mode: SortMode) -> Vec<&Entry> {
    match mode {
        SortMode::Popularity => entries.sort_by(|a, b| compare_popularity(a, b)),
        SortMode::Alphabetical => sort_alphabetical(&mut entries),
        SortMode::Newest => entries.sort_by_key(|entry| std::cmp::Reverse(created_millis(entry))),
    }
    entries
}
