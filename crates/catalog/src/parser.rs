//! Parser for catalog snapshot files.
//!
//! A catalog file is a JSON array of entry records:
//!
//! ```json
//! [{"id": 1, "name": "Recraft", "description": "...", "link": "https://www.recraft.ai",
//!   "category": "Design", "logo_url": null, "featured": true,
//!   "popularity_score": 8.4, "created_at": "2025-08-01T10:00:00Z", "tags": ["vector"]}]
//! ```
//!
//! Records are first read into a lenient [`RawEntry`] and then converted,
//! so a bad timestamp degrades to "missing" instead of failing the load.

use crate::error::{CatalogError, Result};
use crate::types::*;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::warn;

/// A catalog record exactly as it appears in the file
#[derive(Debug, Deserialize)]
struct RawEntry {
    id: EntryId,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    logo_url: Option<String>,
    #[serde(default)]
    featured: bool,
    #[serde(default)]
    popularity_score: Option<f64>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    tags: Option<Vec<String>>,
}

/// Read and parse a catalog file
pub fn parse_catalog_file(path: &Path) -> Result<Vec<Entry>> {
    if !path.exists() {
        return Err(CatalogError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)?;
    parse_catalog_str(&content)
}

/// Parse catalog JSON into entries, preserving record order
pub fn parse_catalog_str(content: &str) -> Result<Vec<Entry>> {
    let records: Vec<RawEntry> = serde_json::from_str(content)?;

    records
        .into_iter()
        .enumerate()
        .map(|(position, raw)| convert_record(position, raw))
        .collect()
}

fn convert_record(position: usize, raw: RawEntry) -> Result<Entry> {
    let name = raw.name.trim();
    if name.is_empty() {
        return Err(CatalogError::InvalidValue {
            field: "name".to_string(),
            position,
            reason: "name must not be empty".to_string(),
        });
    }

    let created_at = match raw.created_at.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(value) => {
            let parsed = parse_timestamp(value);
            if parsed.is_none() {
                warn!(
                    "Record {} (id {}): unparseable created_at {:?}, treating as missing",
                    position, raw.id, value
                );
            }
            parsed
        }
    };

    Ok(Entry {
        id: raw.id,
        name: name.to_string(),
        description: raw.description,
        link: raw.link.trim().to_string(),
        category: raw.category.trim().to_string(),
        logo_url: raw.logo_url.filter(|url| !url.trim().is_empty()),
        featured: raw.featured,
        popularity_score: raw.popularity_score.filter(|score| score.is_finite()),
        created_at,
        tags: raw.tags.unwrap_or_default(),
    })
}

/// Parse a timestamp in one of the accepted layouts (all read as UTC)
///
/// Example: "2025-08-01T10:00:00Z"      -> Some(..)
///          "2025-08-01 10:00:00"       -> Some(..)
///          "2025-08-01"                -> Some(midnight)
///          "last tuesday"              -> None
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
