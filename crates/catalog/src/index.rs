//! Snapshot building and indexing logic.
//!
//! - Load entries from a catalog file
//! - Build the id and category indices
//! - Validate the unique-id invariant

use crate::error::{CatalogError, Result};
use crate::parser;
use crate::types::*;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

impl CatalogSnapshot {
    /// Load a catalog snapshot from a JSON file.
    ///
    /// This is the single "load all entries" call a session makes.
    /// Steps:
    /// 1. Parse the file (record order is preserved)
    /// 2. Build the id and category indices
    /// 3. Validate that ids are unique
    pub fn load_from_file(path: &Path) -> Result<Self> {
        info!("Loading catalog from {:?}", path);

        let entries = parser::parse_catalog_file(path)?;
        let snapshot = Self::from_entries(entries)?;

        info!(
            "Loaded {} entries in {} categories",
            snapshot.len(),
            snapshot.category_index.len()
        );
        Ok(snapshot)
    }

    /// Build a validated snapshot from entries already in memory
    pub fn from_entries(entries: Vec<Entry>) -> Result<Self> {
        let mut snapshot = Self::new();
        for entry in entries {
            snapshot.push_entry(entry);
        }
        snapshot.validate()?;
        snapshot.build_indices();
        Ok(snapshot)
    }

    /// Rebuild the id and category indices from `entries`
    pub fn build_indices(&mut self) {
        self.id_index.clear();
        self.category_index.clear();

        for (pos, entry) in self.entries.iter().enumerate() {
            self.id_index.insert(entry.id, pos);
            self.category_index
                .entry(entry.category.clone())
                .or_default()
                .push(pos);
        }
    }

    /// Validate data integrity
    ///
    /// Every id must appear exactly once.
    pub fn validate(&self) -> Result<()> {
        let mut seen: HashMap<EntryId, usize> = HashMap::with_capacity(self.entries.len());
        for (pos, entry) in self.entries.iter().enumerate() {
            if let Some(&first) = seen.get(&entry.id) {
                return Err(CatalogError::DuplicateId {
                    id: entry.id,
                    first,
                    second: pos,
                });
            }
            seen.insert(entry.id, pos);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entries() -> Vec<Entry> {
        vec![
            Entry::new(10, "Recraft", "Design"),
            Entry::new(11, "Copy.ai", "Writing"),
            Entry::new(12, "Freepik AI", "Design"),
            Entry::new(13, "GitHub Copilot", "Developer Tools"),
        ]
    }

    #[test]
    fn test_from_entries_builds_indices() {
        let snapshot = CatalogSnapshot::from_entries(sample_entries()).unwrap();

        assert_eq!(snapshot.len(), 4);
        assert_eq!(snapshot.get(12).map(|e| e.name.as_str()), Some("Freepik AI"));
        assert!(snapshot.get(99).is_none());

        let design: Vec<_> = snapshot
            .entries_in_category("Design")
            .into_iter()
            .map(|e| e.id)
            .collect();
        assert_eq!(design, vec![10, 12]);
    }

    #[test]
    fn test_categories_summary() {
        let snapshot = CatalogSnapshot::from_entries(sample_entries()).unwrap();
        let categories = snapshot.categories();

        assert_eq!(categories.len(), 3);
        assert_eq!(categories[0].name, "Design");
        assert_eq!(categories[0].entry_count, 2);
        assert_eq!(categories[1].slug, "developer-tools");
        assert_eq!(categories[2].name, "Writing");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let mut entries = sample_entries();
        entries.push(Entry::new(11, "Copy.ai again", "Writing"));

        let err = CatalogSnapshot::from_entries(entries).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DuplicateId { id: 11, first: 1, second: 4 }
        ));
    }

    #[test]
    fn test_load_sample_catalog() {
        // The sample catalog shipped with the repository
        let path = Path::new("../../data/catalog.json");

        if path.exists() {
            let snapshot = CatalogSnapshot::load_from_file(path).unwrap();
            assert!(!snapshot.is_empty());
            assert!(!snapshot.categories().is_empty());
        }
    }
}
