//! Filter for the category checkboxes in the advanced filter panel.

use crate::traits::Filter;
use catalog::Entry;

/// Keeps entries whose category contains any of the tags (case-insensitive).
///
/// Unlike `CategoryFilter` this is a substring match, so the tag "design"
/// also keeps "UI Design" and "Graphic Design".
pub struct CategoryTagsFilter {
    tags: Vec<String>,
}

impl CategoryTagsFilter {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            tags: tags.into_iter().map(|t| t.as_ref().to_lowercase()).collect(),
        }
    }
}

impl Filter for CategoryTagsFilter {
    fn name(&self) -> &str {
        "CategoryTagsFilter"
    }

    fn matches(&self, entry: &Entry) -> bool {
        let category = entry.category.to_lowercase();
        self.tags.iter().any(|tag| category.contains(tag.as_str()))
    }
}
