//! User-selected filter criteria.
//!
//! `FilterState` is owned by the caller and handed to the pipeline on every
//! recomputation. The default value is the identity filter.

use crate::error::QueryError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Pricing tags a user can tick.
///
/// There is no structured price field in the catalog, so each tier is
/// matched by keywords in the entry description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PricingTier {
    Free,
    Paid,
    Freemium,
}

impl PricingTier {
    pub const ALL: [PricingTier; 3] = [PricingTier::Free, PricingTier::Paid, PricingTier::Freemium];

    /// Lower-case description keywords that signal this tier
    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            PricingTier::Free => &["free", "open source"],
            PricingTier::Paid => &["paid", "premium", "subscription"],
            PricingTier::Freemium => &["freemium"],
        }
    }
}

impl fmt::Display for PricingTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PricingTier::Free => "Free",
            PricingTier::Paid => "Paid",
            PricingTier::Freemium => "Freemium",
        };
        f.write_str(label)
    }
}

impl FromStr for PricingTier {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "free" => Ok(PricingTier::Free),
            "paid" => Ok(PricingTier::Paid),
            "freemium" => Ok(PricingTier::Freemium),
            _ => Err(QueryError::UnknownPricingTier(s.to_string())),
        }
    }
}

/// Advanced filter selections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub pricing_tags: BTreeSet<PricingTier>,
    pub min_rating: Option<f64>,
    pub category_tags: BTreeSet<String>,
    /// Carried for callers; no predicate reads it.
    pub feature_tags: BTreeSet<String>,
    pub recent_only: bool,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pricing(mut self, tier: PricingTier) -> Self {
        self.pricing_tags.insert(tier);
        self
    }

    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = Some(min_rating);
        self
    }

    pub fn with_category_tag(mut self, tag: impl Into<String>) -> Self {
        self.category_tags.insert(tag.into());
        self
    }

    pub fn with_feature_tag(mut self, tag: impl Into<String>) -> Self {
        self.feature_tags.insert(tag.into());
        self
    }

    pub fn with_recent_only(mut self, recent_only: bool) -> Self {
        self.recent_only = recent_only;
        self
    }

    /// True when every field is empty/false, i.e. the state matches everything
    pub fn is_identity(&self) -> bool {
        self.active_count() == 0
    }

    /// Number of active selections, counted per tag the way the filter
    /// badge shows them
    pub fn active_count(&self) -> usize {
        self.pricing_tags.len()
            + self.category_tags.len()
            + self.feature_tags.len()
            + usize::from(self.min_rating.is_some())
            + usize::from(self.recent_only)
    }

    /// Reset every selection
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
