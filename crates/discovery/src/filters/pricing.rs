//! Pricing heuristic filter.
//!
//! The catalog has no price field, so pricing is guessed from words in the
//! description. False negatives are expected.

use crate::filter_state::PricingTier;
use crate::traits::Filter;
use catalog::Entry;
use std::collections::BTreeSet;

/// Keeps entries whose description mentions a keyword of any requested tier.
pub struct PricingFilter {
    tiers: BTreeSet<PricingTier>,
}

impl PricingFilter {
    /// Create a new PricingFilter.
    ///
    /// # Arguments
    /// * `tiers` - Requested tiers, combined with OR
    pub fn new(tiers: impl IntoIterator<Item = PricingTier>) -> Self {
        Self {
            tiers: tiers.into_iter().collect(),
        }
    }
}

impl Filter for PricingFilter {
    fn name(&self) -> &str {
        "PricingFilter"
    }

    fn matches(&self, entry: &Entry) -> bool {
        let description = entry.description.to_lowercase();
        self.tiers.iter().any(|tier| {
            tier.keywords()
                .iter()
                .any(|keyword| description.contains(keyword))
        })
    }
}
