//! Related entries - content-based recommendations
//!
//! Scores every other entry in the snapshot against a reference entry:
//!
//! ## Algorithm
//! 1. Skip the reference itself
//! 2. Score each candidate:
//!    - category weight if its category equals the reference's
//!    - popularity weight × popularity score (0 if absent)
//!    - recency bonus if created within the window before `now`
//! 3. Stable sort by descending score (ties keep snapshot order)
//! 4. Keep the top `limit`
//!
//! Scoring is independent per candidate, so it runs on the rayon pool.

use catalog::Entry;
use chrono::{DateTime, Duration, Utc};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, instrument};

/// One scored recommendation. The score is derived, never stored on the entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Recommendation<'a> {
    pub entry: &'a Entry,
    pub score: f64,
}

/// Content-based related-entries engine with fixed weights
#[derive(Debug, Clone)]
pub struct RelatedEntries {
    /// Added when the candidate shares the reference's category
    category_weight: f64,

    /// Multiplies the candidate's popularity score
    popularity_weight: f64,

    /// Added when the candidate is recent
    recency_bonus: f64,

    /// How far before `now` a creation time still counts as recent
    recent_window: Duration,

    /// Maximum number of recommendations returned
    limit: usize,
}

impl RelatedEntries {
    pub fn new() -> Self {
        Self {
            category_weight: 10.0,
            popularity_weight: 0.1,
            recency_bonus: 2.0,
            recent_window: Duration::days(30),
            limit: 4,
        }
    }

    /// Configure the category match weight (default: 10.0)
    pub fn with_category_weight(mut self, weight: f64) -> Self {
        self.category_weight = weight;
        self
    }

    /// Configure the popularity weight (default: 0.1)
    pub fn with_popularity_weight(mut self, weight: f64) -> Self {
        self.popularity_weight = weight;
        self
    }

    /// Configure the recency bonus (default: 2.0)
    pub fn with_recency_bonus(mut self, bonus: f64) -> Self {
        self.recency_bonus = bonus;
        self
    }

    /// Configure the recency window (default: 30 days)
    pub fn with_recent_window(mut self, window: Duration) -> Self {
        self.recent_window = window;
        self
    }

    /// Configure the result limit (default: 4)
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Score `candidate` against `reference` at `now`.
    pub fn score(&self, reference: &Entry, candidate: &Entry, now: DateTime<Utc>) -> f64 {
        let category = if candidate.category == reference.category {
            self.category_weight
        } else {
            0.0
        };

        // Strictly after the window start, unlike the recency filter
        let window_start = now - self.recent_window;
        let recency = match candidate.created_at {
            Some(created) if created > window_start => self.recency_bonus,
            _ => 0.0,
        };

        category + self.popularity_weight * candidate.popularity() + recency
    }

    /// Entries related to `reference`, best first.
    ///
    /// Returns an empty list when there is no reference or the snapshot is
    /// empty. The reference is excluded by id.
    #[instrument(skip_all, fields(snapshot = snapshot.len()))]
    pub fn recommend<'a>(
        &self,
        reference: Option<&Entry>,
        snapshot: &'a [Entry],
        now: DateTime<Utc>,
    ) -> Vec<Recommendation<'a>> {
        let Some(reference) = reference else {
            return Vec::new();
        };
        if snapshot.is_empty() || self.limit == 0 {
            return Vec::new();
        }

        // collect() keeps snapshot order, which the stable sort relies on
        let mut scored: Vec<Recommendation<'a>> = snapshot
            .par_iter()
            .filter(|candidate| candidate.id != reference.id)
            .map(|candidate| Recommendation {
                entry: candidate,
                score: self.score(reference, candidate, now),
            })
            .collect();

        scored.sort_by(|a, b| b.score.total_cmp(&a.score));
        scored.truncate(self.limit);

        debug!(
            "Recommended {} entries related to {} ({})",
            scored.len(),
            reference.id,
            reference.name
        );
        scored
    }
}

impl Default for RelatedEntries {
    fn default() -> Self {
        Self::new()
    }
}

/// Recommend with the default weights.
pub fn recommend<'a>(
    reference: Option<&Entry>,
    snapshot: &'a [Entry],
    now: DateTime<Utc>,
) -> Vec<Recommendation<'a>> {
    RelatedEntries::default().recommend(reference, snapshot, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 9, 15, 12, 0, 0).unwrap()
    }

    fn ids(recommendations: &[Recommendation<'_>]) -> Vec<u64> {
        recommendations.iter().map(|r| r.entry.id).collect()
    }

    #[test]
    fn test_category_match_dominates_popularity() {
        let reference = Entry::new(1, "Figma AI", "Design");
        let snapshot = vec![
            reference.clone(),
            Entry::new(2, "Sudowrite", "Writing").with_popularity(10.0),
            Entry::new(3, "Looka", "Design").with_popularity(5.0),
        ];

        let result = recommend(Some(&reference), &snapshot, now());
        assert_eq!(ids(&result), vec![3, 2]);
        assert!((result[0].score - 10.5).abs() < 1e-9);
        assert!((result[1].score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_reference_is_excluded() {
        let reference = Entry::new(7, "Notion AI", "Productivity").with_popularity(9.9);
        let snapshot = vec![
            Entry::new(6, "Taskade", "Productivity").with_popularity(1.0),
            reference.clone(),
            Entry::new(8, "Motion", "Productivity").with_popularity(2.0),
        ];

        let result = recommend(Some(&reference), &snapshot, now());
        assert!(result.iter().all(|r| r.entry.id != 7));
        assert_eq!(ids(&result), vec![8, 6]);
    }

    #[test]
    fn test_absent_reference_or_empty_snapshot() {
        let reference = Entry::new(1, "Runway", "Video");
        let snapshot = vec![Entry::new(2, "Pika", "Video")];

        assert!(recommend(None, &snapshot, now()).is_empty());
        assert!(recommend(Some(&reference), &[], now()).is_empty());
    }

    #[test]
    fn test_limit_and_stable_ties() {
        let reference = Entry::new(100, "ElevenLabs", "Audio");
        let snapshot: Vec<Entry> = (1..=8)
            .map(|id| Entry::new(id, format!("Voice {id}"), "Audio").with_popularity(7.0))
            .collect();

        let result = recommend(Some(&reference), &snapshot, now());
        assert_eq!(ids(&result), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_recency_bonus_window_is_strict() {
        let engine = RelatedEntries::new();
        let reference = Entry::new(1, "Reference", "Other");

        let inside = Entry::new(2, "Inside", "Video").with_created_at(now() - Duration::days(29));
        let boundary = Entry::new(3, "Boundary", "Video").with_created_at(now() - Duration::days(30));
        let undated = Entry::new(4, "Undated", "Video");

        assert_eq!(engine.score(&reference, &inside, now()), 2.0);
        assert_eq!(engine.score(&reference, &boundary, now()), 0.0);
        assert_eq!(engine.score(&reference, &undated, now()), 0.0);
    }

    #[test]
    fn test_custom_weights() {
        let engine = RelatedEntries::new()
            .with_category_weight(0.0)
            .with_popularity_weight(1.0)
            .with_limit(1);
        let reference = Entry::new(1, "Synthesia", "Video");
        let snapshot = vec![
            Entry::new(2, "HeyGen", "Video").with_popularity(3.0),
            Entry::new(3, "Suno", "Audio").with_popularity(8.0),
        ];

        let result = engine.recommend(Some(&reference), &snapshot, now());
        assert_eq!(ids(&result), vec![3]);
    }
}
