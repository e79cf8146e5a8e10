//! Daily spotlight picks for the landing view.

use catalog::Entry;
use chrono::{DateTime, Datelike, Duration, Utc};
use serde::Serialize;

/// Minimum popularity for a featured entry to be product of the day
pub const PRODUCT_OF_THE_DAY_MIN_SCORE: f64 = 6.0;

/// Default size of the "new this month" list
pub const NEW_THIS_MONTH_LIMIT: usize = 20;

/// Highest popularity wins; on ties the earliest entry stays.
fn most_popular<'a>(entries: impl Iterator<Item = &'a Entry>) -> Option<&'a Entry> {
    entries.fold(None, |best: Option<&'a Entry>, entry| match best {
        Some(current) if current.popularity() >= entry.popularity() => Some(current),
        _ => Some(entry),
    })
}

/// The featured entry with the highest popularity among those scoring at
/// least 6.0, falling back to the most popular entry overall.
pub fn product_of_the_day(snapshot: &[Entry]) -> Option<&Entry> {
    most_popular(
        snapshot
            .iter()
            .filter(|e| e.featured && e.popularity() >= PRODUCT_OF_THE_DAY_MIN_SCORE),
    )
    .or_else(|| most_popular(snapshot.iter()))
}

/// Pick from `candidates` by day of year, so the pick is stable for a UTC
/// calendar day and moves on the next.
pub fn daily_rotation<'a>(candidates: &[&'a Entry], now: DateTime<Utc>) -> Option<&'a Entry> {
    if candidates.is_empty() {
        return None;
    }
    let index = now.ordinal() as usize % candidates.len();
    Some(candidates[index])
}

/// Default rotation list: the featured entries in snapshot order
pub fn featured(snapshot: &[Entry]) -> Vec<&Entry> {
    snapshot.iter().filter(|e| e.featured).collect()
}

/// Entries created within `window` of `now`, newest first, at most `limit`.
pub fn new_this_month(
    snapshot: &[Entry],
    now: DateTime<Utc>,
    window: Duration,
    limit: usize,
) -> Vec<&Entry> {
    let mut recent: Vec<&Entry> = snapshot
        .iter()
        .filter(|e| e.created_within(now, window))
        .collect();
    recent.sort_by_key(|e| std::cmp::Reverse(e.created_at));
    recent.truncate(limit);
    recent
}

/// The three landing picks, computed together
#[derive(Debug, Clone, Serialize)]
pub struct Spotlight<'a> {
    pub product_of_the_day: Option<&'a Entry>,
    pub daily_pick: Option<&'a Entry>,
    pub new_this_month: Vec<&'a Entry>,
}

impl<'a> Spotlight<'a> {
    pub fn compute(snapshot: &'a [Entry], now: DateTime<Utc>, recent_window: Duration) -> Self {
        Self {
            product_of_the_day: product_of_the_day(snapshot),
            daily_pick: daily_rotation(&featured(snapshot), now),
            new_this_month: new_this_month(snapshot, now, recent_window, NEW_THIS_MONTH_LIMIT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 3, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_product_of_the_day_prefers_featured() {
        let snapshot = vec![
            Entry::new(1, "Perplexity", "Search").with_popularity(9.8),
            Entry::new(2, "Gamma", "Presentations").with_popularity(7.0).with_featured(true),
            Entry::new(3, "Tome", "Presentations").with_popularity(8.0).with_featured(true),
        ];
        assert_eq!(product_of_the_day(&snapshot).map(|e| e.id), Some(3));
    }

    #[test]
    fn test_product_of_the_day_falls_back_to_overall() {
        let snapshot = vec![
            Entry::new(1, "Otter", "Audio").with_popularity(5.5).with_featured(true),
            Entry::new(2, "Fireflies", "Audio").with_popularity(7.5),
            Entry::new(3, "tl;dv", "Audio").with_popularity(7.5),
        ];
        assert_eq!(product_of_the_day(&snapshot).map(|e| e.id), Some(2));
        assert!(product_of_the_day(&[]).is_none());
    }

    #[test]
    fn test_daily_rotation_uses_day_of_year() {
        let entries: Vec<Entry> = (1..=5)
            .map(|id| Entry::new(id, format!("Pick {id}"), "Other"))
            .collect();
        let candidates: Vec<&Entry> = entries.iter().collect();

        // Jan 3 is day 3
        assert_eq!(daily_rotation(&candidates, now()).map(|e| e.id), Some(4));

        // Same day, different hour
        let evening = Utc.with_ymd_and_hms(2025, 1, 3, 23, 59, 0).unwrap();
        assert_eq!(daily_rotation(&candidates, evening).map(|e| e.id), Some(4));

        let next_day = now() + Duration::days(1);
        assert_eq!(daily_rotation(&candidates, next_day).map(|e| e.id), Some(5));

        assert!(daily_rotation(&[], now()).is_none());
    }

    #[test]
    fn test_new_this_month_newest_first() {
        let snapshot = vec![
            Entry::new(1, "Old", "Other").with_created_at(now() - Duration::days(90)),
            Entry::new(2, "Week", "Other").with_created_at(now() - Duration::days(7)),
            Entry::new(3, "Yesterday", "Other").with_created_at(now() - Duration::days(1)),
            Entry::new(4, "Undated", "Other"),
        ];

        let recent = new_this_month(&snapshot, now(), Duration::days(30), 20);
        let ids: Vec<u64> = recent.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3, 2]);

        let limited = new_this_month(&snapshot, now(), Duration::days(30), 1);
        assert_eq!(limited.len(), 1);
    }

    #[test]
    fn test_spotlight_compute() {
        let snapshot = vec![
            Entry::new(1, "Claude", "Chatbots")
                .with_popularity(9.5)
                .with_featured(true)
                .with_created_at(now() - Duration::days(2)),
            Entry::new(2, "Pi", "Chatbots").with_popularity(6.5),
        ];

        let spotlight = Spotlight::compute(&snapshot, now(), Duration::days(30));
        assert_eq!(spotlight.product_of_the_day.map(|e| e.id), Some(1));
        assert_eq!(spotlight.daily_pick.map(|e| e.id), Some(1));
        assert_eq!(spotlight.new_this_month.len(), 1);
    }
}
