//! # Discovery Session
//!
//! Holds one browsing session over a catalog snapshot:
//! 1. `apply` runs filter → rank for a query and resets the window
//! 2. `load_more` advances the window one page, at most once at a time
//! 3. `view` reads the visible page
//! 4. `recommend_for` and `spotlight` read the snapshot directly
//!
//! The snapshot is shared and immutable. The only mutable state is the
//! pagination window, behind an async mutex that is never held across the
//! load delay, so `view` keeps working while an advance is in flight.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use catalog::{CatalogSnapshot, Entry, EntryId};
use discovery::{rank, FilterPipeline, PaginationWindow};
use recommend::{Recommendation, RelatedEntries, Spotlight};

use crate::config::DiscoveryConfig;
use crate::error::{Result, SessionError};
use crate::query::DiscoveryQuery;

/// What the presentation layer renders for the current window
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub entries: Vec<Entry>,
    pub total: usize,
    pub current_page: usize,
    pub has_more: bool,
    pub loading: bool,
}

/// A browsing session over one catalog snapshot
#[derive(Clone)]
pub struct DiscoverySession {
    snapshot: Arc<CatalogSnapshot>,
    config: DiscoveryConfig,
    related: RelatedEntries,
    window: Arc<Mutex<PaginationWindow<Entry>>>,
}

impl DiscoverySession {
    /// Create a session over an already loaded snapshot.
    ///
    /// The window starts empty; call `apply` to fill it.
    pub fn new(snapshot: Arc<CatalogSnapshot>, config: DiscoveryConfig) -> Self {
        let related = RelatedEntries::new()
            .with_recent_window(config.recent_window())
            .with_limit(config.recommendation_limit);
        let window = PaginationWindow::new(config.page_size);

        Self {
            snapshot,
            config,
            related,
            window: Arc::new(Mutex::new(window)),
        }
    }

    /// Load the catalog file and open a session over it.
    pub fn open(path: &Path, config: DiscoveryConfig) -> anyhow::Result<Self> {
        let start = Instant::now();
        let snapshot = CatalogSnapshot::load_from_file(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?;
        info!(
            "Opened session over {} entries in {:.2?}",
            snapshot.len(),
            start.elapsed()
        );
        Ok(Self::new(Arc::new(snapshot), config))
    }

    pub fn snapshot(&self) -> &CatalogSnapshot {
        &self.snapshot
    }

    pub fn config(&self) -> &DiscoveryConfig {
        &self.config
    }

    /// Recompute the ranked list for `query` and go back to page 1.
    ///
    /// Returns the number of entries that passed the filters.
    #[instrument(skip_all, fields(search = %query.search, sort = %query.sort))]
    pub async fn apply(&self, query: &DiscoveryQuery, now: DateTime<Utc>) -> usize {
        let pipeline = FilterPipeline::for_criteria(
            &query.search,
            query.category.as_deref(),
            &query.filters,
            now,
            self.config.recent_window(),
        );
        let filtered = pipeline.apply(self.snapshot.entries());
        let ranked: Vec<Entry> = rank(filtered, query.sort).into_iter().cloned().collect();
        let total = ranked.len();

        self.window.lock().await.reset(ranked);
        info!(
            "Applied query: {} of {} entries match ({} filters active)",
            total,
            self.snapshot.len(),
            pipeline.len()
        );
        total
    }

    /// Reveal the next page after the configured delay.
    ///
    /// Returns `false` without waiting if an advance is already in flight or
    /// everything is displayed. An advance that races with `apply` is
    /// dropped and also returns `false`.
    pub async fn load_more(&self) -> bool {
        let ticket = self.window.lock().await.begin_load();
        let Some(ticket) = ticket else {
            debug!("load_more ignored: already loading or nothing left");
            return false;
        };

        let page = ticket.page();
        debug!("Loading page {}", page);
        tokio::time::sleep(self.config.load_delay).await;

        let advanced = self.window.lock().await.complete_load(ticket);
        if advanced {
            debug!("Page {} loaded", page);
        }
        advanced
    }

    /// Snapshot of the visible window
    pub async fn view(&self) -> PageView {
        let window = self.window.lock().await;
        PageView {
            entries: window.displayed().to_vec(),
            total: window.total(),
            current_page: window.current_page(),
            has_more: window.has_more(),
            loading: window.is_loading(),
        }
    }

    /// Related entries for the entry with `id`.
    pub fn recommend_for(&self, id: EntryId, now: DateTime<Utc>) -> Result<Vec<Recommendation<'_>>> {
        let reference = self.snapshot.get(id).ok_or(SessionError::UnknownEntry(id))?;
        Ok(self
            .related
            .recommend(Some(reference), self.snapshot.entries(), now))
    }

    /// Landing picks for `now`
    pub fn spotlight(&self, now: DateTime<Utc>) -> Spotlight<'_> {
        Spotlight::compute(self.snapshot.entries(), now, self.config.recent_window())
    }
}
