//! Incremental window over the ranked list.
//!
//! The window shows a growing prefix of the ranked list. A page advance is
//! split into `begin_load` and `complete_load` so the caller can wait (or
//! fetch) between the two while the window reports itself as loading.
//! At most one advance is in flight at a time.

use serde::{Deserialize, Serialize};

/// Entries revealed per page.
pub const DEFAULT_PAGE_SIZE: usize = 20;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
}

/// Proof that a page advance was started.
///
/// A ticket only completes against the list it was issued for: `reset`
/// bumps the generation, and completing an older ticket does nothing.
/// Completing consumes the ticket, and a ticket only moves the window to
/// the page right after the current one.
#[derive(Debug, PartialEq, Eq)]
pub struct PageTicket {
    generation: u64,
    page: usize,
}

impl PageTicket {
    /// Page number the window will show once this ticket completes
    pub fn page(&self) -> usize {
        self.page
    }
}

#[derive(Debug, Clone)]
pub struct PaginationWindow<T> {
    items: Vec<T>,
    page_size: usize,
    current_page: usize,
    state: LoadState,
    generation: u64,
}

impl<T> PaginationWindow<T> {
    /// Empty window. A zero page size is raised to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            page_size: page_size.max(1),
            current_page: 1,
            state: LoadState::Idle,
            generation: 0,
        }
    }

    /// Window over `items`, showing the first page
    pub fn with_items(page_size: usize, items: Vec<T>) -> Self {
        let mut window = Self::new(page_size);
        window.reset(items);
        window
    }

    /// Replace the ranked list and go back to page 1.
    ///
    /// Any advance still in flight is abandoned.
    pub fn reset(&mut self, items: Vec<T>) {
        self.items = items;
        self.current_page = 1;
        self.state = LoadState::Idle;
        self.generation = self.generation.wrapping_add(1);
        tracing::debug!(
            "Pagination reset: {} items, generation {}",
            self.items.len(),
            self.generation
        );
    }

    /// Length of the visible prefix
    pub fn displayed_len(&self) -> usize {
        self.current_page
            .saturating_mul(self.page_size)
            .min(self.items.len())
    }

    /// The visible prefix of the ranked list
    pub fn displayed(&self) -> &[T] {
        &self.items[..self.displayed_len()]
    }

    pub fn has_more(&self) -> bool {
        self.displayed_len() < self.items.len()
    }

    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    /// Start a page advance.
    ///
    /// Returns `None` (and changes nothing) if an advance is already in
    /// flight or the whole list is displayed.
    pub fn begin_load(&mut self) -> Option<PageTicket> {
        if self.is_loading() || !self.has_more() {
            return None;
        }
        self.state = LoadState::Loading;
        Some(PageTicket {
            generation: self.generation,
            page: self.current_page + 1,
        })
    }

    /// Finish a page advance started by `begin_load`.
    ///
    /// Returns `true` if the window advanced. A ticket from before the last
    /// `reset`, or one that does not target the next page, is ignored.
    pub fn complete_load(&mut self, ticket: PageTicket) -> bool {
        if ticket.generation != self.generation
            || !self.is_loading()
            || ticket.page != self.current_page + 1
        {
            tracing::debug!("Ignoring stale page ticket for page {}", ticket.page);
            return false;
        }
        self.current_page = ticket.page;
        self.state = LoadState::Idle;
        true
    }

    /// Advance one page immediately. Returns `true` if the window advanced.
    pub fn load_more(&mut self) -> bool {
        match self.begin_load() {
            Some(ticket) => self.complete_load(ticket),
            None => false,
        }
    }
}

impl<T> Default for PaginationWindow<T> {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window_of(len: usize) -> PaginationWindow<usize> {
        PaginationWindow::with_items(DEFAULT_PAGE_SIZE, (0..len).collect())
    }

    #[test]
    fn test_first_page() {
        let window = window_of(45);
        assert_eq!(window.current_page(), 1);
        assert_eq!(window.displayed().len(), 20);
        assert!(window.has_more());
        assert_eq!(window.state(), LoadState::Idle);
    }

    #[test]
    fn test_short_list_fits_on_one_page() {
        let window = window_of(7);
        assert_eq!(window.displayed(), &[0, 1, 2, 3, 4, 5, 6]);
        assert!(!window.has_more());
    }

    #[test]
    fn test_empty_list() {
        let mut window = window_of(0);
        assert!(window.displayed().is_empty());
        assert!(!window.has_more());
        assert!(window.begin_load().is_none());
    }

    #[test]
    fn test_load_more_until_exhausted() {
        let len = 45;
        let mut window = window_of(len);

        let pages = len.div_ceil(DEFAULT_PAGE_SIZE);
        for _ in 1..pages {
            assert!(window.load_more());
        }
        assert_eq!(window.displayed().len(), len);
        assert!(!window.has_more());

        // Extra call is a no-op
        assert!(!window.load_more());
        assert_eq!(window.current_page(), pages);
    }

    #[test]
    fn test_displayed_is_exact_prefix() {
        let mut window = window_of(63);
        while window.load_more() {
            let shown = window.displayed();
            assert_eq!(shown.to_vec(), (0..shown.len()).collect::<Vec<_>>());
        }
        assert_eq!(window.displayed().len(), 63);
    }

    #[test]
    fn test_begin_load_is_exclusive() {
        let mut window = window_of(100);

        let ticket = window.begin_load().unwrap();
        assert!(window.is_loading());
        assert!(window.begin_load().is_none());
        assert!(!window.load_more());

        // Still on page 1 until completion
        assert_eq!(window.displayed().len(), 20);

        assert!(window.complete_load(ticket));
        assert_eq!(window.current_page(), 2);
        assert_eq!(window.displayed().len(), 40);
        assert!(!window.is_loading());
    }

    #[test]
    fn test_ticket_completes_once() {
        let mut window = window_of(100);
        let ticket = window.begin_load().unwrap();
        let replay = PageTicket {
            generation: window.generation,
            page: ticket.page(),
        };

        assert!(window.complete_load(ticket));
        assert!(!window.complete_load(replay));
        assert_eq!(window.current_page(), 2);
    }

    #[test]
    fn test_replayed_ticket_cannot_skip_in_flight_load() {
        let mut window = window_of(100);
        let first = window.begin_load().unwrap();
        let first_page = first.page();
        assert!(window.complete_load(first));

        let second = window.begin_load().unwrap();
        assert_eq!(second.page(), 3);

        // Same generation and page as the already completed first ticket
        let replay = PageTicket {
            generation: window.generation,
            page: first_page,
        };
        assert!(!window.complete_load(replay));
        assert!(window.is_loading());
        assert_eq!(window.current_page(), 2);
        assert_eq!(window.displayed().len(), 40);

        assert!(window.complete_load(second));
        assert_eq!(window.current_page(), 3);
        assert!(!window.is_loading());
    }

    #[test]
    fn test_reset_discards_in_flight_load() {
        let mut window = window_of(100);
        let ticket = window.begin_load().unwrap();

        window.reset((0..50).collect());
        assert!(!window.is_loading());
        assert!(!window.complete_load(ticket));
        assert_eq!(window.current_page(), 1);
        assert_eq!(window.displayed().len(), 20);
        assert_eq!(window.total(), 50);
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        let window = PaginationWindow::with_items(0, vec!['a', 'b']);
        assert_eq!(window.page_size(), 1);
        assert_eq!(window.displayed(), &['a']);
    }
}
