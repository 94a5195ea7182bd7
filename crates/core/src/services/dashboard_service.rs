use crate::models::dashboard::{ActiveTab, DashboardData, DashboardState};
use crate::models::news::NewsItem;

/// State transitions for the dashboard view.
///
/// Pure business logic — no I/O, no async. Every mutation of
/// [`DashboardState`] goes through here, so the invariants (atomic data
/// replacement, favorite/list consistency, refresh reentrancy) live in
/// one place.
pub struct DashboardService;

impl DashboardService {
    pub fn new() -> Self {
        Self
    }

    /// Mark the whole dashboard as loading. Called when a load cycle starts.
    pub fn begin_load(&self, state: &mut DashboardState) {
        state.news_loading = true;
        state.data_loading = true;
    }

    /// Land the results of a completed load cycle.
    ///
    /// Replaces all six collections in one step (no partially-updated
    /// dashboard is ever observable), clears both loading flags, and ends
    /// any in-flight refresh. Favorites are cleared too: they index into
    /// the news list that was just replaced.
    pub fn complete_load(&self, state: &mut DashboardState, data: DashboardData) {
        state.news = data.news;
        state.quotes = data.quotes;
        state.series = data.series;
        state.allocation = data.allocation;
        state.trends = data.trends;
        state.insights = data.insights;
        state.news_loading = false;
        state.data_loading = false;
        state.refreshing = false;
        state.favorites.clear();
    }

    /// Try to start a user-triggered refresh.
    ///
    /// Returns `false` and leaves the state untouched when a refresh is
    /// already in flight (repeated clicks are no-ops). The flag is cleared
    /// by [`complete_load`](Self::complete_load) when the cycle's data
    /// lands, or by [`abort_cycle`](Self::abort_cycle) when it never will —
    /// not by a timer.
    pub fn begin_refresh(&self, state: &mut DashboardState) -> bool {
        if state.refreshing {
            return false;
        }
        state.refreshing = true;
        true
    }

    /// End a load cycle whose results will never land (the in-flight fetch
    /// was dropped). Clears both loading flags and any refresh in flight;
    /// the collections and favorites keep whatever the last completed
    /// cycle left in them.
    pub fn abort_cycle(&self, state: &mut DashboardState) {
        state.news_loading = false;
        state.data_loading = false;
        state.refreshing = false;
    }

    /// Toggle the favorite mark on the article at `index`.
    /// Applying the same toggle twice restores the original set.
    pub fn toggle_favorite(&self, state: &mut DashboardState, index: usize) {
        if !state.favorites.remove(&index) {
            state.favorites.insert(index);
        }
    }

    /// Switch the news feed tab. Touches nothing but the tab.
    pub fn set_active_tab(&self, state: &mut DashboardState, tab: ActiveTab) {
        state.active_tab = tab;
    }

    /// The news items visible under the active tab, paired with their
    /// positions in the full list.
    ///
    /// Positions are stable across tabs so a favorite toggled from a
    /// filtered view still addresses the right article:
    /// - `Latest`: all articles in feed order.
    /// - `Trending`: all articles, biggest absolute move first (ties keep
    ///   feed order).
    /// - `Favorites`: favorited articles in position order.
    pub fn visible_news<'a>(&self, state: &'a DashboardState) -> Vec<(usize, &'a NewsItem)> {
        match state.active_tab {
            ActiveTab::Latest => state.news.iter().enumerate().collect(),
            ActiveTab::Trending => {
                let mut items: Vec<(usize, &NewsItem)> = state.news.iter().enumerate().collect();
                items.sort_by(|(_, a), (_, b)| {
                    b.change_pct
                        .abs()
                        .partial_cmp(&a.change_pct.abs())
                        .unwrap_or(std::cmp::Ordering::Equal)
                });
                items
            }
            ActiveTab::Favorites => state
                .news
                .iter()
                .enumerate()
                .filter(|(i, _)| state.favorites.contains(i))
                .collect(),
        }
    }
}

impl Default for DashboardService {
    fn default() -> Self {
        Self::new()
    }
}
