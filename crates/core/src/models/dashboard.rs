use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::allocation::SectorWeight;
use super::chart::TimeSeriesPoint;
use super::insight::Insight;
use super::news::NewsItem;
use super::quote::Quote;
use super::trend::IndexTrend;

/// Which news tab is active in the feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActiveTab {
    /// All articles in feed order (default)
    #[default]
    Latest,
    /// Articles ordered by the size of their market move
    Trending,
    /// Only favorited articles
    Favorites,
}

impl std::fmt::Display for ActiveTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActiveTab::Latest => write!(f, "Latest"),
            ActiveTab::Trending => write!(f, "Trending"),
            ActiveTab::Favorites => write!(f, "Favorites"),
        }
    }
}

/// The six collections a completed load cycle delivers, applied to the
/// state in a single transition so no partially-updated dashboard is ever
/// observable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub news: Vec<NewsItem>,
    pub quotes: Vec<Quote>,
    pub series: Vec<TimeSeriesPoint>,
    pub allocation: Vec<SectorWeight>,
    pub trends: Vec<IndexTrend>,
    pub insights: Vec<Insight>,
}

/// The complete view state of the dashboard. Created empty when the view
/// mounts, mutated only through [`DashboardService`] operations, never
/// persisted.
///
/// [`DashboardService`]: crate::services::dashboard_service::DashboardService
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardState {
    /// Market news feed
    pub news: Vec<NewsItem>,

    /// Stock quote table rows
    pub quotes: Vec<Quote>,

    /// Portfolio performance series (7 trailing months)
    pub series: Vec<TimeSeriesPoint>,

    /// Portfolio allocation by sector
    pub allocation: Vec<SectorWeight>,

    /// Market index trends
    pub trends: Vec<IndexTrend>,

    /// AI insight cards
    pub insights: Vec<Insight>,

    /// News feed is loading
    pub news_loading: bool,

    /// Market data widgets are loading
    pub data_loading: bool,

    /// A user-triggered refresh cycle is in flight.
    /// Cleared when the cycle's data lands or the cycle is dropped,
    /// not by a timer.
    pub refreshing: bool,

    /// Positions of favorited articles in `news`.
    /// Cleared whenever the news list is replaced — positions are not
    /// stable identities across a reload.
    pub favorites: BTreeSet<usize>,

    /// Active news tab
    pub active_tab: ActiveTab,
}

impl DashboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any part of the dashboard is still loading.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.news_loading || self.data_loading
    }

    /// Whether the article at `index` is currently favorited.
    #[must_use]
    pub fn is_favorite(&self, index: usize) -> bool {
        self.favorites.contains(&index)
    }
}
