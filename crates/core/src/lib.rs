pub mod errors;
pub mod models;
pub mod services;
pub mod sources;

use models::{
    allocation::SectorWeight,
    chart::TimeSeriesPoint,
    dashboard::{ActiveTab, DashboardData, DashboardState},
    insight::Insight,
    navigation::{NavigationState, Section},
    news::NewsItem,
    quote::Quote,
    settings::DashboardSettings,
    trend::IndexTrend,
};
use services::{dashboard_service::DashboardService, refresh_service::RefreshService};
use sources::{mock::MockDataSource, traits::DataSource};

use errors::CoreError;

/// Main entry point for the Market Dashboard core library.
/// Holds the view state and all services needed to operate on it.
///
/// The frontend creates one `MarketDashboard` when the view mounts, runs
/// [`load`](Self::load), and from then on reads state snapshots and calls
/// transition methods in response to user input. All mutation goes through
/// `&mut self`, so there is exactly one writer and no partially-applied
/// update is ever observable.
#[must_use]
pub struct MarketDashboard {
    state: DashboardState,
    navigation: NavigationState,
    settings: DashboardSettings,
    source: Box<dyn DataSource>,
    dashboard_service: DashboardService,
    refresh_service: RefreshService,
}

impl std::fmt::Debug for MarketDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketDashboard")
            .field("source", &self.source.name())
            .field("news", &self.state.news.len())
            .field("quotes", &self.state.quotes.len())
            .field("series", &self.state.series.len())
            .field("favorites", &self.state.favorites.len())
            .field("refreshing", &self.state.refreshing)
            .field("section", &self.navigation.section)
            .finish()
    }
}

impl MarketDashboard {
    /// Create a dashboard over the built-in mock source with default settings.
    pub fn new() -> Self {
        Self::build(DashboardSettings::default(), Box::new(MockDataSource::new()))
    }

    /// Create a dashboard over the built-in mock source, configured.
    /// Fails fast on invalid settings (e.g., a non-positive baseline).
    pub fn with_settings(settings: DashboardSettings) -> Result<Self, CoreError> {
        let source = MockDataSource::from_settings(&settings)?;
        Ok(Self::build(settings, Box::new(source)))
    }

    /// Create a dashboard over a custom data source (e.g., a live backend).
    pub fn with_source(source: Box<dyn DataSource>) -> Self {
        Self::build(DashboardSettings::default(), source)
    }

    // ── Load Cycle ──────────────────────────────────────────────────

    /// Run the initial load: mark everything as loading, fetch all six
    /// categories, land the results in one step. Called once when the view
    /// mounts. Infallible — failed categories simply come back empty.
    pub async fn load(&mut self) {
        tracing::debug!("Load cycle started (source: {})", self.source.name());
        self.dashboard_service.begin_load(&mut self.state);
        let cycle = CycleGuard::new(&self.dashboard_service, &mut self.state);
        let data = self.refresh_service.fetch_all(self.source.as_ref()).await;
        cycle.complete(data);
        tracing::debug!(
            "Load cycle finished: {} news, {} quotes, {} series points",
            self.state.news.len(),
            self.state.quotes.len(),
            self.state.series.len(),
        );
    }

    /// Run a user-triggered refresh.
    ///
    /// Returns `false` without touching the source when a refresh is
    /// already in flight (repeated clicks are no-ops). The refreshing flag
    /// is cleared when the new data lands, not by a timer; a cycle dropped
    /// mid-flight (caller timeout, view teardown) clears it on the way
    /// out, so a live dashboard never stays locked behind a fetch that
    /// ended before its data arrived.
    pub async fn refresh(&mut self) -> bool {
        if !self.dashboard_service.begin_refresh(&mut self.state) {
            tracing::debug!("Refresh ignored: previous cycle still in flight");
            return false;
        }
        self.dashboard_service.begin_load(&mut self.state);
        let cycle = CycleGuard::new(&self.dashboard_service, &mut self.state);
        let data = self.refresh_service.fetch_all(self.source.as_ref()).await;
        cycle.complete(data);
        true
    }

    // ── News Feed ───────────────────────────────────────────────────

    /// Toggle the favorite mark on the article at `index`.
    pub fn toggle_favorite(&mut self, index: usize) {
        self.dashboard_service.toggle_favorite(&mut self.state, index);
    }

    /// Whether the article at `index` is currently favorited.
    #[must_use]
    pub fn is_favorite(&self, index: usize) -> bool {
        self.state.is_favorite(index)
    }

    /// Number of favorited articles.
    #[must_use]
    pub fn favorite_count(&self) -> usize {
        self.state.favorites.len()
    }

    /// Switch the news feed tab.
    pub fn set_active_tab(&mut self, tab: ActiveTab) {
        self.dashboard_service.set_active_tab(&mut self.state, tab);
    }

    /// Get the active news tab.
    #[must_use]
    pub fn active_tab(&self) -> ActiveTab {
        self.state.active_tab
    }

    /// Get the news items visible under the active tab, paired with their
    /// positions in the full feed.
    #[must_use]
    pub fn visible_news(&self) -> Vec<(usize, &NewsItem)> {
        self.dashboard_service.visible_news(&self.state)
    }

    // ── Navigation ──────────────────────────────────────────────────

    /// Switch to another app section.
    pub fn set_section(&mut self, section: Section) {
        self.navigation.set_section(section);
    }

    /// Get the currently displayed section.
    #[must_use]
    pub fn section(&self) -> Section {
        self.navigation.section
    }

    /// Open or close the navigation drawer.
    pub fn set_drawer_open(&mut self, open: bool) {
        self.navigation.set_drawer_open(open);
    }

    /// Toggle the navigation drawer.
    pub fn toggle_drawer(&mut self) {
        self.navigation.toggle_drawer();
    }

    // ── State Access ────────────────────────────────────────────────

    /// Get the full dashboard view state.
    #[must_use]
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Get the shell navigation state.
    #[must_use]
    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    /// Get the settings this dashboard was built with.
    #[must_use]
    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    /// Get the market news feed.
    #[must_use]
    pub fn news(&self) -> &[NewsItem] {
        &self.state.news
    }

    /// Get the stock quote table rows.
    #[must_use]
    pub fn quotes(&self) -> &[Quote] {
        &self.state.quotes
    }

    /// Get the portfolio performance series.
    #[must_use]
    pub fn series(&self) -> &[TimeSeriesPoint] {
        &self.state.series
    }

    /// Get the portfolio allocation by sector.
    #[must_use]
    pub fn allocation(&self) -> &[SectorWeight] {
        &self.state.allocation
    }

    /// Get the market index trends.
    #[must_use]
    pub fn trends(&self) -> &[IndexTrend] {
        &self.state.trends
    }

    /// Get the AI insight cards.
    #[must_use]
    pub fn insights(&self) -> &[Insight] {
        &self.state.insights
    }

    /// Whether any part of the dashboard is still loading.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Whether a user-triggered refresh is in flight.
    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.state.refreshing
    }

    /// Get the name of the data source backing this dashboard.
    #[must_use]
    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Export the current view state as JSON (unencrypted snapshot for the
    /// frontend or for debugging).
    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.state)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize dashboard state: {e}")))
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(settings: DashboardSettings, source: Box<dyn DataSource>) -> Self {
        Self {
            state: DashboardState::new(),
            navigation: NavigationState::new(),
            settings,
            source,
            dashboard_service: DashboardService::new(),
            refresh_service: RefreshService::new(),
        }
    }
}

impl Default for MarketDashboard {
    fn default() -> Self {
        Self::new()
    }
}

/// Scope guard for an in-flight load cycle. A cycle that runs to
/// completion lands its data through [`complete`](Self::complete); a
/// cycle dropped at the await point (caller timeout, view teardown) is
/// aborted on drop instead, so no loading or refreshing flag outlives
/// the fetch it was set for.
struct CycleGuard<'a> {
    service: &'a DashboardService,
    state: &'a mut DashboardState,
    armed: bool,
}

impl<'a> CycleGuard<'a> {
    fn new(service: &'a DashboardService, state: &'a mut DashboardState) -> Self {
        Self {
            service,
            state,
            armed: true,
        }
    }

    /// Land the cycle's data and disarm the guard.
    fn complete(mut self, data: DashboardData) {
        self.armed = false;
        self.service.complete_load(self.state, data);
    }
}

impl Drop for CycleGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            tracing::debug!("Load cycle dropped mid-flight, aborting");
            self.service.abort_cycle(self.state);
        }
    }
}
