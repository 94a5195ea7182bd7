use serde::{Deserialize, Serialize};

/// Top-level app section reachable from the navigation drawer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Section {
    /// Main dashboard (default)
    #[default]
    Dashboard,
    /// Per-stock analysis
    StockAnalysis,
    /// AI predictions
    Predictions,
    /// Market trends
    Trends,
    /// Reports
    Reports,
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Section::Dashboard => write!(f, "Dashboard"),
            Section::StockAnalysis => write!(f, "Stock Analysis"),
            Section::Predictions => write!(f, "AI Predictions"),
            Section::Trends => write!(f, "Market Trends"),
            Section::Reports => write!(f, "Reports"),
        }
    }
}

impl Section {
    /// All sections in drawer order. The frontend builds its menu from this.
    #[must_use]
    pub fn all() -> [Section; 5] {
        [
            Section::Dashboard,
            Section::StockAnalysis,
            Section::Predictions,
            Section::Trends,
            Section::Reports,
        ]
    }
}

/// Shell-level navigation state: which section is shown and whether the
/// drawer is open. The drawer starts open (desktop layout).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationState {
    /// Currently displayed section
    pub section: Section,

    /// Whether the navigation drawer is open
    pub drawer_open: bool,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            section: Section::default(),
            drawer_open: true,
        }
    }
}

impl NavigationState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_section(&mut self, section: Section) {
        self.section = section;
    }

    pub fn set_drawer_open(&mut self, open: bool) {
        self.drawer_open = open;
    }

    pub fn toggle_drawer(&mut self) {
        self.drawer_open = !self.drawer_open;
    }
}
