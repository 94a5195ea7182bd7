use serde::{Deserialize, Serialize};

/// Direction of an index move over the observed period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    /// Index gained (zero counts as up)
    Up,
    /// Index lost
    Down,
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrendDirection::Up => write!(f, "up"),
            TrendDirection::Down => write!(f, "down"),
        }
    }
}

/// A market index and its current trend, shown in the trends widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexTrend {
    /// Index name (e.g., "NASDAQ", "S&P 500")
    pub name: String,

    /// Period change in percent (e.g., `1.2` for "+1.2%")
    pub change_pct: f64,

    /// Up or Down, derived from the sign of `change_pct`
    pub direction: TrendDirection,
}

impl IndexTrend {
    pub fn new(name: impl Into<String>, change_pct: f64) -> Self {
        let direction = if change_pct >= 0.0 {
            TrendDirection::Up
        } else {
            TrendDirection::Down
        };
        Self {
            name: name.into(),
            change_pct,
            direction,
        }
    }

    /// Signed percent string for widget rendering (e.g., "+1.2%", "-0.3%").
    #[must_use]
    pub fn change_display(&self) -> String {
        if self.change_pct >= 0.0 {
            format!("+{:.1}%", self.change_pct)
        } else {
            format!("{:.1}%", self.change_pct)
        }
    }
}
