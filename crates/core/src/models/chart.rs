use serde::{Deserialize, Serialize};

/// Short calendar-month names, indexed by zero-based month (0 = January).
/// Series labels are drawn from this table so the frontend never has to
/// localize or re-derive them.
pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A single point of the portfolio performance series.
///
/// The core generates these — the frontend just renders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// Calendar-month label from [`MONTH_NAMES`] (e.g., "Jan", "Dec")
    pub label: String,

    /// Portfolio value at this point, rounded to 2 decimal places.
    /// Never negative.
    pub value: f64,

    /// Percent change from the previous point, rounded to 1 decimal place.
    /// `0.0` for the first point of a series (no predecessor).
    pub period_return: f64,
}

impl TimeSeriesPoint {
    pub fn new(label: impl Into<String>, value: f64, period_return: f64) -> Self {
        Self {
            label: label.into(),
            value,
            period_return,
        }
    }
}
