use serde::{Deserialize, Serialize};

/// Construction-time configuration for the dashboard core.
///
/// Applied when the facade (or a mock source) is built; there is no runtime
/// mutation path, so a configured source never gets silently replaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSettings {
    /// Starting value of the generated performance series.
    /// Must be finite and positive.
    pub performance_baseline: f64,

    /// Fixed seed for the series generator. `None` seeds from entropy,
    /// which is what the live dashboard wants; tests pin a seed for
    /// reproducible series.
    #[serde(default)]
    pub series_seed: Option<u64>,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            performance_baseline: 1000.0,
            series_seed: None,
        }
    }
}
