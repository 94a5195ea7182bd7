use serde::{Deserialize, Serialize};

/// One slice of the portfolio allocation pie: a sector and its weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorWeight {
    /// Sector name (e.g., "Technology", "Healthcare")
    pub sector: String,

    /// Weight of the sector in percent of the whole portfolio.
    /// A full allocation sums to 100.
    pub weight_pct: f64,
}

impl SectorWeight {
    pub fn new(sector: impl Into<String>, weight_pct: f64) -> Self {
        Self {
            sector: sector.into(),
            weight_pct,
        }
    }
}
