use serde::{Deserialize, Serialize};

/// A single stock quote row in the market overview table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Ticker symbol, uppercased (e.g., "AAPL", "MSFT")
    pub symbol: String,

    /// Last traded price in the display currency
    pub price: f64,

    /// Day change in percent (e.g., `1.24` for "+1.24%")
    pub change_pct: f64,

    /// Day volume in shares
    pub volume: u64,
}

impl Quote {
    pub fn new(symbol: impl Into<String>, price: f64, change_pct: f64, volume: u64) -> Self {
        Self {
            symbol: symbol.into().to_uppercase(),
            price,
            change_pct,
            volume,
        }
    }

    /// Whether the day change is a gain (zero counts as positive).
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.change_pct >= 0.0
    }

    /// Signed percent string for table rendering (e.g., "+1.24%", "-0.32%").
    #[must_use]
    pub fn change_display(&self) -> String {
        if self.change_pct >= 0.0 {
            format!("+{:.2}%", self.change_pct)
        } else {
            format!("{:.2}%", self.change_pct)
        }
    }

    /// Compact volume string: "62.3M", "850K", "1.2B". A trailing ".0" is
    /// trimmed ("23M", not "23.0M").
    #[must_use]
    pub fn volume_display(&self) -> String {
        const BILLION: u64 = 1_000_000_000;
        const MILLION: u64 = 1_000_000;
        const THOUSAND: u64 = 1_000;

        let (scaled, suffix) = if self.volume >= BILLION {
            (self.volume as f64 / BILLION as f64, "B")
        } else if self.volume >= MILLION {
            (self.volume as f64 / MILLION as f64, "M")
        } else if self.volume >= THOUSAND {
            (self.volume as f64 / THOUSAND as f64, "K")
        } else {
            return self.volume.to_string();
        };

        let formatted = format!("{scaled:.1}");
        let trimmed = formatted.strip_suffix(".0").unwrap_or(&formatted);
        format!("{trimmed}{suffix}")
    }
}
