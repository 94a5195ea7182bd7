use async_trait::async_trait;
use chrono::{Datelike, Utc};
use std::sync::Mutex;

use super::traits::DataSource;
use crate::errors::CoreError;
use crate::models::allocation::SectorWeight;
use crate::models::chart::TimeSeriesPoint;
use crate::models::insight::{Insight, InsightKind};
use crate::models::news::NewsItem;
use crate::models::quote::Quote;
use crate::models::settings::DashboardSettings;
use crate::models::trend::IndexTrend;
use crate::services::series_generator::SeriesGenerator;

/// In-memory data source backing the dashboard.
///
/// - **News / quotes / allocation / trends / insights**: a fixed catalog of
///   realistic records, stamped with the fetch time where a timestamp
///   applies.
/// - **Performance series**: generated fresh on every fetch, ending at the
///   current calendar month.
///
/// No network, no rate limits, no keys. A live backend replaces this by
/// implementing the same [`DataSource`] trait.
pub struct MockDataSource {
    baseline: f64,
    generator: Mutex<SeriesGenerator>,
}

impl MockDataSource {
    /// Source with the default baseline and an entropy-seeded generator.
    pub fn new() -> Self {
        Self {
            baseline: DashboardSettings::default().performance_baseline,
            generator: Mutex::new(SeriesGenerator::new()),
        }
    }

    /// Source configured from settings. Validates the baseline up front so
    /// a bad configuration fails at construction, not at first fetch.
    pub fn from_settings(settings: &DashboardSettings) -> Result<Self, CoreError> {
        if !settings.performance_baseline.is_finite() || settings.performance_baseline <= 0.0 {
            return Err(CoreError::InvalidArgument(format!(
                "performance baseline must be a positive number, got {}",
                settings.performance_baseline
            )));
        }
        let generator = match settings.series_seed {
            Some(seed) => SeriesGenerator::seeded(seed),
            None => SeriesGenerator::new(),
        };
        Ok(Self {
            baseline: settings.performance_baseline,
            generator: Mutex::new(generator),
        })
    }
}

impl Default for MockDataSource {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl DataSource for MockDataSource {
    fn name(&self) -> &str {
        "Mock"
    }

    async fn get_news(&self) -> Result<Vec<NewsItem>, CoreError> {
        let now = Utc::now();
        Ok(vec![
            NewsItem::new(
                "Tech Stocks Rally as Inflation Concerns Ease",
                "Major tech companies saw significant gains as new economic data \
                 suggests inflation may be cooling, leading investors to...",
                1.8,
                "Financial Times",
                now,
            ),
            NewsItem::new(
                "Federal Reserve Signals Potential Rate Cut",
                "In a surprising move, the Federal Reserve indicated it may consider \
                 rate cuts in the coming months as economic...",
                2.3,
                "Wall Street Journal",
                now,
            ),
            NewsItem::new(
                "Oil Prices Drop Amid Supply Concerns",
                "Crude oil futures fell sharply today as reports of increased \
                 production from major oil-producing nations raised concerns...",
                -1.5,
                "Bloomberg",
                now,
            ),
            NewsItem::new(
                "Retail Sales Exceed Expectations in Q2",
                "Consumer spending showed resilience in the second quarter, with \
                 retail sales figures surpassing analyst expectations by...",
                0.9,
                "CNBC",
                now,
            ),
            NewsItem::new(
                "Cryptocurrency Market Faces Regulatory Scrutiny",
                "Bitcoin and other cryptocurrencies declined as lawmakers proposed \
                 new regulations aimed at increasing transparency and...",
                -2.1,
                "Reuters",
                now,
            ),
        ])
    }

    async fn get_quotes(&self) -> Result<Vec<Quote>, CoreError> {
        Ok(vec![
            Quote::new("AAPL", 182.63, 1.24, 62_300_000),
            Quote::new("MSFT", 337.42, 0.87, 23_100_000),
            Quote::new("GOOGL", 131.86, -0.32, 18_700_000),
            Quote::new("AMZN", 127.74, 2.15, 45_200_000),
        ])
    }

    async fn get_series(&self) -> Result<Vec<TimeSeriesPoint>, CoreError> {
        let mut generator = self
            .generator
            .lock()
            .map_err(|_| CoreError::fetch("series", "series generator lock poisoned"))?;
        generator.generate(Utc::now().month0(), self.baseline)
    }

    async fn get_allocation(&self) -> Result<Vec<SectorWeight>, CoreError> {
        Ok(vec![
            SectorWeight::new("Technology", 28.0),
            SectorWeight::new("Financial Services", 22.0),
            SectorWeight::new("Healthcare", 18.0),
            SectorWeight::new("Consumer Cyclical", 12.0),
            SectorWeight::new("Energy & Utilities", 20.0),
        ])
    }

    async fn get_trends(&self) -> Result<Vec<IndexTrend>, CoreError> {
        Ok(vec![
            IndexTrend::new("NASDAQ", 1.2),
            IndexTrend::new("S&P 500", 0.8),
            IndexTrend::new("DOW", -0.3),
            IndexTrend::new("Russell 2000", 1.5),
        ])
    }

    async fn get_insights(&self) -> Result<Vec<Insight>, CoreError> {
        Ok(vec![
            Insight::new(
                "Tech Sector Outlook",
                "Tech stocks showing resilience despite market pressure with \
                 potential for continued growth.",
                78,
                InsightKind::Outlook,
            ),
            Insight::new(
                "Market Volatility Prediction",
                "Based on recent trends, expect decreased volatility in the \
                 coming weeks.",
                82,
                InsightKind::Volatility,
            ),
            Insight::new(
                "Investment Opportunity",
                "Renewable energy sector shows promising growth potential based \
                 on recent policy changes.",
                85,
                InsightKind::Opportunity,
            ),
        ])
    }
}
