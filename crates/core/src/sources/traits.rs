use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::allocation::SectorWeight;
use crate::models::chart::TimeSeriesPoint;
use crate::models::insight::Insight;
use crate::models::news::NewsItem;
use crate::models::quote::Quote;
use crate::models::trend::IndexTrend;

/// Trait abstraction for the dashboard's data backend.
///
/// The shipped implementation fabricates data in memory; a future live
/// backend implements the same six operations and the rest of the codebase
/// is untouched. Each operation covers one widget category, so a failure in
/// one never takes down the others.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait DataSource: Send + Sync {
    /// Human-readable name of this source (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch the market news feed.
    async fn get_news(&self) -> Result<Vec<NewsItem>, CoreError>;

    /// Fetch the stock quote table.
    async fn get_quotes(&self) -> Result<Vec<Quote>, CoreError>;

    /// Fetch the portfolio performance series (7 trailing months, ending
    /// at the current month).
    async fn get_series(&self) -> Result<Vec<TimeSeriesPoint>, CoreError>;

    /// Fetch the portfolio allocation by sector.
    async fn get_allocation(&self) -> Result<Vec<SectorWeight>, CoreError>;

    /// Fetch the market index trends.
    async fn get_trends(&self) -> Result<Vec<IndexTrend>, CoreError>;

    /// Fetch the AI insight cards.
    async fn get_insights(&self) -> Result<Vec<Insight>, CoreError>;
}
