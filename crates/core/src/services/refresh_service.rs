use crate::errors::CoreError;
use crate::models::dashboard::DashboardData;
use crate::sources::traits::DataSource;

/// Runs a full load cycle against a data source.
///
/// The six widget categories are independent failure domains: a fetch that
/// fails is logged and lands as an empty collection, and never blocks the
/// other five. `fetch_all` is therefore total — the dashboard always gets
/// a usable bundle back.
pub struct RefreshService;

impl RefreshService {
    pub fn new() -> Self {
        Self
    }

    /// Fetch all six categories concurrently and bundle the results.
    pub async fn fetch_all(&self, source: &dyn DataSource) -> DashboardData {
        let (news, quotes, series, allocation, trends, insights) = futures::join!(
            source.get_news(),
            source.get_quotes(),
            source.get_series(),
            source.get_allocation(),
            source.get_trends(),
            source.get_insights(),
        );

        let name = source.name();
        DashboardData {
            news: absorb(name, "news", news),
            quotes: absorb(name, "quotes", quotes),
            series: absorb(name, "series", series),
            allocation: absorb(name, "allocation", allocation),
            trends: absorb(name, "trends", trends),
            insights: absorb(name, "insights", insights),
        }
    }
}

impl Default for RefreshService {
    fn default() -> Self {
        Self::new()
    }
}

/// Degrade a failed category to an empty collection, keeping the error in
/// the logs only. Fetch failures must never reach the render surface.
fn absorb<T>(source: &str, category: &str, result: Result<Vec<T>, CoreError>) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!("Dropping {} from {}: {}", category, source, e);
            Vec::new()
        }
    }
}
