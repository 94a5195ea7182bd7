// ═══════════════════════════════════════════════════════════════════
// Source Tests — MockDataSource catalog and series behavior
// ═══════════════════════════════════════════════════════════════════

use chrono::{Datelike, Utc};

use market_dashboard_core::errors::CoreError;
use market_dashboard_core::models::chart::MONTH_NAMES;
use market_dashboard_core::models::insight::{ConfidenceLevel, InsightKind};
use market_dashboard_core::models::settings::DashboardSettings;
use market_dashboard_core::models::trend::TrendDirection;
use market_dashboard_core::sources::mock::MockDataSource;
use market_dashboard_core::sources::traits::DataSource;

fn seeded_source(seed: u64) -> MockDataSource {
    MockDataSource::from_settings(&DashboardSettings {
        performance_baseline: 1000.0,
        series_seed: Some(seed),
    })
    .unwrap()
}

// ═══════════════════════════════════════════════════════════════════
// News catalog
// ═══════════════════════════════════════════════════════════════════

mod news {
    use super::*;

    #[tokio::test]
    async fn five_articles() {
        let source = MockDataSource::new();
        let news = source.get_news().await.unwrap();
        assert_eq!(news.len(), 5);
    }

    #[tokio::test]
    async fn headlines_and_sources() {
        let source = MockDataSource::new();
        let news = source.get_news().await.unwrap();

        assert_eq!(news[0].title, "Tech Stocks Rally as Inflation Concerns Ease");
        assert_eq!(news[0].source, "Financial Times");
        assert_eq!(news[1].title, "Federal Reserve Signals Potential Rate Cut");
        assert_eq!(news[1].source, "Wall Street Journal");
        assert_eq!(news[2].title, "Oil Prices Drop Amid Supply Concerns");
        assert_eq!(news[2].source, "Bloomberg");
        assert_eq!(news[3].title, "Retail Sales Exceed Expectations in Q2");
        assert_eq!(news[3].source, "CNBC");
        assert_eq!(news[4].title, "Cryptocurrency Market Faces Regulatory Scrutiny");
        assert_eq!(news[4].source, "Reuters");
    }

    #[tokio::test]
    async fn changes_and_signs() {
        let source = MockDataSource::new();
        let news = source.get_news().await.unwrap();

        let changes: Vec<f64> = news.iter().map(|n| n.change_pct).collect();
        assert_eq!(changes, vec![1.8, 2.3, -1.5, 0.9, -2.1]);

        assert!(news[0].is_positive());
        assert!(!news[2].is_positive());
        assert_eq!(news[0].change_display(), "+1.8%");
        assert_eq!(news[4].change_display(), "-2.1%");
    }

    #[tokio::test]
    async fn articles_share_one_fetch_timestamp() {
        let source = MockDataSource::new();
        let news = source.get_news().await.unwrap();
        let first = news[0].published_at;
        assert!(news.iter().all(|n| n.published_at == first));
        assert!(first <= Utc::now());
    }

    #[tokio::test]
    async fn ids_are_fresh_per_fetch() {
        let source = MockDataSource::new();
        let a = source.get_news().await.unwrap();
        let b = source.get_news().await.unwrap();
        assert_ne!(a[0].id, b[0].id);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Quote catalog
// ═══════════════════════════════════════════════════════════════════

mod quotes {
    use super::*;

    #[tokio::test]
    async fn four_symbols() {
        let source = MockDataSource::new();
        let quotes = source.get_quotes().await.unwrap();
        let symbols: Vec<&str> = quotes.iter().map(|q| q.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["AAPL", "MSFT", "GOOGL", "AMZN"]);
    }

    #[tokio::test]
    async fn prices_and_changes() {
        let source = MockDataSource::new();
        let quotes = source.get_quotes().await.unwrap();

        assert_eq!(quotes[0].price, 182.63);
        assert_eq!(quotes[0].change_display(), "+1.24%");
        assert_eq!(quotes[1].price, 337.42);
        assert_eq!(quotes[1].change_display(), "+0.87%");
        assert_eq!(quotes[2].price, 131.86);
        assert_eq!(quotes[2].change_display(), "-0.32%");
        assert_eq!(quotes[3].price, 127.74);
        assert_eq!(quotes[3].change_display(), "+2.15%");
    }

    #[tokio::test]
    async fn volumes_render_compact() {
        let source = MockDataSource::new();
        let quotes = source.get_quotes().await.unwrap();
        let volumes: Vec<String> = quotes.iter().map(|q| q.volume_display()).collect();
        assert_eq!(volumes, vec!["62.3M", "23.1M", "18.7M", "45.2M"]);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Allocation / trends / insights catalogs
// ═══════════════════════════════════════════════════════════════════

mod widgets {
    use super::*;

    #[tokio::test]
    async fn allocation_sums_to_one_hundred() {
        let source = MockDataSource::new();
        let allocation = source.get_allocation().await.unwrap();
        let total: f64 = allocation.iter().map(|w| w.weight_pct).sum();
        assert_eq!(total, 100.0);
    }

    #[tokio::test]
    async fn allocation_sectors() {
        let source = MockDataSource::new();
        let allocation = source.get_allocation().await.unwrap();
        let sectors: Vec<&str> = allocation.iter().map(|w| w.sector.as_str()).collect();
        assert_eq!(
            sectors,
            vec![
                "Technology",
                "Financial Services",
                "Healthcare",
                "Consumer Cyclical",
                "Energy & Utilities"
            ]
        );
        assert_eq!(allocation[0].weight_pct, 28.0);
    }

    #[tokio::test]
    async fn trends_directions() {
        let source = MockDataSource::new();
        let trends = source.get_trends().await.unwrap();
        assert_eq!(trends.len(), 4);

        assert_eq!(trends[0].name, "NASDAQ");
        assert_eq!(trends[0].direction, TrendDirection::Up);
        assert_eq!(trends[2].name, "DOW");
        assert_eq!(trends[2].direction, TrendDirection::Down);
        assert_eq!(trends[2].change_display(), "-0.3%");
        assert_eq!(trends[3].name, "Russell 2000");
        assert_eq!(trends[3].change_display(), "+1.5%");
    }

    #[tokio::test]
    async fn insights_kinds_and_confidence() {
        let source = MockDataSource::new();
        let insights = source.get_insights().await.unwrap();
        assert_eq!(insights.len(), 3);

        assert_eq!(insights[0].title, "Tech Sector Outlook");
        assert_eq!(insights[0].confidence, 78);
        assert_eq!(insights[0].kind, InsightKind::Outlook);
        assert_eq!(insights[0].confidence_level(), ConfidenceLevel::Moderate);

        assert_eq!(insights[1].title, "Market Volatility Prediction");
        assert_eq!(insights[1].confidence, 82);
        assert_eq!(insights[1].kind, InsightKind::Volatility);
        assert_eq!(insights[1].confidence_level(), ConfidenceLevel::High);

        assert_eq!(insights[2].title, "Investment Opportunity");
        assert_eq!(insights[2].confidence, 85);
        assert_eq!(insights[2].kind, InsightKind::Opportunity);
        assert_eq!(insights[2].confidence_level(), ConfidenceLevel::High);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Performance series
// ═══════════════════════════════════════════════════════════════════

mod series {
    use super::*;

    #[tokio::test]
    async fn seven_points_ending_at_current_month() {
        let source = MockDataSource::new();
        let series = source.get_series().await.unwrap();
        assert_eq!(series.len(), 7);

        let current = Utc::now().month0() as usize;
        assert_eq!(series[6].label, MONTH_NAMES[current]);
    }

    #[tokio::test]
    async fn default_baseline_is_one_thousand() {
        let source = MockDataSource::new();
        let series = source.get_series().await.unwrap();
        assert_eq!(series[0].value, 1000.0);
        assert_eq!(series[0].period_return, 0.0);
    }

    #[tokio::test]
    async fn configured_baseline_is_respected() {
        let source = MockDataSource::from_settings(&DashboardSettings {
            performance_baseline: 500.0,
            series_seed: None,
        })
        .unwrap();
        let series = source.get_series().await.unwrap();
        assert_eq!(series[0].value, 500.0);
    }

    #[tokio::test]
    async fn same_seed_gives_identical_series() {
        let a = seeded_source(42).get_series().await.unwrap();
        let b = seeded_source(42).get_series().await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn consecutive_fetches_advance_the_stream() {
        let source = seeded_source(42);
        let first: Vec<f64> = source.get_series().await.unwrap().iter().map(|p| p.value).collect();
        let second: Vec<f64> = source.get_series().await.unwrap().iter().map(|p| p.value).collect();
        assert_ne!(first, second);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Construction / validation
// ═══════════════════════════════════════════════════════════════════

mod construction {
    use super::*;

    #[test]
    fn name_is_mock() {
        let source = MockDataSource::new();
        assert_eq!(source.name(), "Mock");
    }

    #[test]
    fn default_matches_new() {
        let source = MockDataSource::default();
        assert_eq!(source.name(), "Mock");
    }

    #[test]
    fn zero_baseline_is_rejected() {
        let result = MockDataSource::from_settings(&DashboardSettings {
            performance_baseline: 0.0,
            series_seed: None,
        });
        match result {
            Err(CoreError::InvalidArgument(msg)) => assert!(msg.contains("baseline")),
            Err(other) => panic!("Expected InvalidArgument, got {:?}", other),
            Ok(_) => panic!("Expected an error"),
        }
    }

    #[test]
    fn negative_baseline_is_rejected() {
        let result = MockDataSource::from_settings(&DashboardSettings {
            performance_baseline: -1000.0,
            series_seed: None,
        });
        assert!(result.is_err());
    }

    #[test]
    fn nan_baseline_is_rejected() {
        let result = MockDataSource::from_settings(&DashboardSettings {
            performance_baseline: f64::NAN,
            series_seed: None,
        });
        assert!(result.is_err());
    }

    #[test]
    fn source_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MockDataSource>();
    }
}
