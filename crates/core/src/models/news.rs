use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A market news article shown in the dashboard feed.
///
/// **Important**: favorites reference articles by list position, not by
/// `id`. The `id` exists so the frontend (and any future keyed favorite
/// scheme) can tell articles apart across reloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    /// Unique identifier
    pub id: Uuid,

    /// Headline
    pub title: String,

    /// One-sentence teaser below the headline
    pub summary: String,

    /// Market move associated with the story, in percent (e.g., `1.8` for "+1.8%")
    pub change_pct: f64,

    /// Publisher name (e.g., "Bloomberg", "Reuters")
    pub source: String,

    /// Publication timestamp
    pub published_at: DateTime<Utc>,
}

impl NewsItem {
    pub fn new(
        title: impl Into<String>,
        summary: impl Into<String>,
        change_pct: f64,
        source: impl Into<String>,
        published_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            summary: summary.into(),
            change_pct,
            source: source.into(),
            published_at,
        }
    }

    /// Whether the associated move is a gain (zero counts as positive).
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.change_pct >= 0.0
    }

    /// Signed percent string for chip rendering (e.g., "+1.8%", "-1.5%").
    #[must_use]
    pub fn change_display(&self) -> String {
        if self.change_pct >= 0.0 {
            format!("+{:.1}%", self.change_pct)
        } else {
            format!("{:.1}%", self.change_pct)
        }
    }
}
