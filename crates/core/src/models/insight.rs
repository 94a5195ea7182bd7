use serde::{Deserialize, Serialize};

/// Category of an AI-generated insight.
/// Determines which icon the frontend renders next to the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsightKind {
    /// Sector or market outlook
    Outlook,
    /// Volatility forecast
    Volatility,
    /// Concrete investment opportunity
    Opportunity,
}

impl std::fmt::Display for InsightKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InsightKind::Outlook => write!(f, "Outlook"),
            InsightKind::Volatility => write!(f, "Volatility"),
            InsightKind::Opportunity => write!(f, "Opportunity"),
        }
    }
}

/// Qualitative band for an insight's confidence score.
/// Drives the color of the confidence chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    /// 80 and above
    High,
    /// 60 to 79
    Moderate,
    /// 40 to 59
    Low,
    /// Below 40
    Weak,
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfidenceLevel::High => write!(f, "High"),
            ConfidenceLevel::Moderate => write!(f, "Moderate"),
            ConfidenceLevel::Low => write!(f, "Low"),
            ConfidenceLevel::Weak => write!(f, "Weak"),
        }
    }
}

/// An AI-generated insight card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    /// Card title (e.g., "Tech Sector Outlook")
    pub title: String,

    /// One-sentence body text
    pub summary: String,

    /// Model confidence in percent, 0 to 100
    pub confidence: u8,

    /// Insight category, picks the card icon
    pub kind: InsightKind,
}

impl Insight {
    pub fn new(
        title: impl Into<String>,
        summary: impl Into<String>,
        confidence: u8,
        kind: InsightKind,
    ) -> Self {
        Self {
            title: title.into(),
            summary: summary.into(),
            confidence: confidence.min(100),
            kind,
        }
    }

    /// Band the raw confidence score for chip coloring.
    #[must_use]
    pub fn confidence_level(&self) -> ConfidenceLevel {
        match self.confidence {
            80..=u8::MAX => ConfidenceLevel::High,
            60..=79 => ConfidenceLevel::Moderate,
            40..=59 => ConfidenceLevel::Low,
            _ => ConfidenceLevel::Weak,
        }
    }
}
