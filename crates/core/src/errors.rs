use thiserror::Error;

/// Unified error type for the entire market-dashboard-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Data fetching ───────────────────────────────────────────────
    #[error("Fetch failed ({category}): {message}")]
    Fetch {
        category: String,
        message: String,
    },

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ── Snapshot export ─────────────────────────────────────────────
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CoreError {
    /// Shorthand for a category fetch failure.
    pub fn fetch(category: impl Into<String>, message: impl Into<String>) -> Self {
        CoreError::Fetch {
            category: category.into(),
            message: message.into(),
        }
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Serialization(e.to_string())
    }
}
