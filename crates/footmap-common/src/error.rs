//! Error types for heatmap rendering and persistence.

use thiserror::Error;

/// Result type alias using HeatmapError.
pub type HeatmapResult<T> = Result<T, HeatmapError>;

/// Primary error type for heatmap operations.
#[derive(Debug, Error)]
pub enum HeatmapError {
    // === Input Errors ===
    #[error("Invalid surface dimensions {width}x{height}: both must be positive")]
    InvalidDimension { width: u32, height: u32 },

    #[error("Invalid color gradient: {0}")]
    InvalidGradient(String),

    #[error("Invalid render options: {0}")]
    InvalidOptions(String),

    #[error("Failed to load configuration: {0}")]
    Config(String),

    // === Output Errors ===
    #[error("Image encoding failed: {0}")]
    Encode(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Render task failed: {0}")]
    Task(String),
}

impl HeatmapError {
    /// Whether a caller-side retry could plausibly succeed.
    ///
    /// Input and encoding errors are deterministic, so only filesystem and
    /// task failures qualify.
    pub fn is_retryable(&self) -> bool {
        matches!(self, HeatmapError::Io(_) | HeatmapError::Task(_))
    }
}

impl From<serde_json::Error> for HeatmapError {
    fn from(err: serde_json::Error) -> Self {
        HeatmapError::Config(err.to_string())
    }
}
