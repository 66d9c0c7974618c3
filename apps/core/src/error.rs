use thiserror::Error;

/// Everything that can stop a heatmap from being built.
#[derive(Debug, Error)]
pub enum HeatmapError {
    #[error("dataset is not valid JSON of the expected shape: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("invalid base temperature: {0}")]
    InvalidBaseTemperature(f64),

    #[error("insufficient data: {0}")]
    InsufficientData(&'static str),

    #[error("invalid canvas geometry: {0}")]
    InvalidGeometry(String),
}

pub type Result<T, E = HeatmapError> = std::result::Result<T, E>;
