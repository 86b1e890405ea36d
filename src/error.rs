use thiserror::Error;

/// Errors raised while parsing or validating a [`crate::config::DemoConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("palette must contain at least one color")]
    EmptyPalette,

    #[error("cell size must be positive and finite, got {width}x{height}")]
    InvalidCellSize { width: f64, height: f64 },

    #[error("zoom factor must be positive and finite, got {0}")]
    InvalidZoomFactor(f64),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
