//! Error types for grid construction and configuration.

use thiserror::Error;

/// Rejected grid dimensions. No simulation can run on a degenerate grid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },
    #[error("grid of {width}x{height} cells does not fit in memory or i32 coordinates")]
    TooLarge { width: usize, height: usize },
}

/// Failure to load or validate a [`SimConfig`](crate::config::SimConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{field} must be positive")]
    NotPositive { field: &'static str },
    #[error("hue_step must be finite and non-negative, got {0}")]
    HueStep(f32),
    #[error("viewport {width}x{height} is smaller than one {cell_size}px cell")]
    ViewportTooSmall {
        width: u32,
        height: u32,
        cell_size: u32,
    },
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Failure to start the background tick driver.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to spawn tick thread: {0}")]
    Spawn(#[from] std::io::Error),
}
