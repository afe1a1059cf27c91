//! Simulation settings supplied by the presentation layer.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::brush::DEFAULT_HUE_STEP;
use crate::error::ConfigError;
use crate::Grid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Side of one grid cell in viewport pixels.
    pub cell_size: u32,
    /// Target ticks per second.
    pub fps: u32,
    /// Brush hue advance per cell, in degrees.
    pub hue_step: f32,
    /// Seed for the lateral slip draw. `None` picks one at startup.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            cell_size: 5,
            fps: 60,
            hue_step: DEFAULT_HUE_STEP,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Parse and validate. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Malformed JSON, unknown fields, or values rejected by
    /// [`validate`](Self::validate).
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Zero `cell_size` or `fps`, or a negative or non-finite `hue_step`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::NotPositive { field: "cell_size" });
        }
        if self.fps == 0 {
            return Err(ConfigError::NotPositive { field: "fps" });
        }
        if !self.hue_step.is_finite() || self.hue_step < 0.0 {
            return Err(ConfigError::HueStep(self.hue_step));
        }
        Ok(())
    }

    /// Grid size that fits a viewport, in whole cells.
    ///
    /// # Errors
    ///
    /// Fails on an invalid config or a viewport smaller than one cell.
    pub fn grid_dimensions(&self, viewport_width: u32, viewport_height: u32) -> Result<(usize, usize), ConfigError> {
        self.validate()?;
        let width = viewport_width / self.cell_size;
        let height = viewport_height / self.cell_size;
        if width == 0 || height == 0 {
            return Err(ConfigError::ViewportTooSmall {
                width: viewport_width,
                height: viewport_height,
                cell_size: self.cell_size,
            });
        }
        Ok((width as usize, height as usize))
    }

    /// Empty grid sized for a viewport.
    ///
    /// # Errors
    ///
    /// See [`grid_dimensions`](Self::grid_dimensions) and [`Grid::new`].
    pub fn grid_for_viewport(&self, viewport_width: u32, viewport_height: u32) -> Result<Grid, ConfigError> {
        let (width, height) = self.grid_dimensions(viewport_width, viewport_height)?;
        Ok(Grid::new(width, height)?)
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.fps.max(1)
    }
}
