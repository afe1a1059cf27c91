//! Browser-facing facade. The host calls `tick` on its own frame cadence
//! and reads `render_buffer` to draw.

use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;

use crate::brush::Brush;
use crate::color::Color;
use crate::config::SimConfig;
use crate::lateral::RandomLateral;
use crate::Grid;

/// Words per occupied cell in [`Universe::render_buffer`]: x, y, rgba.
pub const RENDER_STRIDE: usize = 3;

#[wasm_bindgen]
#[derive(Debug)]
pub struct Universe {
    grid: Grid,
    lateral: RandomLateral<SmallRng>,
    brush: Brush,
    generation: u32,
}

impl Universe {
    #[must_use]
    pub fn from_grid(grid: Grid, seed: u64, hue_step: f32) -> Self {
        Self {
            grid,
            lateral: RandomLateral::seeded(seed),
            brush: Brush::new(hue_step),
            generation: 0,
        }
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

#[wasm_bindgen]
impl Universe {
    /// # Errors
    ///
    /// Zero or oversized dimensions.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, seed: u64) -> Result<Universe, JsError> {
        let grid = Grid::new(width as usize, height as usize)?;
        Ok(Self::from_grid(grid, seed, crate::brush::DEFAULT_HUE_STEP))
    }

    /// Build from a JSON [`SimConfig`] and the viewport size in pixels.
    ///
    /// # Errors
    ///
    /// Invalid config or a viewport smaller than one cell.
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(config_json: &str, viewport_width: u32, viewport_height: u32) -> Result<Universe, JsError> {
        let config = SimConfig::from_json(config_json)?;
        let grid = config.grid_for_viewport(viewport_width, viewport_height)?;
        Ok(Self::from_grid(grid, config.seed.unwrap_or(0), config.hue_step))
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.grid.width() as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.grid.height() as u32
    }

    #[must_use]
    pub fn generation(&self) -> u32 {
        self.generation
    }

    #[wasm_bindgen(js_name = grainCount)]
    #[must_use]
    pub fn grain_count(&self) -> u32 {
        self.grid.grain_count() as u32
    }

    pub fn tick(&mut self) {
        self.grid = self.grid.step(&mut self.lateral);
        self.generation = self.generation.wrapping_add(1);
    }

    /// Add one grain of a packed `0xRRGGBBAA` color. Returns whether it landed.
    pub fn inject(&mut self, x: i32, y: i32, rgba: u32) -> bool {
        self.grid.inject(x, y, Color::from_rgba_u32(rgba)).is_some()
    }

    /// One drag event in grid coordinates. Returns how many grains landed.
    pub fn drag(&mut self, x: i32, y: i32, dx: i32, dy: i32) -> u32 {
        self.brush.drag(&mut self.grid, (x, y), (dx, dy)) as u32
    }

    pub fn reset(&mut self) {
        self.grid.reset();
    }

    /// Swap in an empty grid of the new size.
    ///
    /// # Errors
    ///
    /// Zero or oversized dimensions; the current grid is kept.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), JsError> {
        self.grid = Grid::new(width as usize, height as usize)?;
        log::debug!("resized universe to {width}x{height}");
        Ok(())
    }

    /// Flat `[x, y, rgba, x, y, rgba, ...]` for every occupied cell.
    #[wasm_bindgen(js_name = renderBuffer)]
    #[must_use]
    pub fn render_buffer(&self) -> Vec<u32> {
        let mut buffer = Vec::with_capacity(self.grid.grain_count() * RENDER_STRIDE);
        for grain in self.grid.grains() {
            let (x, y) = grain.position();
            buffer.extend_from_slice(&[x as u32, y as u32, grain.color().to_rgba_u32()]);
        }
        buffer
    }
}
