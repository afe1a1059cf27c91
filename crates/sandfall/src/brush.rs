//! Drag brush: fills the rectangle swept by one drag event with grains,
//! cycling hue from cell to cell.

use crate::color::Color;
use crate::Grid;

/// Hue advance per cell attempt, in degrees.
pub const DEFAULT_HUE_STEP: f32 = 0.005;

const HUE_WRAP: f32 = 360.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brush {
    hue: f32,
    hue_step: f32,
}

impl Default for Brush {
    fn default() -> Self {
        Self::new(DEFAULT_HUE_STEP)
    }
}

impl Brush {
    #[must_use]
    pub fn new(hue_step: f32) -> Self {
        Self { hue: 0.0, hue_step }
    }

    #[must_use]
    pub fn hue(&self) -> f32 {
        self.hue
    }

    /// Color for the next cell, fully saturated at full value.
    #[must_use]
    pub fn color(&self) -> Color {
        Color::from_hsv(self.hue, 1.0, 1.0)
    }

    fn advance(&mut self) {
        self.hue += self.hue_step;
        if self.hue > HUE_WRAP {
            self.hue = 0.0;
        }
    }

    /// Same hue as `n` calls to `advance`, without walking long runs.
    fn advance_by(&mut self, n: u128) {
        if n <= SHORT_RUN {
            for _ in 0..n {
                self.advance();
            }
            return;
        }
        if self.hue_step <= 0.0 {
            return;
        }
        let to_wrap = ((HUE_WRAP - self.hue) / self.hue_step).floor() as u128 + 1;
        self.hue = if n < to_wrap {
            self.hue + n as f32 * self.hue_step
        } else {
            let period = (HUE_WRAP / self.hue_step).floor() as u128 + 1;
            ((n - to_wrap) % period) as f32 * self.hue_step
        };
        if self.hue > HUE_WRAP {
            self.hue = 0.0;
        }
    }

    /// Inject into every cell of the inclusive rectangle from `start` to
    /// `start + delta`, column by column. Cells outside the grid or already
    /// occupied are skipped, but still advance the hue. Returns how many
    /// grains landed.
    pub fn drag(&mut self, grid: &mut Grid, start: (i32, i32), delta: (i32, i32)) -> usize {
        let end = (start.0.saturating_add(delta.0), start.1.saturating_add(delta.1));
        let (x0, x1) = (start.0.min(end.0), start.0.max(end.0));
        let (y0, y1) = (start.1.min(end.1), start.1.max(end.1));
        let column = span(y0, y1);
        let total = span(x0, x1) * column;

        // Grid dimensions fit in i32, see `Grid::new`.
        let (cx0, cx1) = (x0.max(0), x1.min(grid.width() as i32 - 1));
        let (cy0, cy1) = (y0.max(0), y1.min(grid.height() as i32 - 1));
        if cx0 > cx1 || cy0 > cy1 {
            self.advance_by(total);
            return 0;
        }

        let mut placed = 0;
        self.advance_by((span(x0, cx0) - 1) * column);
        for x in cx0..=cx1 {
            self.advance_by(span(y0, cy0) - 1);
            for y in cy0..=cy1 {
                if grid.inject(x, y, self.color()).is_some() {
                    placed += 1;
                }
                self.advance();
            }
            self.advance_by(span(cy1, y1) - 1);
        }
        self.advance_by((span(cx1, x1) - 1) * column);
        log::trace!("drag ({x0}, {y0})..=({x1}, {y1}) placed {placed} grains");
        placed
    }
}

/// Run length below which `advance_by` just steps.
const SHORT_RUN: u128 = 1024;

/// Number of integers in `lo..=hi`, with `lo <= hi`.
fn span(lo: i32, hi: i32) -> u128 {
    (i64::from(hi) - i64::from(lo) + 1) as u128
}
