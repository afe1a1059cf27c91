//! Relative-offset view used by the movement rule.

use crate::cell::Lookup;
use crate::Grid;

/// Read-only window onto the pre-step snapshot, centred on one grain.
/// Out-of-bounds offsets report `Lookup::OutOfBounds`.
#[derive(Debug)]
pub struct SandApi<'a> {
    pub grid: &'a Grid,
    pub x: i32,
    pub y: i32,
}

impl<'a> SandApi<'a> {
    pub fn new(grid: &'a Grid, x: i32, y: i32) -> Self {
        Self { grid, x, y }
    }

    #[must_use]
    pub fn lookup(&self, dx: i32, dy: i32) -> Lookup {
        self.grid.lookup(self.x + dx, self.y + dy)
    }
}
