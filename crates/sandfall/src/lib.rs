//! Falling sand simulation engine.

pub mod api;
pub mod brush;
pub mod cell;
pub mod color;
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod driver;
pub mod error;
pub mod grain;
pub mod lateral;
pub mod sand;
pub mod universe;

#[cfg(test)]
mod scenario_test;

use cell::Lookup;
use color::Color;
use error::GridError;
use grain::{Grain, GrainId};
use lateral::LateralSource;
use sand::Move;

pub use universe::Universe;

/// 2D grid of optional grain slots. Out-of-bounds lookups report
/// `OutOfBounds`, out-of-bounds injections are no-ops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Option<Grain>>,
}

impl Grid {
    /// Empty grid. Both dimensions must be positive and every coordinate
    /// must fit in an `i32`.
    ///
    /// # Errors
    ///
    /// [`GridError::ZeroDimension`] or [`GridError::TooLarge`].
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::ZeroDimension { width, height });
        }
        let fits_i32 = i32::try_from(width).is_ok() && i32::try_from(height).is_ok();
        let len = width
            .checked_mul(height)
            .filter(|_| fits_i32)
            .ok_or(GridError::TooLarge { width, height })?;
        log::debug!("created {width}x{height} grid");
        Ok(Self {
            width,
            height,
            cells: vec![None; len],
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.in_bounds(x, y)
            .then(|| y as usize * self.width + x as usize)
    }

    #[must_use]
    pub fn lookup(&self, x: i32, y: i32) -> Lookup {
        match self.index(x, y) {
            None => Lookup::OutOfBounds,
            Some(i) if self.cells[i].is_some() => Lookup::Occupied,
            Some(_) => Lookup::Empty,
        }
    }

    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<&Grain> {
        self.index(x, y).and_then(|i| self.cells[i].as_ref())
    }

    /// Occupied cells in traversal order: columns left to right, each
    /// column top to bottom.
    pub fn grains(&self) -> impl Iterator<Item = &Grain> + '_ {
        (0..self.width).flat_map(move |x| {
            (0..self.height).filter_map(move |y| self.cells[y * self.width + x].as_ref())
        })
    }

    #[must_use]
    pub fn grain_count(&self) -> usize {
        self.cells.iter().flatten().count()
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.cells.iter().flatten().filter(|g| g.is_active()).count()
    }

    /// Place a new grain if the cell is in bounds and vacant. Occupied
    /// cells are never overwritten. Returns the new grain's id.
    pub fn inject(&mut self, x: i32, y: i32, color: Color) -> Option<GrainId> {
        let i = self.index(x, y)?;
        if self.cells[i].is_some() {
            return None;
        }
        let grain = Grain::spawn(x, y, color);
        log::trace!("adding {grain}");
        self.cells[i] = Some(grain);
        Some(grain.id())
    }

    /// Drop every grain, keeping the dimensions.
    pub fn reset(&mut self) {
        self.cells.fill(None);
        log::debug!("reset {}x{} grid", self.width, self.height);
    }

    /// Empty grid with the same dimensions.
    #[must_use]
    pub fn cleared(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            cells: vec![None; self.cells.len()],
        }
    }

    fn place(&mut self, grain: Grain) {
        if let Some(i) = self.index(grain.x, grain.y) {
            debug_assert!(self.cells[i].is_none(), "cell already claimed");
            self.cells[i] = Some(grain);
        }
    }

    /// Advance the simulation by one tick, producing the next grid.
    ///
    /// Every decision reads `self` only, so the order grains are visited
    /// in cannot open or close vacancies mid-step. Straight-down moves and
    /// grains that stay are placed first: their targets are distinct and
    /// were empty or their own cell in `self`. Diagonal slips are placed
    /// after, in visiting order; a slip whose target is already taken stays
    /// at its source, which no other grain can have claimed.
    #[must_use]
    pub fn step<L: LateralSource + ?Sized>(&self, lateral: &mut L) -> Self {
        let mut next = self.cleared();
        let mut slips = Vec::new();

        for grain in self.grains() {
            let mut grain = *grain;
            if !grain.active {
                next.place(grain);
                continue;
            }

            grain.age = grain.age.saturating_add(1);
            let delta_x = lateral.next_delta();
            let api = api::SandApi::new(self, grain.x, grain.y);
            match sand::update_sand(&api, delta_x) {
                Move::Diagonal(dx) => slips.push((grain, dx)),
                Move::Down => {
                    grain.y += 1;
                    next.settle_and_place(grain);
                }
                Move::Stay => next.settle_and_place(grain),
            }
        }

        for (mut grain, dx) in slips {
            if next.lookup(grain.x + dx, grain.y + 1).is_empty() {
                grain.x += dx;
                grain.y += 1;
            }
            next.settle_and_place(grain);
        }

        next
    }

    fn settle_and_place(&mut self, mut grain: Grain) {
        let floor = self.height as i32 - 1;
        if grain.y == floor {
            grain.active = false;
            log::trace!("{grain} reached the floor ({floor})");
        }
        self.place(grain);
    }
}
