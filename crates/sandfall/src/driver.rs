//! Background tick executor for native hosts.
//!
//! The driver thread owns the cadence: each tick it locks the live grid,
//! computes the next grid from it and swaps it in. Input handlers share the
//! same lock, so injections and resets never interleave with a step and a
//! reader always sees a complete grid. Between ticks the thread parks, so
//! `stop` can wake it immediately.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::brush::Brush;
use crate::color::Color;
use crate::config::SimConfig;
use crate::error::{DriverError, GridError};
use crate::grain::GrainId;
use crate::lateral::RandomLateral;
use crate::Grid;

#[derive(Debug)]
pub struct TickDriver {
    grid: Arc<Mutex<Grid>>,
    brush: Mutex<Brush>,
    running: Arc<AtomicBool>,
    ticks: Arc<AtomicU64>,
    handle: Option<JoinHandle<()>>,
}

fn lock(grid: &Mutex<Grid>) -> MutexGuard<'_, Grid> {
    // A panicking step never leaves a half-built grid behind the lock.
    grid.lock().unwrap_or_else(PoisonError::into_inner)
}

impl TickDriver {
    /// Start ticking `grid` at `config.fps`.
    ///
    /// # Errors
    ///
    /// Fails if the config is invalid or the OS refuses a new thread.
    pub fn spawn(grid: Grid, config: &SimConfig) -> Result<Self, DriverError> {
        config.validate()?;
        let interval = config.tick_interval();
        let lateral = match config.seed {
            Some(seed) => {
                log::info!("tick driver seeded with {seed}");
                RandomLateral::seeded(seed)
            }
            None => RandomLateral::new(SmallRng::from_entropy()),
        };

        let grid = Arc::new(Mutex::new(grid));
        let running = Arc::new(AtomicBool::new(true));
        let ticks = Arc::new(AtomicU64::new(0));

        let handle = {
            let grid = Arc::clone(&grid);
            let running = Arc::clone(&running);
            let ticks = Arc::clone(&ticks);
            thread::Builder::new()
                .name("sandfall-tick".into())
                .spawn(move || run(&grid, &running, &ticks, interval, lateral))?
        };

        log::info!("tick driver started at {} fps", config.fps);
        Ok(Self {
            grid,
            brush: Mutex::new(Brush::new(config.hue_step)),
            running,
            ticks,
            handle: Some(handle),
        })
    }

    /// Completed ticks so far.
    #[must_use]
    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Copy of the grid as of the last completed tick.
    #[must_use]
    pub fn snapshot(&self) -> Grid {
        lock(&self.grid).clone()
    }

    /// Run `f` with exclusive access to the live grid.
    pub fn with_grid<R>(&self, f: impl FnOnce(&mut Grid) -> R) -> R {
        f(&mut *lock(&self.grid))
    }

    pub fn inject(&self, x: i32, y: i32, color: Color) -> Option<GrainId> {
        self.with_grid(|grid| grid.inject(x, y, color))
    }

    /// Apply one drag event with the driver's brush.
    pub fn drag(&self, start: (i32, i32), delta: (i32, i32)) -> usize {
        let mut brush = self.brush.lock().unwrap_or_else(PoisonError::into_inner);
        self.with_grid(|grid| brush.drag(grid, start, delta))
    }

    pub fn reset(&self) {
        self.with_grid(Grid::reset);
    }

    /// Replace the live grid with an empty one of the new size.
    ///
    /// # Errors
    ///
    /// Rejects degenerate dimensions; the current grid is kept.
    pub fn resize(&self, width: usize, height: usize) -> Result<(), GridError> {
        let fresh = Grid::new(width, height)?;
        self.with_grid(|grid| *grid = fresh);
        Ok(())
    }

    /// Halt the tick thread and wait for it. The grid stays readable.
    pub fn stop(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };
        self.running.store(false, Ordering::Release);
        handle.thread().unpark();
        if handle.join().is_err() {
            log::error!("tick thread panicked");
        }
        log::info!("tick driver stopped after {} ticks", self.ticks());
    }
}

impl Drop for TickDriver {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run(
    grid: &Mutex<Grid>,
    running: &AtomicBool,
    ticks: &AtomicU64,
    interval: Duration,
    mut lateral: RandomLateral<SmallRng>,
) {
    while running.load(Ordering::Acquire) {
        let deadline = Instant::now() + interval;
        {
            let mut live = lock(grid);
            let next = live.step(&mut lateral);
            *live = next;
        }
        ticks.fetch_add(1, Ordering::AcqRel);
        park_until(deadline, running);
    }
}

/// Park until `deadline`. Early wakeups park again unless the driver stopped.
fn park_until(deadline: Instant, running: &AtomicBool) {
    while running.load(Ordering::Acquire) {
        let now = Instant::now();
        if now >= deadline {
            return;
        }
        thread::park_timeout(deadline - now);
    }
}
