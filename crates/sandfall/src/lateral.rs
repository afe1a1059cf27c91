//! Sources for the per-grain lateral slip direction.
//!
//! Every active grain draws a fresh direction each tick. The step is generic
//! over the source so tests can pin the draw.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Yields `+1` or `-1` for each active grain, every tick.
pub trait LateralSource {
    fn next_delta(&mut self) -> i32;
}

/// Uniform coin flip backed by any [`Rng`].
#[derive(Debug, Clone)]
pub struct RandomLateral<R> {
    rng: R,
}

impl<R: Rng> RandomLateral<R> {
    #[must_use]
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomLateral<SmallRng> {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> LateralSource for RandomLateral<R> {
    fn next_delta(&mut self) -> i32 {
        if self.rng.gen_bool(0.5) {
            1
        } else {
            -1
        }
    }
}

/// Always answers the same direction.
#[derive(Debug, Clone, Copy)]
pub struct FixedLateral(i32);

impl FixedLateral {
    pub const RIGHT: Self = Self(1);
    pub const LEFT: Self = Self(-1);
}

impl LateralSource for FixedLateral {
    fn next_delta(&mut self) -> i32 {
        self.0
    }
}

impl<T: LateralSource + ?Sized> LateralSource for &mut T {
    fn next_delta(&mut self) -> i32 {
        (**self).next_delta()
    }
}
