//! Grain entity and its diagnostic identifier.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::color::Color;

static NEXT_GRAIN_ID: AtomicU64 = AtomicU64::new(1);

/// Diagnostic identifier. Unique for the life of the process, never used
/// to order or compare simulation behaviour.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct GrainId(u64);

impl GrainId {
    pub(crate) fn next() -> Self {
        Self(NEXT_GRAIN_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for GrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One particle of sand.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Grain {
    pub(crate) x: i32,
    pub(crate) y: i32,
    color: Color,
    pub(crate) age: u32,
    pub(crate) active: bool,
    id: GrainId,
}

impl Grain {
    /// Fresh active grain with age 0 and a newly allocated id.
    pub(crate) fn spawn(x: i32, y: i32, color: Color) -> Self {
        Self {
            x,
            y,
            color,
            age: 0,
            active: true,
            id: GrainId::next(),
        }
    }

    #[must_use]
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Ticks processed while active.
    #[must_use]
    pub fn age(&self) -> u32 {
        self.age
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn id(&self) -> GrainId {
        self.id
    }
}

impl fmt::Display for Grain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "grain {} at ({}, {}) age {}{}",
            self.id,
            self.x,
            self.y,
            self.age,
            if self.active { "" } else { " settled" }
        )
    }
}
