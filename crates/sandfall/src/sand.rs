//! Sand rule: fall straight down, else slip diagonally in the drawn
//! direction, else slip the other way.

use crate::api::SandApi;

/// Outcome of the sand rule for one grain, as an offset from its cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Move {
    Down,
    Diagonal(i32),
    Stay,
}

impl Move {
    #[must_use]
    pub fn offset(self) -> (i32, i32) {
        match self {
            Self::Down => (0, 1),
            Self::Diagonal(dx) => (dx, 1),
            Self::Stay => (0, 0),
        }
    }
}

/// Pick a move from the snapshot alone. `delta_x` is `+1` or `-1`.
#[must_use]
pub fn update_sand(api: &SandApi, delta_x: i32) -> Move {
    if api.lookup(0, 1).is_empty() {
        return Move::Down;
    }
    if api.lookup(delta_x, 1).is_empty() {
        return Move::Diagonal(delta_x);
    }
    if api.lookup(-delta_x, 1).is_empty() {
        return Move::Diagonal(-delta_x);
    }
    Move::Stay
}
