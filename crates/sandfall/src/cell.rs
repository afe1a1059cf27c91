//! Occupancy classification for grid cells.

use std::fmt;

/// Result of querying a grid coordinate.
///
/// Movement treats `Occupied` and `OutOfBounds` alike (both block), but the
/// distinction keeps lookups testable independently of the grid edges.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Lookup {
    Empty,
    Occupied,
    OutOfBounds,
}

impl Lookup {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }
}

impl fmt::Display for Lookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty"),
            Self::Occupied => write!(f, "Occupied"),
            Self::OutOfBounds => write!(f, "OutOfBounds"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_empty_is_empty() {
        assert!(Lookup::Empty.is_empty());
        assert!(!Lookup::Occupied.is_empty());
        assert!(!Lookup::OutOfBounds.is_empty());
    }

    #[test]
    fn lookup_display() {
        assert_eq!(format!("{}", Lookup::Empty), "Empty");
        assert_eq!(format!("{}", Lookup::OutOfBounds), "OutOfBounds");
    }
}
