//! Regression scenarios for single grains on small grids.

use crate::cell::Lookup;
use crate::color::Color;
use crate::grain::GrainId;
use crate::lateral::FixedLateral;
use crate::Grid;

const SAND: Color = Color::rgb(0xc2, 0xb2, 0x80);

/// Grid with a grain at each listed coordinate.
fn grid_with(width: usize, height: usize, grains: &[(i32, i32)]) -> Grid {
    let mut grid = Grid::new(width, height).unwrap();
    for &(x, y) in grains {
        grid.inject(x, y, SAND).unwrap();
    }
    grid
}

fn id_at(grid: &Grid, x: i32, y: i32) -> GrainId {
    grid.get(x, y).unwrap().id()
}

/// Render the grid for failure output: `#` active, `o` settled.
fn dump(grid: &Grid) -> String {
    let mut out = String::new();
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            out.push(match grid.get(x, y) {
                None => '.',
                Some(g) if g.is_active() => '#',
                Some(_) => 'o',
            });
        }
        out.push('\n');
    }
    out
}

#[test]
fn falls_straight_down_even_with_open_diagonals() {
    let grid = grid_with(3, 3, &[(1, 0)]);
    let id = id_at(&grid, 1, 0);

    let next = grid.step(&mut FixedLateral::RIGHT);

    assert_eq!(id_at(&next, 1, 1), id, "\n{}", dump(&next));
    assert_eq!(next.lookup(2, 1), Lookup::Empty);
    assert_eq!(next.lookup(1, 0), Lookup::Empty);
}

#[test]
fn slips_diagonally_in_drawn_direction() {
    let grid = grid_with(3, 3, &[(1, 1), (1, 2)]);
    let id = id_at(&grid, 1, 1);

    let next = grid.step(&mut FixedLateral::RIGHT);

    assert_eq!(id_at(&next, 2, 2), id, "\n{}", dump(&next));
    assert_eq!(next.lookup(1, 1), Lookup::Empty);
}

#[test]
fn slips_to_opposite_diagonal_when_drawn_one_is_blocked() {
    let grid = grid_with(3, 3, &[(1, 1), (1, 2), (2, 2)]);
    let id = id_at(&grid, 1, 1);

    let next = grid.step(&mut FixedLateral::RIGHT);

    assert_eq!(id_at(&next, 0, 2), id, "\n{}", dump(&next));
}

#[test]
fn stays_put_and_active_when_boxed_in() {
    let grid = grid_with(3, 3, &[(1, 1), (1, 2), (2, 2), (0, 2)]);
    let id = id_at(&grid, 1, 1);

    let next = grid.step(&mut FixedLateral::RIGHT);

    let grain = next.get(1, 1).unwrap();
    assert_eq!(grain.id(), id, "\n{}", dump(&next));
    assert!(grain.is_active());
    assert_eq!(grain.age(), 1);
}

#[test]
fn settles_on_reaching_floor() {
    let grid = grid_with(1, 2, &[(0, 0)]);

    let next = grid.step(&mut FixedLateral::RIGHT);

    let grain = next.get(0, 1).unwrap();
    assert!(!grain.is_active(), "\n{}", dump(&next));
}

#[test]
fn settled_grain_ignores_vacancies_below_neighbours() {
    // Grain lands at the floor beside an open diagonal and never slides.
    let grid = grid_with(3, 2, &[(1, 0)]);
    let mut grid = grid.step(&mut FixedLateral::LEFT);
    let id = id_at(&grid, 1, 1);

    for _ in 0..5 {
        grid = grid.step(&mut FixedLateral::LEFT);
    }

    assert_eq!(id_at(&grid, 1, 1), id);
    assert_eq!(grid.grain_count(), 1);
}

/// Column of sand dropped on a 9x9 grid piles into a mound, never losing
/// grains and leaving nothing active once everything has landed.
#[test]
fn column_collapses_into_settled_pile() {
    let mut grid = Grid::new(9, 9).unwrap();
    for y in 0..6 {
        grid.inject(4, y, SAND).unwrap();
    }
    let mut source = crate::lateral::RandomLateral::seeded(11);

    for _ in 0..64 {
        grid = grid.step(&mut source);
        assert_eq!(grid.grain_count(), 6, "\n{}", dump(&grid));
    }

    // Bottom-row grains are settled; anything above rests on another grain.
    let floor = grid.height() as i32 - 1;
    for grain in grid.grains() {
        let (x, y) = grain.position();
        if y == floor {
            assert!(!grain.is_active(), "\n{}", dump(&grid));
        } else {
            assert_eq!(grid.lookup(x, y + 1), Lookup::Occupied, "\n{}", dump(&grid));
        }
    }
}
