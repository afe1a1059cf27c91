//! Benchmark: measure step() cost under various grid conditions.
//!
//! Target: a single step on a 256×256 grid must complete well inside the
//! 16.7 ms frame budget of the 60 Hz reference cadence.
//!
//! Each benchmark uses `iter_batched` to re-seed the grid before every
//! iteration so we measure *active* simulation, not a settled grid.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use sandfall::color::Color;
use sandfall::lateral::RandomLateral;
use sandfall::{Grid, Universe};

const SAND: Color = Color::rgb(0xc2, 0xb2, 0x80);

/// Empty grid — baseline cost of scanning 65K cells with nothing to do.
fn bench_step_empty(c: &mut Criterion) {
    c.bench_function("step_empty_256x256", |b| {
        let grid = Grid::new(256, 256).unwrap();
        let mut lateral = RandomLateral::seeded(1);
        b.iter(|| black_box(grid.step(&mut lateral)));
    });
}

/// Sand falling — top 20% filled so every grain is actively falling.
fn bench_step_sand_falling(c: &mut Criterion) {
    c.bench_function("step_sand_falling_256x256", |b| {
        let mut lateral = RandomLateral::seeded(2);
        b.iter_batched(
            || {
                let mut grid = Grid::new(256, 256).unwrap();
                for y in 0..51 {
                    for x in 0..256 {
                        grid.inject(x, y, SAND);
                    }
                }
                grid
            },
            |grid| black_box(grid.step(&mut lateral)),
            BatchSize::SmallInput,
        );
    });
}

/// Checkerboard resting on a full floor: every grain is blocked below and
/// contends for diagonals, the most expensive path through the rule.
fn bench_step_contended(c: &mut Criterion) {
    c.bench_function("step_contended_256x256", |b| {
        let mut lateral = RandomLateral::seeded(3);
        b.iter_batched(
            || {
                let mut grid = Grid::new(256, 256).unwrap();
                for y in 128..256 {
                    for x in 0..256 {
                        if y == 255 || (x + y) % 2 == 0 {
                            grid.inject(x, y, SAND);
                        }
                    }
                }
                grid
            },
            |grid| black_box(grid.step(&mut lateral)),
            BatchSize::SmallInput,
        );
    });
}

/// Full Universe::tick() plus render buffer — what the browser calls per frame.
fn bench_universe_tick(c: &mut Criterion) {
    c.bench_function("universe_tick_render_256x256", |b| {
        b.iter_batched(
            || {
                let mut universe = Universe::new(256, 256, 4).unwrap();
                for y in 0..256 {
                    universe.drag(0, y, 255, 0);
                }
                universe
            },
            |mut universe| {
                universe.tick();
                black_box(universe.render_buffer());
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_step_empty,
    bench_step_sand_falling,
    bench_step_contended,
    bench_universe_tick,
);
criterion_main!(benches);
