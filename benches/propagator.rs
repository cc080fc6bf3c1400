//! Benchmarks for the Life propagator.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use image_life::{
    compute::{Grid, LifePropagator, SimulationState, neighbor_count},
    schema::{SeedOp, SeedRng},
};

/// Grid with a few random rows and columns filled, so it keeps evolving.
fn seeded_grid(size: usize) -> Grid {
    let mut grid = Grid::new(size, size);
    let mut rng = SeedRng::new(42);
    for op in [SeedOp::FillRandomRow, SeedOp::FillRandomColumn].repeat(4) {
        op.apply(&mut grid, &mut rng);
    }
    for _ in 0..size * size / 4 {
        SeedOp::SetRandomCellAlive.apply(&mut grid, &mut rng);
    }
    grid
}

fn bench_propagator_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("propagator_step");

    for size in [64, 128, 256, 512, 1024] {
        let mut state = SimulationState::new(seeded_grid(size), u64::MAX);
        let mut propagator = LifePropagator::for_state(&state);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", size, size)),
            &size,
            |b, _| {
                b.iter(|| {
                    // Reseed if the pattern died out.
                    if state.is_terminated() {
                        state.grid = seeded_grid(size);
                    }
                    propagator.step(black_box(&mut state)).unwrap();
                });
            },
        );
    }

    group.finish();
}

fn bench_neighbor_count(c: &mut Criterion) {
    let grid = seeded_grid(256);

    c.bench_function("neighbor_count_full_sweep_256", |b| {
        b.iter(|| {
            let mut total = 0usize;
            for y in 0..grid.height() {
                for x in 0..grid.width() {
                    total += neighbor_count(black_box(&grid), x, y) as usize;
                }
            }
            total
        });
    });
}

criterion_group!(benches, bench_propagator_step, bench_neighbor_count);
criterion_main!(benches);
