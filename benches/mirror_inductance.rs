use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use em_mirror::prelude::*;

fn bundle(count: usize) -> ConductorSet {
    // Row of 1 mm wires on a 2.5 mm pitch, centered in the slot.
    let pitch = 2.5e-3;
    let start = -0.5 * pitch * (count as f64 - 1.0);
    ConductorSet::new(
        (0..count)
            .map(|i| Conductor::new(start + pitch * i as f64, 0.0, 1.0e-3))
            .collect(),
    )
}

fn slot(mirror_order: usize) -> BoundaryCondition {
    let domain = Domain::new(-0.02, 0.02, -0.005, 0.005);
    BoundaryCondition::new(BoundaryKind::XY, domain, 2000.0, mirror_order).with_pole_distance(0.1)
}

fn bench_inductance(c: &mut Criterion) {
    let mut group = c.benchmark_group("xy_inductance");
    for order in [1_usize, 4, 8] {
        let solver = MirrorSolver::new(slot(order), bundle(12)).expect("valid slot geometry");
        group.bench_with_input(BenchmarkId::new("mirror_order", order), &solver, |b, s| {
            b.iter(|| s.inductance());
        });
    }
    group.finish();
}

fn bench_field_grid(c: &mut Criterion) {
    let solver = MirrorSolver::new(slot(4), bundle(12)).expect("valid slot geometry");
    let (x, y) = solver.boundary().domain.sample_grid(80, 20);
    let currents = Matrix::from_fn(12, 3, |i, j| ((i + j) % 3) as f64 - 1.0);
    c.bench_function("xy_field_norm_grid", |b| {
        b.iter(|| solver.field_norm_at(&x, &y, &currents).expect("grid lies in the domain"));
    });
}

criterion_group!(benches, bench_inductance, bench_field_grid);
criterion_main!(benches);
