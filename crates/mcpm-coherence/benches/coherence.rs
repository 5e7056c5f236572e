//! MCPM measurement benchmarks
//!
//! - Coherence calculation (scalar and matrix coupling)
//! - Energy integration over growing component sets
//! - Replacement analysis end to end

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use mcpm_coherence::{presets, CoherenceMetric, ReplacementAnalysis};
use mcpm_common::{Coupling, CouplingMatrix, EnergyComponent};
use mcpm_energy::integrate;

fn bench_coherence(c: &mut Criterion) {
    let mut group = c.benchmark_group("coherence");
    let metric = CoherenceMetric::default();

    group.bench_function("scalar", |b| {
        let coupling = Coupling::Scalar(0.5);
        b.iter(|| {
            metric
                .calculate(black_box(10.0), 0.8, 3.0, black_box(&coupling), 2.0)
                .ok()
        });
    });

    for dim in [2usize, 8, 32].iter() {
        group.bench_with_input(BenchmarkId::new("matrix", dim), dim, |b, &dim| {
            let Ok(matrix) = CouplingMatrix::identity(dim).and_then(|m| m.scaled(0.5)) else {
                return;
            };
            let coupling = Coupling::Matrix(matrix);
            b.iter(|| {
                metric
                    .calculate(0.9, 0.85, 0.8, black_box(&coupling), 0.1)
                    .ok()
            });
        });
    }

    group.finish();
}

fn bench_energy_integration(c: &mut Criterion) {
    let mut group = c.benchmark_group("energy");

    for size in [10usize, 100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("integrate", size), size, |b, &size| {
            let components: Vec<EnergyComponent> = (0..size)
                .map(|i| EnergyComponent::new(format!("component-{i}"), i as f64 * 0.1))
                .collect();
            b.iter(|| integrate(black_box(&components)).ok());
        });
    }

    group.finish();
}

fn bench_replacement(c: &mut Criterion) {
    let analysis = ReplacementAnalysis::default();
    let Ok(scenario) = presets::human_vs_robot() else {
        return;
    };
    c.bench_function("replacement/human_vs_robot", |b| {
        b.iter(|| analysis.analyze(black_box(&scenario)).ok());
    });
}

criterion_group!(
    benches,
    bench_coherence,
    bench_energy_integration,
    bench_replacement
);
criterion_main!(benches);
