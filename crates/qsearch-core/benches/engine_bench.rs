//! Benchmarks for the search core
//!
//! Run with: cargo bench -p qsearch-core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

use qsearch_core::{GroverSearch, HadamardOperator, run_trials};

/// Benchmark Hadamard matrix construction
fn bench_hadamard_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("hadamard_construction");

    for n in &[4usize, 16, 64, 256] {
        group.bench_with_input(BenchmarkId::new("new", n), n, |b, &n| {
            b.iter(|| HadamardOperator::new(black_box(n)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark one full search and a 1000-trial histogram
fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    let search = GroverSearch::for_indices(16, &[8]).unwrap();
    group.bench_function("single_run_16", |b| {
        let mut rng = StdRng::seed_from_u64(0);
        b.iter(|| search.run_with_rng(&mut rng).unwrap());
    });

    group.bench_function("trials_1000_16", |b| {
        let mut rng = StdRng::seed_from_u64(0);
        b.iter(|| run_trials(black_box(&search), 1000, &mut rng).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_hadamard_construction, bench_search);
criterion_main!(benches);
