/// Performance benchmarks for percolation simulation
///
/// Run with: cargo bench
///
/// Tracks the cost of a full Monte Carlo trial across grid sizes and the raw
/// union-find merge throughput, to detect regressions in the connectivity
/// structure.
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use percolate::percolation::Percolation;
use percolate::stats::run_trial;
use percolate::union_find::UnionFind;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Benchmark: one complete trial (open random sites until percolation)
fn bench_full_trial(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_trial");

    for size in [16usize, 64, 128].iter() {
        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &n| {
            let mut seed = 0u64;
            b.iter(|| {
                seed += 1;
                let mut rng = StdRng::seed_from_u64(seed);
                black_box(run_trial(n, &mut rng).unwrap())
            });
        });
    }

    group.finish();
}

/// Benchmark: opening every site of a grid in row-major order
fn bench_open_all_sites(c: &mut Criterion) {
    let mut group = c.benchmark_group("open_all_sites");

    for size in [32usize, 128].iter() {
        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &n| {
            b.iter(|| {
                let mut grid = Percolation::new(n).unwrap();
                for row in 1..=n {
                    for col in 1..=n {
                        grid.open(row, col).unwrap();
                    }
                }
                black_box(grid.percolates().unwrap())
            });
        });
    }

    group.finish();
}

/// Benchmark: raw union throughput on a chain merge
fn bench_union_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("union_chain");

    for size in [1_000usize, 100_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &m| {
            b.iter(|| {
                let mut uf = UnionFind::new(m).unwrap();
                for i in 1..m {
                    uf.union(i - 1, i).unwrap();
                }
                black_box(uf.connected(0, m - 1).unwrap())
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_full_trial,
    bench_open_all_sites,
    bench_union_chain
);
criterion_main!(benches);
