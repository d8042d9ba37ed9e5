//! Throughput benchmarks for the order-statistics structures
//!
//! ## Running
//!
//! ```bash
//! cargo bench --bench order_stats
//! cargo bench --bench order_stats -- top_k   # one group only
//! ```
//!
//! Inputs come from a seeded LCG so runs are reproducible.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_order_statistics::dual::DualPriorityQueue;
use rust_order_statistics::kmerge::merge_sorted;
use rust_order_statistics::median::RunningMedian;
use rust_order_statistics::top_k::top_k;
use rust_order_statistics::validate::is_min_heap;
use rust_order_statistics::MinHeap;

/// Linear congruential generator for reproducible random numbers
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }

    fn values(&mut self, n: usize) -> Vec<i32> {
        (0..n).map(|_| (self.next() >> 33) as i32).collect()
    }
}

const SIZES: [usize; 3] = [1 << 10, 1 << 14, 1 << 18];

fn benchmark_top_k(c: &mut Criterion) {
    let mut group = c.benchmark_group("top_k");
    for &n in &SIZES {
        let values = Lcg::new(42).values(n);
        for k in [10usize, 1000] {
            group.bench_with_input(BenchmarkId::new(format!("k{}", k), n), &values, |b, v| {
                b.iter(|| black_box(top_k(v.iter().copied(), k)));
            });
        }
    }
    group.finish();
}

fn benchmark_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_sorted");
    for &n in &SIZES {
        let mut rng = Lcg::new(7);
        let lists: Vec<Vec<i32>> = (0..16)
            .map(|_| {
                let mut list = rng.values(n / 16);
                list.sort_unstable();
                list
            })
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &lists, |b, lists| {
            b.iter(|| black_box(merge_sorted(lists)));
        });
    }
    group.finish();
}

fn benchmark_dual_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("dual_queue");
    for &n in &SIZES {
        let values = Lcg::new(99).values(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, v| {
            b.iter(|| {
                let mut queue = DualPriorityQueue::new();
                queue.extend(v.iter().copied());
                let mut acc = 0i64;
                while let Some(max) = queue.remove_max() {
                    acc += i64::from(max);
                    if let Some(min) = queue.remove_min() {
                        acc -= i64::from(min);
                    }
                }
                black_box(acc)
            });
        });
    }
    group.finish();
}

fn benchmark_running_median(c: &mut Criterion) {
    let mut group = c.benchmark_group("running_median");
    for &n in &SIZES {
        let values = Lcg::new(3).values(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &values, |b, v| {
            b.iter(|| {
                let mut median = RunningMedian::new();
                for &x in v {
                    median.add_num(x);
                }
                black_box(median.find_median())
            });
        });
    }
    group.finish();
}

fn benchmark_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_min_heap");
    for &n in &SIZES {
        let heap = MinHeap::from_vec(Lcg::new(5).values(n));
        let array = heap.into_vec();
        group.bench_with_input(BenchmarkId::from_parameter(n), &array, |b, a| {
            b.iter(|| black_box(is_min_heap(a)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_top_k,
    benchmark_merge,
    benchmark_dual_queue,
    benchmark_running_median,
    benchmark_validate
);
criterion_main!(benches);
