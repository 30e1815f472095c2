use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::hint::black_box;

use bench::{apply_runtime_for_size, default_rng, nearly_sorted_u64_vec, random_u64_vec};
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use min_heap::{DynamicArray, MinHeap, heapsort};
use rand::rngs::StdRng;

const BENCH_SIZES: [usize; 4] = [1024, 16384, 65536, 262144];

fn bench_push_pop(c: &mut Criterion) {
    let mut rng = default_rng();
    let mut group = c.benchmark_group("min_heap/push_pop");

    for &size in &BENCH_SIZES {
        apply_runtime_for_size(&mut group, size);
        let data = random_u64_vec(&mut rng, size);

        group.bench_function(BenchmarkId::new("min_heap", size), |bencher| {
            bencher.iter(|| {
                let mut heap = MinHeap::new();
                for &x in &data {
                    heap.add(x);
                }
                while let Ok(x) = heap.remove_min() {
                    black_box(x);
                }
            })
        });

        group.bench_function(BenchmarkId::new("std_binary_heap", size), |bencher| {
            bencher.iter(|| {
                let mut heap = BinaryHeap::with_capacity(data.len());
                for &x in &data {
                    heap.push(Reverse(x));
                }
                while let Some(Reverse(x)) = heap.pop() {
                    black_box(x);
                }
            })
        });
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut rng = default_rng();
    let mut group = c.benchmark_group("min_heap/build");

    for &size in &BENCH_SIZES {
        apply_runtime_for_size(&mut group, size);
        let source: DynamicArray<u64> = random_u64_vec(&mut rng, size).into();

        group.bench_function(BenchmarkId::new("build_heap", size), |bencher| {
            let mut heap = MinHeap::new();
            bencher.iter(|| {
                heap.build_heap(&source);
                black_box(heap.get_min().ok());
            })
        });

        group.bench_function(BenchmarkId::new("incremental_add", size), |bencher| {
            bencher.iter(|| {
                let heap: MinHeap<u64> = source.iter().copied().collect();
                black_box(heap.get_min().ok().copied());
            })
        });
    }
    group.finish();
}

fn bench_heapsort(c: &mut Criterion) {
    let mut rng = default_rng();
    type GenerateFn = fn(&mut StdRng, usize) -> Vec<u64>;
    let inputs: [(&str, GenerateFn); 2] = [
        ("random_uniform", random_u64_vec),
        ("nearly_sorted_1pct_swaps", nearly_sorted_u64_vec),
    ];

    for (label, generate) in inputs {
        let mut group = c.benchmark_group(format!("heapsort/{label}"));

        for &size in &BENCH_SIZES {
            apply_runtime_for_size(&mut group, size);
            let base = generate(&mut rng, size);

            group.bench_function(BenchmarkId::new("heapsort", size), |bencher| {
                bencher.iter_batched(
                    || DynamicArray::from(base.clone()),
                    |mut arr| {
                        heapsort(&mut arr);
                        black_box(arr)
                    },
                    BatchSize::LargeInput,
                )
            });

            group.bench_function(BenchmarkId::new("std_unstable_desc", size), |bencher| {
                bencher.iter_batched(
                    || base.clone(),
                    |mut data| {
                        data.sort_unstable_by(|a, b| b.cmp(a));
                        black_box(data)
                    },
                    BatchSize::LargeInput,
                )
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_push_pop, bench_build, bench_heapsort);
criterion_main!(benches);
