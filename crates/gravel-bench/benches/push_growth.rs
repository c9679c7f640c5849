//! Criterion micro-benchmarks for append-heavy workloads: growth from
//! empty, pre-reserved pushes, and plain vs droppable element types.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gravel_array::Array;

const N: usize = 10_000;

fn push_growth_plain(c: &mut Criterion) {
    c.bench_function("push_growth_plain_u64", |b| {
        b.iter(|| {
            let mut array: Array<u64> = Array::new();
            for i in 0..N as u64 {
                array.push(black_box(i)).unwrap();
            }
            black_box(array.len())
        })
    });
}

fn push_growth_droppable(c: &mut Criterion) {
    c.bench_function("push_growth_boxed", |b| {
        b.iter(|| {
            let mut array: Array<Box<u64>> = Array::new();
            for i in 0..N as u64 {
                array.push(Box::new(black_box(i))).unwrap();
            }
            black_box(array.len())
        })
    });
}

fn push_prereserved(c: &mut Criterion) {
    c.bench_function("push_prereserved_u64", |b| {
        b.iter(|| {
            let mut array: Array<u64> = Array::with_capacity(N).unwrap();
            for i in 0..N as u64 {
                array.push(black_box(i)).unwrap();
            }
            black_box(array.len())
        })
    });
}

fn push_pop_cycle(c: &mut Criterion) {
    c.bench_function("push_pop_cycle_u64", |b| {
        let mut array: Array<u64> = Array::with_capacity(N).unwrap();
        b.iter(|| {
            for i in 0..1_000u64 {
                array.push(black_box(i)).unwrap();
            }
            for _ in 0..1_000 {
                black_box(array.pop());
            }
        })
    });
}

criterion_group!(
    benches,
    push_growth_plain,
    push_growth_droppable,
    push_prereserved,
    push_pop_cycle,
);
criterion_main!(benches);
