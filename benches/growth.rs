//! Benchmarks comparing [`LinearSequence`] growth against [`Vec`] and [`VecDeque`].
//!
//! Run with: cargo bench

use std::collections::VecDeque;

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use linear_sequence::sequence::LinearSequence;

const COUNT: usize = 100_000;

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");
    group.throughput(Throughput::Elements(COUNT as u64));

    group.bench_function("linear-sequence", |b| {
        b.iter(|| {
            let mut seq = LinearSequence::new();
            for i in 0..COUNT as u64 {
                seq.append(black_box(i)).unwrap();
            }
            seq
        });
    });

    group.bench_function("vec", |b| {
        b.iter(|| {
            let mut vec = Vec::new();
            for i in 0..COUNT as u64 {
                vec.push(black_box(i));
            }
            vec
        });
    });

    group.bench_function("vec-deque", |b| {
        b.iter(|| {
            let mut deque = VecDeque::new();
            for i in 0..COUNT as u64 {
                deque.push_back(black_box(i));
            }
            deque
        });
    });

    group.finish();
}

fn bench_prepend(c: &mut Criterion) {
    let mut group = c.benchmark_group("prepend");
    group.throughput(Throughput::Elements(COUNT as u64));

    group.bench_function("linear-sequence", |b| {
        b.iter(|| {
            let mut seq = LinearSequence::new();
            for i in 0..COUNT as u64 {
                seq.prepend(black_box(i)).unwrap();
            }
            seq
        });
    });

    // Vec has no cheap front insertion; this is the O(n^2) baseline a double-ended
    // layout avoids. Kept small enough to finish.
    group.bench_function("vec", |b| {
        b.iter(|| {
            let mut vec = Vec::new();
            for i in 0..(COUNT / 100) as u64 {
                vec.insert(0, black_box(i));
            }
            vec
        });
    });

    group.bench_function("vec-deque", |b| {
        b.iter(|| {
            let mut deque = VecDeque::new();
            for i in 0..COUNT as u64 {
                deque.push_front(black_box(i));
            }
            deque
        });
    });

    group.finish();
}

fn bench_insert_middle(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_middle");
    group.throughput(Throughput::Elements((COUNT / 100) as u64));

    group.bench_function("linear-sequence", |b| {
        b.iter(|| {
            let mut seq = LinearSequence::new();
            for i in 0..(COUNT / 100) as u64 {
                let middle = seq.len() / 2;
                seq.insert(middle, black_box(i)).unwrap();
            }
            seq
        });
    });

    group.bench_function("vec", |b| {
        b.iter(|| {
            let mut vec = Vec::new();
            for i in 0..(COUNT / 100) as u64 {
                let middle = vec.len() / 2;
                vec.insert(middle, black_box(i));
            }
            vec
        });
    });

    group.finish();
}

fn bench_bulk_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_insert");
    group.throughput(Throughput::Elements(COUNT as u64));

    group.bench_function("linear-sequence/insert_all", |b| {
        b.iter(|| {
            let mut seq: LinearSequence<_> = (0..1_000u64).collect();
            seq.insert_all(500, (0..COUNT).map(|i| i as u64)).unwrap();
            seq
        });
    });

    group.bench_function("vec/splice", |b| {
        b.iter(|| {
            let mut vec: Vec<_> = (0..1_000u64).collect();
            vec.splice(500..500, 0..COUNT as u64).for_each(drop);
            vec
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_append,
    bench_prepend,
    bench_insert_middle,
    bench_bulk_insert
);
criterion_main!(benches);
