//! Benchmarks for chain operations.
//!
//! Compares the arena-backed chain against std's pointer-linked LinkedList
//! and VecDeque for the queue-shaped workload, and measures the O(n) swap.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use forward_chain::OwnedChain;
use rand::prelude::*;
use std::collections::{LinkedList, VecDeque};

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_back_pop_front");

    group.bench_function("owned_chain", |b| {
        let mut chain: OwnedChain<u64> = OwnedChain::with_capacity(1024);
        b.iter(|| {
            chain.push_back(black_box(42));
            black_box(chain.pop_front())
        });
    });

    group.bench_function("std_linked_list", |b| {
        let mut list: LinkedList<u64> = LinkedList::new();
        b.iter(|| {
            list.push_back(black_box(42));
            black_box(list.pop_front())
        });
    });

    group.bench_function("std_vec_deque", |b| {
        let mut deque: VecDeque<u64> = VecDeque::with_capacity(1024);
        b.iter(|| {
            deque.push_back(black_box(42));
            black_box(deque.pop_front())
        });
    });

    group.finish();
}

fn bench_swap(c: &mut Criterion) {
    let mut group = c.benchmark_group("swap");
    let mut rng = StdRng::seed_from_u64(7);

    for len in [16usize, 256, 4096] {
        group.bench_with_input(BenchmarkId::new("random_pair", len), &len, |b, &len| {
            let mut chain: OwnedChain<u64> = (0..len as u64).collect();
            let indices: Vec<_> = (0..len as u64)
                .map(|v| chain.find(&v).unwrap())
                .collect();

            b.iter(|| {
                let a = indices[rng.gen_range(0..len)];
                let x = indices[rng.gen_range(0..len)];
                black_box(chain.swap(a, x))
            });
        });
    }

    group.finish();
}

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");

    for len in [16usize, 256] {
        group.bench_with_input(BenchmarkId::new("owned", len), &len, |b, &len| {
            b.iter(|| {
                let mut left: OwnedChain<u64> = (0..len as u64).collect();
                let right: OwnedChain<u64> = (0..len as u64).collect();
                left.append(right);
                black_box(left.len())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_push_pop, bench_swap, bench_append);
criterion_main!(benches);
