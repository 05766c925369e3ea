//! IAI-Callgrind benchmark for SortedSet.
//!
//! Measures instruction counts for incremental `add`, bulk construction and
//! the binary-search-driven intersection.

use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use sortedset::SortedSet;
use std::hint::black_box;

fn setup_shuffled_vec_1000() -> Vec<i32> {
    (0..1000).map(|index| (index * 7919) % 1000).collect()
}

fn setup_shuffled_vec_10000() -> Vec<i32> {
    (0..10000).map(|index| (index * 7919) % 10000).collect()
}

fn setup_interleaved_pair_10000() -> (SortedSet<i32>, SortedSet<i32>) {
    (
        SortedSet::from_sorted_vec((0..10000).map(|index| index * 2).collect()),
        SortedSet::from_sorted_vec((0..10000).map(|index| index * 3).collect()),
    )
}

#[library_benchmark]
#[bench::with_setup(setup_shuffled_vec_1000())]
fn add_1000(elements: Vec<i32>) -> SortedSet<i32> {
    let mut set = SortedSet::new();
    set.add(black_box(elements));
    black_box(set)
}

#[library_benchmark]
#[bench::with_setup(setup_shuffled_vec_10000())]
fn add_10000(elements: Vec<i32>) -> SortedSet<i32> {
    let mut set = SortedSet::new();
    set.add(black_box(elements));
    black_box(set)
}

#[library_benchmark]
#[bench::with_setup(setup_shuffled_vec_1000())]
fn from_vec_1000(elements: Vec<i32>) -> SortedSet<i32> {
    black_box(SortedSet::from(black_box(elements)))
}

#[library_benchmark]
#[bench::with_setup(setup_shuffled_vec_10000())]
fn from_vec_10000(elements: Vec<i32>) -> SortedSet<i32> {
    black_box(SortedSet::from(black_box(elements)))
}

#[library_benchmark]
#[bench::with_setup(setup_interleaved_pair_10000())]
fn intersection_10000(pair: (SortedSet<i32>, SortedSet<i32>)) -> SortedSet<i32> {
    let (left, right) = pair;
    let mut result = SortedSet::new();
    result.intersection(black_box(&left), black_box(&right));
    black_box(result)
}

#[library_benchmark]
#[bench::with_setup(setup_interleaved_pair_10000())]
fn intersects_10000(pair: (SortedSet<i32>, SortedSet<i32>)) -> bool {
    let (left, right) = pair;
    black_box(black_box(&left).intersects(black_box(&right)))
}

library_benchmark_group!(
    name = sorted_set_group;
    benchmarks =
        add_1000, add_10000,
        from_vec_1000, from_vec_10000,
        intersection_10000, intersects_10000
);

main!(library_benchmark_groups = sorted_set_group);
