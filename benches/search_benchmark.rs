use criterion::{Criterion, criterion_group, criterion_main};
use invsort::prelude::*;
use std::hint::black_box;

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("Binary Search");

    let mut records: Vec<Record> = (0..1_000)
        .map(|i| Record::new(format!("record-{i:04}"), "core", 5))
        .collect();
    bubble_sort_by_name(&mut records);

    group.bench_function("hit", |b| {
        b.iter(|| binary_search_by_name(black_box(&records), black_box("record-0421")))
    });

    group.bench_function("miss", |b| {
        b.iter(|| binary_search_by_name(black_box(&records), black_box("record-9999")))
    });

    // Same search through the session, including the timing harness.
    let mut session = Session::new(records.clone());
    session.sort(SortKey::Name);
    group.bench_function("session (measured)", |b| {
        b.iter(|| session.search(black_box("record-0421")))
    });

    group.finish();
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
