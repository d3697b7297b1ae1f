//! End-to-end matcher benchmarks.
//!
//! Measures [`Matcher::answer`] — normalisation plus a scoring pass over
//! every stored question — on the builtin dataset and on synthetically
//! grown datasets, since users can extend the table from a file.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `answer` | Hit, miss, and empty-query cost on the builtin dataset |
//! | `scaling` | Answer cost as the dataset grows from 5 to 500 entries |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench matcher_bench
//! open target/criterion/report/index.html
//! ```

use ansa_core::{
    dataset::Dataset,
    matcher::{Matcher, DEFAULT_THRESHOLD},
    types::QaEntry,
};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

fn answer_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("answer");
    let matcher = Matcher::new(Dataset::builtin(), DEFAULT_THRESHOLD);

    group.bench_function("paraphrase_hit", |bench| {
        bench.iter(|| matcher.answer(black_box("What does EVA do?")))
    });

    group.bench_function("unrelated_miss", |bench| {
        bench.iter(|| matcher.answer(black_box("tell me about the weather")))
    });

    group.bench_function("empty_query", |bench| {
        bench.iter(|| matcher.answer(black_box("")))
    });

    group.finish();
}

/// Grow the dataset with distinct synthetic entries behind the builtin five.
fn grown_dataset(total: usize) -> Dataset {
    let mut entries: Vec<QaEntry> = Dataset::builtin().entries().to_vec();
    for i in entries.len()..total {
        entries.push(QaEntry::new(
            format!("What does synthetic automation agent number {i} handle?"),
            format!("Synthetic agent {i} handles workload slice {i}."),
        ));
    }
    Dataset::from_entries(entries).expect("synthetic dataset must be valid")
}

fn scaling_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for size in [5usize, 50, 500] {
        let matcher = Matcher::new(grown_dataset(size), DEFAULT_THRESHOLD);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &matcher, |bench, m| {
            bench.iter(|| m.answer(black_box("What does EVA do?")))
        });
    }

    group.finish();
}

criterion_group!(benches, answer_bench, scaling_bench);
criterion_main!(benches);
