//! # Number Service Benchmarks
//!
//! | Component | Claim |
//! |-----------|-------|
//! | ns-02 merge sort | O(n log n), stable |
//! | ns-02 submit-and-sort | append + filter + sort per request |
//! | ns-03 frequency table | linear in recorded numbers, ranking O(k log k) |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ns_01_submission_store::{InMemorySubmissionStore, MockTimeSource, StoreConfig};
use ns_02_sort_ingest::{merge_sort, RawFilter, SortIngestApi, SortIngestService};
use ns_03_frequency_report::FrequencyTable;
use rand::Rng;
use shared_types::{Number, Submission};
use std::sync::Arc;

fn random_numbers(len: usize, range: i32) -> Vec<Number> {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| Number::from(rng.gen_range(-range..range)))
        .collect()
}

// ============================================================================
// NS-02: Merge Sort
// ============================================================================

fn bench_merge_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("ns-02-merge-sort");

    for size in [100, 1_000, 10_000, 100_000] {
        let input = random_numbers(size, 1_000_000);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("merge_sort", size), &input, |b, input| {
            b.iter(|| black_box(merge_sort(input)))
        });

        group.bench_with_input(BenchmarkId::new("std_sort", size), &input, |b, input| {
            b.iter(|| {
                let mut v = input.clone();
                v.sort();
                black_box(v)
            })
        });
    }

    group.finish();
}

// ============================================================================
// NS-02: Submit and Sort
// ============================================================================

fn bench_submit_and_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("ns-02-submit-and-sort");

    let clock = Arc::new(MockTimeSource::new(0));
    let store = Arc::new(InMemorySubmissionStore::new(StoreConfig::default(), clock));
    let service = SortIngestService::new(store);
    let filter = RawFilter::new(">", Some(Number::from(0)));

    for size in [10, 1_000] {
        let input = random_numbers(size, 1_000);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("unfiltered", size), &input, |b, input| {
            b.iter(|| black_box(service.process(input.clone(), &RawFilter::none())))
        });

        group.bench_with_input(BenchmarkId::new("filtered", size), &input, |b, input| {
            b.iter(|| black_box(service.process(input.clone(), &filter)))
        });
    }

    group.finish();
}

// ============================================================================
// NS-03: Frequency Table
// ============================================================================

fn bench_frequency_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("ns-03-frequency-table");

    for submissions in [100, 1_000, 10_000] {
        let log: Vec<Submission> = (1..=submissions as u64)
            .map(|id| Submission {
                id,
                numbers: random_numbers(20, 500),
                submitted_at: id,
            })
            .collect();
        group.throughput(Throughput::Elements(submissions as u64 * 20));

        group.bench_with_input(BenchmarkId::new("build_and_top_10", submissions), &log, |b, log| {
            b.iter(|| black_box(FrequencyTable::from_submissions(log).top(10)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_merge_sort,
    bench_submit_and_sort,
    bench_frequency_table
);
criterion_main!(benches);
