//! Estimation and export benchmarks.
//!
//! Run with: `cargo bench --package washquote-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use std::io::sink;
use washquote_bench::{benchmark_jobs, sample_reports};
use washquote_lib::{CsvFormatter, Estimator, JsonFormatter, ReportFormatter};

fn estimate_benchmark(c: &mut Criterion) {
    let estimator = Estimator::global();
    let mut group = c.benchmark_group("estimate");

    for bench in benchmark_jobs() {
        group.bench_with_input(BenchmarkId::from_parameter(bench.name), &bench.job, |b, job| {
            b.iter(|| estimator.estimate(black_box(job)));
        });
    }

    group.finish();
}

fn export_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("export");

    for count in [1_usize, 100, 1_000] {
        let reports = sample_reports(count);
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("csv", count), &reports, |b, reports| {
            let formatter = CsvFormatter::new();
            b.iter(|| formatter.write_reports(black_box(reports), sink()));
        });
        group.bench_with_input(BenchmarkId::new("ndjson", count), &reports, |b, reports| {
            let formatter = JsonFormatter::ndjson();
            b.iter(|| formatter.write_reports(black_box(reports), sink()));
        });
    }

    group.finish();
}

criterion_group!(benches, estimate_benchmark, export_benchmark);
criterion_main!(benches);
