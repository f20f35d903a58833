//! Criterion benchmarks for rust_fanout_logger

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_fanout_logger::prelude::*;
use std::io;

fn sink_logger(level: LogLevel, format: OutputFormat) -> Box<dyn Logger> {
    new_logger(SharedWriter::new(io::sink()), level, format)
}

fn fanout_of(n: usize) -> FanoutLogger {
    let formats = [OutputFormat::Json, OutputFormat::Text, OutputFormat::Gelf];
    FanoutLogger::new(
        (0..n)
            .map(|i| sink_logger(LogLevel::Debug, formats[i % formats.len()]))
            .collect(),
    )
}

// ============================================================================
// Backend Benchmarks
// ============================================================================

fn bench_backend_formats(c: &mut Criterion) {
    let mut group = c.benchmark_group("backend_flush");
    group.throughput(Throughput::Elements(1));

    for format in [OutputFormat::Json, OutputFormat::Text, OutputFormat::Gelf] {
        let logger = sink_logger(LogLevel::Debug, format);
        group.bench_with_input(BenchmarkId::from_parameter(format.name()), &logger, |b, logger| {
            b.iter(|| {
                logger
                    .info()
                    .add_str("user", "alice")
                    .add_int("count", black_box(42))
                    .flush(black_box("request handled"))
            });
        });
    }

    group.finish();
}

fn bench_filtered_entry(c: &mut Criterion) {
    let logger = sink_logger(LogLevel::Error, OutputFormat::Json);
    c.bench_function("filtered_entry", |b| {
        b.iter(|| {
            logger
                .debug()
                .add_str("user", "alice")
                .flush(black_box("dropped"))
        });
    });
}

// ============================================================================
// Fan-out Benchmarks
// ============================================================================

fn bench_fanout_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("fanout_flush");

    for n in [1usize, 2, 4, 8] {
        let logger = fanout_of(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &logger, |b, logger| {
            b.iter(|| {
                logger
                    .warn()
                    .add_int("retries", black_box(3))
                    .add_bool("cached", false)
                    .flush(black_box("retry exhausted"))
            });
        });
    }

    group.finish();
}

fn bench_fanout_panic_aggregation(c: &mut Criterion) {
    let logger = fanout_of(4);
    c.bench_function("fanout_panic_aggregation", |b| {
        b.iter(|| black_box(logger.panic().add_str("reason", "x").flush("boom")));
    });
}

fn bench_with_field(c: &mut Criterion) {
    let logger = fanout_of(4);
    c.bench_function("fanout_with_field", |b| {
        b.iter(|| black_box(logger.with_field("request_id", black_box("r-42"))));
    });
}

criterion_group!(
    benches,
    bench_backend_formats,
    bench_filtered_entry,
    bench_fanout_width,
    bench_fanout_panic_aggregation,
    bench_with_field,
);
criterion_main!(benches);
