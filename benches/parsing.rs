//! Benchmarks for chatview parsing and viewing operations.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench parsing -- android`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatview::config::OutputConfig;
use chatview::core::output::{to_csv, to_json, to_jsonl, to_text};
use chatview::core::{FilterConfig, apply_filters, group_by_date};
use chatview::parser::{ChatLogParser, normalize_export, parse};

// =============================================================================
// Test Data Generators
// =============================================================================

fn generate_android_txt(count: usize) -> String {
    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        let sender = if i % 2 == 0 { "Alice" } else { "Bob" };
        let day = 1 + (i / 1440) % 28;
        let hour = (i / 60) % 24;
        let minute = i % 60;
        lines.push(format!(
            "{:02}/01/2024, {}:{:02} - {}: Message number {}",
            day, hour, minute, sender, i
        ));
        if i % 10 == 0 {
            lines.push("a continuation line that is skipped".to_string());
        }
    }
    lines.join("\n")
}

fn generate_ios_txt(count: usize) -> String {
    let mut lines = Vec::with_capacity(count);
    for i in 0..count {
        let sender = if i % 2 == 0 { "Alice" } else { "Bob" };
        let day = 1 + (i / 1440) % 28;
        let hour = (i / 60) % 24;
        let (hour12, meridiem) = match hour {
            0 => (12, "AM"),
            1..=11 => (hour, "AM"),
            12 => (12, "PM"),
            _ => (hour - 12, "PM"),
        };
        lines.push(format!(
            "[{:02}/01/2024, {}:{:02}:{:02}\u{202f}{}] {}: Message number {}",
            day,
            hour12,
            i % 60,
            i % 60,
            meridiem,
            sender,
            i
        ));
    }
    lines.join("\r\n")
}

fn generate_mixed_txt(count: usize) -> String {
    format!(
        "{}\n{}",
        generate_android_txt(count / 2),
        normalize_export(&generate_ios_txt(count - count / 2))
    )
}

// =============================================================================
// Parsing Benchmarks
// =============================================================================

fn bench_android_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("android_parsing");

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let txt = generate_android_txt(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                let messages = parse(black_box(txt));
                black_box(messages)
            });
        });
    }
    group.finish();
}

fn bench_ios_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("ios_parsing");
    let parser = ChatLogParser::new();

    for size in [100_usize, 1_000, 10_000, 50_000] {
        let txt = generate_ios_txt(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                let messages = parser.parse_str(black_box(txt));
                black_box(messages)
            });
        });
    }
    group.finish();
}

fn bench_mixed_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed_parsing");

    for size in [1_000_usize, 10_000, 50_000] {
        let txt = generate_mixed_txt(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                let messages = parse(black_box(txt));
                black_box(messages)
            });
        });
    }
    group.finish();
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for size in [1_000_usize, 10_000] {
        let txt = generate_ios_txt(size);
        group.throughput(Throughput::Bytes(txt.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| black_box(normalize_export(black_box(txt)).into_owned()));
        });
    }
    group.finish();
}

// =============================================================================
// Viewing Benchmarks
// =============================================================================

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    for size in [1_000_usize, 10_000, 50_000] {
        let messages = parse(&generate_android_txt(size));
        let config = FilterConfig::new()
            .with_sender("Alice")
            .with_search("NUMBER 1")
            .with_limit(1000);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &messages,
            |b, messages| {
                b.iter(|| {
                    let filtered = apply_filters(black_box(messages.clone()), &config);
                    black_box(filtered)
                });
            },
        );
    }
    group.finish();
}

fn bench_group_by_date(c: &mut Criterion) {
    let mut group = c.benchmark_group("group_by_date");

    for size in [1_000_usize, 10_000] {
        let messages = parse(&generate_android_txt(size));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &messages,
            |b, messages| {
                b.iter(|| black_box(group_by_date(black_box(messages)).len()));
            },
        );
    }
    group.finish();
}

// =============================================================================
// Output Benchmarks
// =============================================================================

fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("output");
    let config = OutputConfig::new().with_display();
    let messages = parse(&generate_android_txt(1_000));

    group.throughput(Throughput::Elements(messages.len() as u64));
    group.bench_function("text", |b| b.iter(|| black_box(to_text(black_box(&messages)))));
    group.bench_function("csv", |b| {
        b.iter(|| black_box(to_csv(black_box(&messages), &config).unwrap()));
    });
    group.bench_function("json", |b| {
        b.iter(|| black_box(to_json(black_box(&messages), &config).unwrap()));
    });
    group.bench_function("jsonl", |b| {
        b.iter(|| black_box(to_jsonl(black_box(&messages), &config).unwrap()));
    });
    group.finish();
}

// =============================================================================
// End-to-End Pipeline Benchmark
// =============================================================================

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    let parser = ChatLogParser::new();
    let filter_config = FilterConfig::new().with_search("message").with_limit(1000);

    for size in [1_000_usize, 10_000, 50_000] {
        let txt = generate_mixed_txt(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &txt, |b, txt| {
            b.iter(|| {
                // Full pipeline: parse -> filter -> text
                let messages = parser.parse_str(black_box(txt));
                let shown = apply_filters(messages, &filter_config);
                black_box(to_text(&shown))
            });
        });
    }
    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_android_parsing,
    bench_ios_parsing,
    bench_mixed_parsing,
    bench_normalize,
    bench_filter,
    bench_group_by_date,
    bench_output,
    bench_full_pipeline,
);

criterion_main!(benches);
