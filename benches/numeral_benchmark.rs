// ============================================================================
// Numeral Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Parse - kanji, mixed and positional input of growing length
// 2. Format - each output style across magnitudes
// 3. Round Trip - format then parse
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use japanese_number::prelude::*;
use std::hint::black_box;

const VALUES: [i128; 4] = [234, 12_345_678, 9_876_543_210_123, 170_141_183_460_469_231];

// ============================================================================
// Parse Benchmarks
// ============================================================================

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for value in VALUES {
        let kanji = format(value);
        let mixed = format_with(value, &FormatOptions::mixed());
        let positional = format_with(value, &FormatOptions::positional());

        group.bench_with_input(BenchmarkId::new("kanji", value), &kanji, |b, text| {
            b.iter(|| black_box(parse(text)))
        });
        group.bench_with_input(BenchmarkId::new("mixed", value), &mixed, |b, text| {
            b.iter(|| black_box(parse(text)))
        });
        group.bench_with_input(
            BenchmarkId::new("positional", value),
            &positional,
            |b, text| b.iter(|| black_box(parse(text))),
        );
    }

    group.finish();
}

// ============================================================================
// Format Benchmarks
// ============================================================================

fn benchmark_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");

    let styles = [
        ("kanji", FormatOptions::default()),
        ("daiji", FormatOptions::formal()),
        ("positional", FormatOptions::positional()),
        ("mixed", FormatOptions::mixed()),
    ];

    for (name, options) in styles.iter() {
        for value in VALUES {
            group.bench_with_input(BenchmarkId::new(*name, value), &value, |b, &value| {
                b.iter(|| black_box(format_with(value, options)))
            });
        }
    }

    group.finish();
}

// ============================================================================
// Round Trip
// ============================================================================

fn benchmark_round_trip(c: &mut Criterion) {
    c.bench_function("round_trip_1000_values", |b| {
        b.iter(|| {
            for v in 0..1000i128 {
                let value = v * 104_729;
                black_box(parse(&format(value)).ok());
            }
        })
    });
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_format,
    benchmark_round_trip
);
criterion_main!(benches);
