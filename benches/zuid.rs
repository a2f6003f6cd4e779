//! Throughput of the zUID build, validate and sequencing paths.

use chrono::NaiveDate;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use zuid::{Direction, Generator, build, find_error, get_next, validate, walk};

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    let dt = NaiveDate::from_ymd_opt(1995, 7, 14)
        .and_then(|d| d.and_hms_opt(14, 33, 0))
        .expect("valid timestamp");

    group.bench_function("integer", |b| {
        b.iter(|| build(black_box(199507141431_i64)))
    });
    group.bench_function("padded_text", |b| b.iter(|| build(black_box("2025021409"))));
    group.bench_function("timestamp", |b| b.iter(|| build(black_box(dt))));
    group.finish();
}

fn bench_validate(c: &mut Criterion) {
    c.bench_function("validate_valid", |b| {
        b.iter(|| validate(black_box(202502141151_i64)))
    });
    c.bench_function("find_error_invalid", |b| {
        b.iter(|| find_error(black_box("196913329960")))
    });
}

fn bench_sequence(c: &mut Criterion) {
    c.bench_function("get_next_month_rollover", |b| {
        b.iter(|| get_next(black_box(202502282359_i64)))
    });
    c.bench_function("walk_1440", |b| {
        let start = build(202502280000_i64).expect("valid zUID");
        b.iter(|| walk(start, Direction::Forward).take(1440).count())
    });
    c.bench_function("generator_create_1000", |b| {
        let start = build(202502280000_i64).expect("valid zUID");
        b.iter(|| {
            let mut g = Generator::new();
            for z in walk(start, Direction::Forward).take(1000) {
                black_box(g.create(z));
            }
            g.len()
        })
    });
}

criterion_group!(benches, bench_build, bench_validate, bench_sequence);
criterion_main!(benches);
