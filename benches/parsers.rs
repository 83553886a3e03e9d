//! Benchmarks for the value parsers.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_yaml::Value;

use cfgval::{
    IntegerParser, ListParser, Location, LocationParser, Parser, PercentageParser, ValueKind,
};

// -- Scalar parsing --

fn bench_scalars(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalars");

    group.bench_function("parse_integer", |b| {
        b.iter(|| IntegerParser.parse_str(black_box("-123456")).unwrap())
    });

    group.bench_function("parse_percentage", |b| {
        b.iter(|| PercentageParser.parse_str(black_box("42.5%")).unwrap())
    });

    group.finish();
}

// -- Location codec --

fn bench_location(c: &mut Criterion) {
    let mut group = c.benchmark_group("location");

    let loc = Location::new("world", -1024, 64, 2048);
    let code = loc.to_code();

    group.bench_function("parse_location", |b| {
        b.iter(|| LocationParser.parse_str(black_box(&code)).unwrap())
    });

    group.bench_function("render_location", |b| {
        b.iter(|| LocationParser.render(black_box(&loc)))
    });

    group.finish();
}

// -- Lists --

fn bench_lists(c: &mut Criterion) {
    let mut group = c.benchmark_group("lists");

    let text: String = format!(
        "[{}]",
        (0..256).map(|n| n.to_string()).collect::<Vec<_>>().join(", ")
    );
    let sequence = Value::Sequence((0..256).map(Value::from).collect());
    let parser = ListParser::new(IntegerParser);

    group.bench_function("parse_list_text_256", |b| {
        b.iter(|| parser.parse_str(black_box(&text)).unwrap())
    });

    group.bench_function("parse_list_sequence_256", |b| {
        b.iter(|| parser.parse(black_box(&sequence)).unwrap())
    });

    let kind: ValueKind = "list<range(0..1000)>".parse().unwrap();
    group.bench_function("parse_kind_list_256", |b| {
        b.iter(|| cfgval::parse(black_box(&kind), black_box(&sequence)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_scalars, bench_location, bench_lists);
criterion_main!(benches);
