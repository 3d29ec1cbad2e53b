use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use sweeper_core::*;

const TIERS: [(&str, Coord2, CellCount); 4] = [
    ("beginner", (9, 9), 10),
    ("intermediate", (16, 16), 40),
    ("expert", (16, 30), 99),
    ("huge", (255, 255), 6000),
];

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for (name, size, mines) in TIERS {
        let config = GameConfig::new(size, mines);
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, &config| {
            b.iter(|| ShuffleGenerator::new(black_box(42)).generate(config));
        });
    }
    group.finish();
}

fn bench_first_open(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_open");
    for (name, size, mines) in TIERS {
        let config = GameConfig::new(size, mines);
        let center = (size.0 / 2, size.1 / 2);
        group.bench_with_input(BenchmarkId::from_parameter(name), &config, |b, &config| {
            b.iter_batched(
                || GameEngine::new(config, Some(7), Settings::default()),
                |mut engine| engine.open_cell(black_box(center)),
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_empty_flood(c: &mut Criterion) {
    let config = GameConfig::new((255, 255), 0);
    c.bench_function("flood_fill_empty_255", |b| {
        b.iter_batched(
            || GameEngine::new(config, Some(1), Settings::default()),
            |mut engine| engine.open_cell(black_box((0, 0))),
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_generate, bench_first_open, bench_empty_flood);
criterion_main!(benches);
