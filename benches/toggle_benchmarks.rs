use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lights_out::core::{initialize, is_won, toggle_in_place, BoardConfig, Coord, ToggleRule};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::hint::black_box;

const SIZES: &[usize] = &[5, 32, 256];

pub fn bench_toggle_and_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("toggle_and_check");

    for &size in SIZES {
        for rule in [ToggleRule::SingleCell, ToggleRule::Cross] {
            let config = BoardConfig::new(size, size, 0.25).with_rule(rule);
            let mut grid = initialize(&config, &mut StdRng::seed_from_u64(17)).unwrap();
            let target = Coord::new((size / 2) as i32, (size / 2) as i32);

            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", rule), size),
                &target,
                |b, &target| {
                    b.iter(|| {
                        toggle_in_place(&mut grid, black_box(target), rule);
                        black_box(is_won(&grid))
                    })
                },
            );
        }
    }

    group.finish();
}

pub fn bench_initialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("initialize");

    for &size in SIZES {
        let config = BoardConfig::new(size, size, 0.25);
        let mut rng = StdRng::seed_from_u64(17);
        group.bench_with_input(BenchmarkId::from_parameter(size), &config, |b, config| {
            b.iter(|| initialize(black_box(config), &mut rng).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_toggle_and_check, bench_initialize);
criterion_main!(benches);
