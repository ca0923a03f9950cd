//! Region resolution benchmark: Measure bootstrap and add_region cost.
//!
//! Resolution is a handful of float ops plus three map lookups; a full
//! screenful of regions should resolve in well under a frame.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use regionry::{DisplayMetrics, Horizontal, Padding, RegionRegistry, RegionSpec, Vertical};

fn test_metrics() -> DisplayMetrics {
    DisplayMetrics::new(320.0, 480.0, 640.0, 960.0).with_status_bar(20.0)
}

fn bench_bootstrap(c: &mut Criterion) {
    let metrics = test_metrics();
    c.bench_function("registry_bootstrap", |b| {
        b.iter(|| RegionRegistry::new(black_box(&metrics)).unwrap())
    });
}

fn bench_add_region_chain(c: &mut Criterion) {
    let metrics = test_metrics();
    c.bench_function("add_region_chain_100", |b| {
        b.iter(|| {
            let mut reg = RegionRegistry::new(black_box(&metrics)).unwrap();
            let mut previous = "stage".to_owned();
            for i in 0..100 {
                let id = format!("r{i}");
                reg.add_region(
                    &RegionSpec::new(&id)
                        .size_to(&previous)
                        .width(99.0)
                        .height(99.0)
                        .horizontal(Horizontal::Left)
                        .vertical(Vertical::Top)
                        .padding(Padding {
                            top: 0.5,
                            left: 0.5,
                            ..Padding::default()
                        }),
                )
                .unwrap();
                previous = id;
            }
            reg
        })
    });
}

fn bench_add_region_flat(c: &mut Criterion) {
    let metrics = test_metrics();
    let specs: Vec<RegionSpec> = (0..100)
        .map(|i| {
            RegionSpec::new(format!("cell{i}"))
                .width(10.0)
                .height(10.0)
        })
        .collect();
    c.bench_function("add_region_flat_100", |b| {
        b.iter(|| {
            let mut reg = RegionRegistry::new(&metrics).unwrap();
            for spec in &specs {
                reg.add_region(black_box(spec)).unwrap();
            }
            reg
        })
    });
}

criterion_group!(
    benches,
    bench_bootstrap,
    bench_add_region_chain,
    bench_add_region_flat
);
criterion_main!(benches);
