use political_space::glam::Vec3;
use political_space::{
    calculate_position, sample_positions, ArrowConfig, AxisAffinities, CubeConfig, CubeGeometry,
    PoliticalAxis, SceneDescription, SpaceConfig, SpaceParams, VectorGeometry,
};

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use std::num::NonZeroU32;

fn bench_position_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("bench_position_grid");

    for step in [50, 20, 10].map(|s| NonZeroU32::new(s).unwrap()) {
        // Collect the inputs once so only the solver is measured.
        let inputs: Vec<(PoliticalAxis, AxisAffinities)> = sample_positions(step)
            .map(|sample| (sample.axis, sample.affinities))
            .collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("positions={}", inputs.len())),
            &inputs,
            |b, inputs| {
                b.iter(|| {
                    for (axis, affinities) in inputs.iter() {
                        black_box(calculate_position(*axis, affinities));
                    }
                });
            },
        );
    }
    group.finish();
}

fn bench_cube(c: &mut Criterion) {
    let config = CubeConfig::default();
    c.bench_function("bench_cube", |b| {
        b.iter(|| CubeGeometry::new(black_box(&config)))
    });
}

fn bench_vector(c: &mut Criterion) {
    let config = ArrowConfig::default();
    let base = Vec3::new(12.0, 40.0, 200.0);
    let target = Vec3::new(230.0, 90.0, 15.0);
    c.bench_function("bench_vector", |b| {
        b.iter(|| VectorGeometry::new(black_box(base), black_box(target), &config))
    });
}

fn bench_scene_from_query(c: &mut Criterion) {
    let query = "title=Me&axis=2&affinities=0.7,0.2,0.35,0.9&vectors[0]=0,0,0&vectors[1]=255,255,255";
    let config = SpaceConfig::default();
    c.bench_function("bench_scene_from_query", |b| {
        b.iter(|| {
            let params = SpaceParams::parse(black_box(query)).unwrap();
            SceneDescription::build(&config, &params).unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_position_grid,
    bench_cube,
    bench_vector,
    bench_scene_from_query
);
criterion_main!(benches);
