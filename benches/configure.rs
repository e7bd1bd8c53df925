use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use furniture_configurator::camera::OrbitCamera;
use furniture_configurator::configurator::{configure, ConfiguratorSession};
use furniture_configurator::core::{DisplayContext, Raycaster};
use furniture_configurator::pricing::estimate_price;
use furniture_configurator::ranges::dimension_ranges;
use furniture_configurator::types::{ConfigInput, Dimensions, FurnitureType, MaterialKind};

/// Benchmark: full configure pipeline (geometry + surfaces + price) per type
fn bench_configure(c: &mut Criterion) {
    let mut group = c.benchmark_group("configure");

    for furniture_type in FurnitureType::ALL {
        let input = ConfigInput::for_type(furniture_type);
        group.bench_with_input(
            BenchmarkId::new("defaults", furniture_type.name()),
            &input,
            |b, input| b.iter(|| black_box(configure(black_box(input)))),
        );
    }

    group.finish();
}

/// Benchmark: widest kitchen, the type with the most parts
fn bench_largest_kitchen(c: &mut Criterion) {
    let profile = dimension_ranges(FurnitureType::Kitchen);
    let input = ConfigInput {
        dimensions: Dimensions::new(
            profile.width.max,
            profile.height.max,
            profile.depth.max,
        ),
        ..ConfigInput::for_type(FurnitureType::Kitchen)
    };

    c.bench_function("configure_largest_kitchen", |b| {
        b.iter(|| black_box(configure(black_box(&input))))
    });
}

/// Benchmark: price estimation alone
fn bench_estimate_price(c: &mut Criterion) {
    let dims = dimension_ranges(FurnitureType::Closet).defaults();
    c.bench_function("estimate_price", |b| {
        b.iter(|| {
            black_box(estimate_price(
                black_box(FurnitureType::Closet),
                black_box(&dims),
                black_box(MaterialKind::Glass),
            ))
        })
    });
}

/// Benchmark: slider drag, one regeneration per step
fn bench_slider_drag(c: &mut Criterion) {
    c.bench_function("session_width_drag", |b| {
        b.iter(|| {
            let mut session = ConfiguratorSession::new(ConfigInput::for_type(FurnitureType::Closet));
            for width in (100..=300).step_by(10) {
                session.set_width(width as f32);
            }
            black_box(session.revision())
        })
    });
}

/// Benchmark: CPU ray cast at a few viewer resolutions
fn bench_raycast(c: &mut Criterion) {
    let mut group = c.benchmark_group("raycast");
    group.sample_size(10);

    let raycaster = Raycaster::new(&configure(&ConfigInput::for_type(FurnitureType::Kitchen)));
    let camera = OrbitCamera::new();

    for (width, height) in [(160, 120), (400, 300)].iter() {
        let context = DisplayContext::new(*width, *height);
        group.bench_with_input(
            BenchmarkId::new("kitchen", format!("{}x{}", width, height)),
            &context,
            |b, context| b.iter(|| black_box(raycaster.render(&camera, context, 0))),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_configure,
    bench_largest_kitchen,
    bench_estimate_price,
    bench_slider_drag,
    bench_raycast,
);

criterion_main!(benches);
