use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use vehicle_form::render::{SvgRenderOptions, render_svg_sync};
use vehicle_form::{Engine, Mulberry32, Seed, VehicleDescriptor};

fn fixtures() -> Vec<(&'static str, VehicleDescriptor)> {
    vec![
        (
            "sedan",
            VehicleDescriptor::new("Toyota", "Camry", "2022", "Sedan", "Car"),
        ),
        (
            "truck",
            VehicleDescriptor::new("Ford", "F-150", "2020", "Pickup", "Truck"),
        ),
        (
            "suv",
            VehicleDescriptor::new(
                "Honda",
                "CR-V",
                "2019",
                "Sport Utility Vehicle (SUV)/Multi-Purpose Vehicle (MPV)",
                "Multipurpose Passenger Vehicle (MPV)",
            ),
        ),
        ("empty", VehicleDescriptor::default()),
    ]
}

fn bench_render_svg_sync(c: &mut Criterion) {
    let engine = Engine::new();
    let opts = SvgRenderOptions::default();

    let mut group = c.benchmark_group("render_svg_sync");
    for (name, descriptor) in fixtures() {
        group.bench_function(name, |b| {
            b.iter_batched(
                || descriptor.clone(),
                |d| {
                    let out = render_svg_sync(&engine, &d, &opts);
                    std::hint::black_box(out.svg.len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_fallback(c: &mut Criterion) {
    let engine = Engine::new();
    let opts = SvgRenderOptions {
        force_fallback: true,
    };
    let descriptor = VehicleDescriptor::default();
    c.bench_function("render_fallback", |b| {
        b.iter(|| std::hint::black_box(render_svg_sync(&engine, &descriptor, &opts)))
    });
}

fn bench_seed_and_draws(c: &mut Criterion) {
    let descriptor = VehicleDescriptor::new("Toyota", "Camry", "2022", "Sedan", "Car");
    c.bench_function("seed_and_eight_draws", |b| {
        b.iter(|| {
            let seed = Seed::from_descriptor(std::hint::black_box(&descriptor));
            let sum: f64 = Mulberry32::from_seed(seed).take(8).sum();
            std::hint::black_box(sum)
        })
    });
}

criterion_group!(
    benches,
    bench_render_svg_sync,
    bench_fallback,
    bench_seed_and_draws
);
criterion_main!(benches);
