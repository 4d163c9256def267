use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use mandelbrot_explorer::{
    ColourMapKind, Complex, EscapeTimeAlgorithm, MandelbrotAlgorithm, NeverCancel, NoProgress,
    PixelSurface, RenderRequest, RenderSettings, default_region, render_scanlines,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for (name, point) in [
        ("interior", Complex::new(-0.1, 0.1)),
        ("boundary", Complex::new(-0.7435, 0.1314)),
        ("exterior", Complex::new(0.5, 0.5)),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), &point, |b, point| {
            b.iter(|| MandelbrotAlgorithm.evaluate(black_box(*point), 100.0, 1_000));
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_scanlines");
    let settings = RenderSettings {
        update_interval: Duration::from_secs(3600),
        ..RenderSettings::default()
    };

    for colour_map in [ColourMapKind::Grayscale, ColourMapKind::HsvGradient] {
        let surface = PixelSurface::new(256, 192);
        let request = RenderRequest::new(default_region(), 256, 192)
            .expect("bench request is valid")
            .with_colour_map(colour_map);

        group.bench_function(BenchmarkId::new("256x192", colour_map), |b| {
            let mut rng = StdRng::seed_from_u64(0);
            b.iter(|| {
                render_scanlines(
                    black_box(&request),
                    &settings,
                    &surface,
                    &NoProgress,
                    &NeverCancel,
                    &mut rng,
                )
            });
        });
    }

    let surface = PixelSurface::new(128, 96);
    let request = RenderRequest::new(default_region(), 128, 96)
        .and_then(|request| request.with_super_samples(4))
        .expect("bench request is valid");

    group.bench_function("128x96_supersampled", |b| {
        let mut rng = StdRng::seed_from_u64(0);
        b.iter(|| {
            render_scanlines(&request, &settings, &surface, &NoProgress, &NeverCancel, &mut rng)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_render);
criterion_main!(benches);
