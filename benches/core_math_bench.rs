use chrono::{TimeZone, Utc};
use criterion::{Criterion, criterion_group, criterion_main};
use price_chart::api::{ChartEngine, ChartEngineConfig};
use price_chart::core::{
    LinearScale, PriceScale, PriceScaleTuning, Sample, TimeScale, ViewState, monotone_x_path,
    nearest_sample_index, project_area_geometry,
};
use price_chart::render::NullRenderer;
use std::hint::black_box;

fn generated_samples(count: usize) -> Vec<Sample> {
    (0..count)
        .map(|i| {
            let timestamp = Utc
                .timestamp_opt(1_600_000_000 + i as i64 * 60, 0)
                .single()
                .expect("valid timestamp");
            let price = 100.0 + (i as f64 * 0.05).sin() * 10.0;
            let volume = 1_000.0 + (i % 17) as f64 * 25.0;
            Sample::new(timestamp, price, volume)
        })
        .collect()
}

fn bench_linear_scale_round_trip(c: &mut Criterion) {
    let scale = LinearScale::new(0.0, 10_000.0, 0.0, 1_920.0).expect("valid scale");

    c.bench_function("linear_scale_round_trip", |b| {
        b.iter(|| {
            let px = scale.domain_to_pixel(black_box(4_321.123)).expect("to pixel");
            let _ = scale.pixel_to_domain(px).expect("from pixel");
        })
    });
}

fn bench_nearest_lookup_10k(c: &mut Criterion) {
    let samples = generated_samples(10_000);
    let first = samples[0].time_key();
    let last = samples[samples.len() - 1].time_key();
    let query = first + (last - first) * 0.618;

    c.bench_function("nearest_lookup_10k", |b| {
        b.iter(|| nearest_sample_index(black_box(&samples), black_box(query)))
    });
}

fn bench_area_projection_10k(c: &mut Criterion) {
    let samples = generated_samples(10_000);
    let time_scale = TimeScale::from_samples(&samples, 1_820.0).expect("time scale");
    let price_scale = PriceScale::from_samples(&samples, 800.0, PriceScaleTuning::default())
        .expect("price scale");

    c.bench_function("area_projection_10k", |b| {
        b.iter(|| {
            let _ = project_area_geometry(
                black_box(&samples),
                black_box(time_scale),
                black_box(price_scale),
                black_box(800.0),
            )
            .expect("projection should succeed");
        })
    });

    let area = project_area_geometry(&samples, time_scale, price_scale, 800.0)
        .expect("projection should succeed");
    c.bench_function("monotone_path_10k", |b| {
        b.iter(|| monotone_x_path(black_box(&area.line_points)))
    });
}

fn bench_render_and_hover_2k(c: &mut Criterion) {
    let samples = generated_samples(2_000);
    let mut engine = ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default())
        .expect("engine init");

    c.bench_function("engine_render_2k", |b| {
        b.iter(|| {
            engine
                .render(black_box(&samples), 100.0, ViewState::new(1600, 900))
                .expect("render")
        })
    });

    c.bench_function("engine_pointer_move_2k", |b| {
        b.iter(|| engine.pointer_move(black_box(812.5), 300.0).expect("pointer move"))
    });
}

criterion_group!(
    benches,
    bench_linear_scale_round_trip,
    bench_nearest_lookup_10k,
    bench_area_projection_10k,
    bench_render_and_hover_2k
);
criterion_main!(benches);
