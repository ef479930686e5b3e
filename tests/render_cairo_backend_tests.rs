#![cfg(feature = "cairo-backend")]

use chrono::{TimeZone, Utc};
use price_chart::ChartError;
use price_chart::api::{ChartEngine, ChartEngineConfig};
use price_chart::core::{Sample, ViewState};
use price_chart::render::{CairoRenderer, Color};

fn samples() -> Vec<Sample> {
    [(0, 100.0, 10.0), (3_600, 110.0, 20.0), (7_200, 105.0, 15.0)]
        .into_iter()
        .map(|(offset, price, volume)| {
            let timestamp = Utc
                .timestamp_opt(1_700_000_000 + offset, 0)
                .single()
                .expect("valid timestamp");
            Sample::new(timestamp, price, volume)
        })
        .collect()
}

#[test]
fn cairo_renderer_rejects_invalid_surface_size() {
    let err = CairoRenderer::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
}

#[test]
fn cairo_renderer_rejects_invalid_clear_color() {
    let mut renderer = CairoRenderer::new(10, 10).expect("renderer");
    assert!(renderer.set_clear_color(Color::rgba(2.0, 0.0, 0.0, 1.0)).is_err());
}

#[test]
fn static_pass_draws_series_and_badge() {
    let renderer = CairoRenderer::new(500, 480).expect("renderer");
    let mut engine =
        ChartEngine::new(renderer, ChartEngineConfig::default()).expect("engine init");
    engine
        .render(&samples(), 108.0, ViewState::new(500, 480))
        .expect("render");

    let stats = engine.renderer().last_stats();
    assert_eq!(stats.paths_drawn, 2);
    assert_eq!(stats.rects_drawn, 4);
    assert_eq!(stats.circles_drawn, 0);
    assert!(stats.texts_drawn >= 2);
}

#[test]
fn overlay_composes_over_cached_static_layer() {
    let renderer = CairoRenderer::new(500, 480).expect("renderer");
    let mut engine =
        ChartEngine::new(renderer, ChartEngineConfig::default()).expect("engine init");
    engine
        .render(&samples(), 108.0, ViewState::new(500, 480))
        .expect("render");
    let static_stats = engine.renderer().last_stats();

    for _ in 0..3 {
        engine.pointer_move(250.0, 100.0).expect("hover");
    }
    let hovered = engine.renderer().last_stats();
    assert_eq!(hovered.circles_drawn, 1);
    assert_eq!(hovered.lines_drawn, static_stats.lines_drawn + 2);
    assert_eq!(hovered.rects_drawn, static_stats.rects_drawn + 1);
    assert_eq!(hovered.paths_drawn, static_stats.paths_drawn);

    engine.pointer_leave().expect("leave");
    assert_eq!(engine.renderer().last_stats(), static_stats);
}

#[test]
fn surface_follows_view_state_size() {
    let renderer = CairoRenderer::new(100, 100).expect("renderer");
    let mut engine =
        ChartEngine::new(renderer, ChartEngineConfig::default()).expect("engine init");
    engine
        .render(&samples(), 108.0, ViewState::new(640, 360))
        .expect("render");

    let surface = engine.renderer().surface();
    assert_eq!((surface.width(), surface.height()), (640, 360));
}
