use price_chart::ChartError;
use price_chart::api::{
    ChartEngine, ChartEngineConfig, MAX_TIME_TICK_COUNT, RenderStyle, TooltipPlacement,
};
use price_chart::core::PlotMargins;
use price_chart::render::{Color, LineStrokeStyle, NullRenderer};

#[test]
fn defaults_match_documented_values() {
    let config = ChartEngineConfig::default();
    assert_eq!(config.compact_margins, PlotMargins::default());
    assert_eq!(config.compact_margins.top, 20.0);
    assert_eq!(config.compact_margins.right, 50.0);
    assert_eq!(config.compact_margins.bottom, 60.0);
    assert_eq!(config.compact_margins.left, 50.0);
    assert_eq!(config.volume_band_ratio, 0.2);
    assert_eq!(config.volume_bar_width_px, 4.0);
    assert_eq!(config.time_tick_count, 4);
    assert_eq!(config.price_scale_tuning.bottom_padding_ratio, 0.01);
    assert_eq!(config.price_scale_tuning.top_padding_ratio, 0.01);
    assert_eq!(config.tooltip.offset(false), (-96.0, -48.0));
    assert_eq!(config.tooltip.offset(true), (50.0, -20.0));
    assert!(config.show_last_price_badge);
}

#[test]
fn default_style_uses_dashed_guides() {
    let style = RenderStyle::default();
    assert_eq!(style.crosshair_line_style, LineStrokeStyle::dashed(4.0, 4.0));
    assert_eq!(style.reference_line_style, LineStrokeStyle::dashed(3.0, 3.0));
    assert_eq!(style.marker_radius_px, 4.0);
    assert_eq!(style.marker_stroke_color, Color::rgb(1.0, 1.0, 1.0));
    assert_eq!(style.area_bottom_color.alpha, 0.0);
}

#[test]
fn json_round_trip_preserves_config() {
    let config = ChartEngineConfig::default()
        .with_volume_band_ratio(0.3)
        .with_time_tick_count(6)
        .with_last_price_badge(false);

    let json = config.to_json_pretty().expect("serialize");
    let restored = ChartEngineConfig::from_json_str(&json).expect("parse");
    assert_eq!(restored, config);
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let config = ChartEngineConfig::from_json_str(
        r#"{ "volume_bar_width_px": 6.0, "compact_margins": { "left": 80.0 }, "tooltip": { "show_date": true } }"#,
    )
    .expect("parse");

    assert_eq!(config.volume_bar_width_px, 6.0);
    assert_eq!(config.compact_margins.left, 80.0);
    assert_eq!(config.compact_margins.right, 50.0);
    assert!(config.tooltip.show_date);
    assert_eq!(config.tooltip.font_size_px, TooltipPlacement::default().font_size_px);
    assert_eq!(config.fullscreen_margins, PlotMargins::default());
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = ChartEngineConfig::from_json_str("{ not json").expect_err("must fail");
    assert!(matches!(err, ChartError::Config(_)));
}

#[test]
fn out_of_range_values_are_rejected() {
    let err = ChartEngineConfig::from_json_str(r#"{ "volume_band_ratio": 1.5 }"#)
        .expect_err("ratio must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let config = ChartEngineConfig::default().with_volume_bar_width_px(0.0);
    assert!(ChartEngine::new(NullRenderer::default(), config).is_err());

    let config = ChartEngineConfig::default().with_margins(PlotMargins {
        top: -1.0,
        ..PlotMargins::default()
    });
    assert!(config.validate().is_err());

    let tooltip = TooltipPlacement {
        font_size_px: 0.0,
        ..TooltipPlacement::default()
    };
    assert!(ChartEngineConfig::default().with_tooltip(tooltip).validate().is_err());
}

#[test]
fn engine_keeps_validated_config() {
    let config = ChartEngineConfig::default().with_time_tick_count(8);
    let engine = ChartEngine::new(NullRenderer::default(), config).expect("engine init");
    assert_eq!(engine.config().time_tick_count, 8);
}

#[test]
fn invalid_style_is_rejected_at_construction() {
    let style = RenderStyle {
        price_line_color: Color::rgba(0.0, 0.0, 0.0, 1.5),
        ..RenderStyle::default()
    };
    let config = ChartEngineConfig::default().with_style(style);
    assert!(matches!(
        ChartEngine::new(NullRenderer::default(), config),
        Err(ChartError::InvalidData(_))
    ));

    let style = RenderStyle {
        crosshair_line_width: f64::NAN,
        ..RenderStyle::default()
    };
    assert!(ChartEngineConfig::default().with_style(style).validate().is_err());

    let style = RenderStyle {
        reference_line_style: LineStrokeStyle::dashed(0.0, 3.0),
        ..RenderStyle::default()
    };
    assert!(ChartEngineConfig::default().with_style(style).validate().is_err());

    assert!(RenderStyle::default().validate().is_ok());
}

#[test]
fn time_tick_count_is_capped() {
    let config = ChartEngineConfig::default().with_time_tick_count(MAX_TIME_TICK_COUNT);
    assert!(config.validate().is_ok());

    let err = ChartEngineConfig::from_json_str(r#"{ "time_tick_count": 1000000000 }"#)
        .expect_err("huge tick count must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}
