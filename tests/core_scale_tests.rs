use approx::assert_abs_diff_eq;
use chrono::{TimeZone, Utc};
use price_chart::core::{
    LinearScale, PlotLayout, PlotMargins, PriceScale, PriceScaleTuning, Sample, TimeScale,
    ViewState, VolumeScale,
};

fn sample(seconds: i64, price: f64, volume: f64) -> Sample {
    let timestamp = Utc.timestamp_opt(seconds, 0).single().expect("valid timestamp");
    Sample::new(timestamp, price, volume)
}

#[test]
fn linear_scale_round_trip_within_tolerance() {
    let scale = LinearScale::new(10.0, 110.0, 0.0, 1000.0).expect("valid scale");

    let original = 42.5;
    let px = scale.domain_to_pixel(original).expect("to pixel");
    let recovered = scale.pixel_to_domain(px).expect("from pixel");

    assert!((recovered - original).abs() <= 1e-9);
}

#[test]
fn degenerate_domain_maps_to_range_midpoint() {
    let scale = LinearScale::new(5.0, 5.0, 0.0, 400.0).expect("valid scale");
    assert!(scale.is_degenerate());
    assert_eq!(scale.domain_to_pixel(5.0).expect("to pixel"), 200.0);
    assert_eq!(scale.domain_to_pixel(123.0).expect("to pixel"), 200.0);
}

#[test]
fn non_finite_inputs_are_rejected() {
    assert!(LinearScale::new(f64::NAN, 1.0, 0.0, 1.0).is_err());
    let scale = LinearScale::new(0.0, 1.0, 0.0, 100.0).expect("valid scale");
    assert!(scale.domain_to_pixel(f64::INFINITY).is_err());
    assert!(scale.pixel_to_domain(f64::NAN).is_err());
}

#[test]
fn time_scale_spans_first_to_last_sample() {
    let samples = [
        sample(1_700_000_000, 100.0, 1.0),
        sample(1_700_000_600, 101.0, 1.0),
        sample(1_700_003_600, 99.0, 1.0),
    ];
    let scale = TimeScale::from_samples(&samples, 640.0).expect("time scale");

    assert_eq!(scale.domain(), (1_700_000_000.0, 1_700_003_600.0));
    assert_eq!(scale.time_to_pixel(samples[0].time_key()).expect("first"), 0.0);
    assert_eq!(scale.time_to_pixel(samples[2].time_key()).expect("last"), 640.0);
    assert_abs_diff_eq!(
        scale.datetime_to_pixel(samples[1].timestamp).expect("middle"),
        640.0 / 6.0,
        epsilon = 1e-9
    );
}

#[test]
fn time_scale_rejects_empty_input() {
    assert!(TimeScale::from_samples(&[], 100.0).is_err());
}

#[test]
fn price_scale_pads_extent_and_inverts_y() {
    let samples = [
        sample(0, 100.0, 1.0),
        sample(60, 110.0, 1.0),
        sample(120, 105.0, 1.0),
    ];
    let scale = PriceScale::from_samples(&samples, 320.0, PriceScaleTuning::default())
        .expect("price scale");

    let (low, high) = scale.domain();
    assert_abs_diff_eq!(low, 99.0, epsilon = 1e-9);
    assert_abs_diff_eq!(high, 111.1, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.price_to_pixel(low).expect("low"), 320.0, epsilon = 1e-9);
    assert_abs_diff_eq!(scale.price_to_pixel(high).expect("high"), 0.0, epsilon = 1e-9);
    assert!(scale.price_to_pixel(110.0).expect("max") < scale.price_to_pixel(100.0).expect("min"));
}

#[test]
fn price_scale_containment_uses_padded_domain() {
    let scale = PriceScale::new(99.0, 111.1, 320.0).expect("price scale");
    assert!(scale.contains(108.0));
    assert!(scale.contains(99.0));
    assert!(!scale.contains(120.0));
    assert!(!scale.contains(f64::NAN));
}

#[test]
fn price_scale_rejects_negative_padding() {
    let tuning = PriceScaleTuning {
        bottom_padding_ratio: -0.1,
        top_padding_ratio: 0.01,
    };
    assert!(PriceScale::from_samples(&[sample(0, 1.0, 1.0)], 100.0, tuning).is_err());
}

#[test]
fn volume_scale_rises_from_plot_bottom() {
    let scale = VolumeScale::new(20.0, 400.0, 80.0).expect("volume scale");
    assert_eq!(scale.baseline_px(), 400.0);
    assert_eq!(scale.volume_to_pixel(0.0).expect("zero"), 400.0);
    assert_eq!(scale.volume_to_pixel(20.0).expect("max"), 320.0);
    assert_eq!(scale.volume_to_pixel(10.0).expect("half"), 360.0);
}

#[test]
fn zero_volume_series_collapses_bars_to_baseline() {
    let samples = [sample(0, 1.0, 0.0), sample(60, 2.0, 0.0)];
    let scale = VolumeScale::from_samples(&samples, 400.0, 80.0).expect("volume scale");
    assert_eq!(scale.domain(), (0.0, 1.0));
    assert_eq!(scale.volume_to_pixel(0.0).expect("zero"), 400.0);
}

#[test]
fn layout_uses_fullscreen_flag_from_view_state() {
    let margins = PlotMargins {
        top: 10.0,
        right: 20.0,
        bottom: 30.0,
        left: 40.0,
    };
    let layout = PlotLayout::resolve(ViewState::fullscreen(1000, 600), margins, 0.25)
        .expect("layout");

    assert!(layout.fullscreen);
    assert_eq!(layout.inner_width, 940.0);
    assert_eq!(layout.inner_height, 560.0);
    assert_eq!(layout.volume_band_height, 140.0);
    assert_eq!(layout.plot_right(), 980.0);
    assert_eq!(layout.plot_bottom(), 570.0);
    assert_eq!(layout.to_plot(40.0, 10.0), (0.0, 0.0));
    assert_eq!(layout.to_surface(0.0, 0.0), (40.0, 10.0));
}

#[test]
fn decimal_samples_convert_to_f64() {
    use rust_decimal::Decimal;

    let timestamp = Utc.timestamp_opt(60, 0).single().expect("valid timestamp");
    let sample = Sample::from_decimal(timestamp, Decimal::new(6_485_035, 2), Decimal::new(15, 1))
        .expect("decimal sample");
    assert_abs_diff_eq!(sample.price, 64_850.35, epsilon = 1e-9);
    assert_abs_diff_eq!(sample.volume, 1.5, epsilon = 1e-12);
    assert_eq!(sample.time_key(), 60.0);
}
