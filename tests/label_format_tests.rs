use chrono::{TimeZone, Utc};
use price_chart::api::{
    ChartEngine, ChartEngineConfig, LabelFormatters, format_short_date, format_time_tick, format_usd,
};
use price_chart::core::{Sample, TimeTickInterval, ViewState};
use price_chart::render::NullRenderer;

#[test]
fn usd_formatting_groups_thousands_with_two_decimals() {
    assert_eq!(format_usd(64_850.35), "$64,850.35");
    assert_eq!(format_usd(108.0), "$108.00");
    assert_eq!(format_usd(0.0), "$0.00");
    assert_eq!(format_usd(1_234_567.891), "$1,234,567.89");
    assert_eq!(format_usd(999.999), "$1,000.00");
}

#[test]
fn negative_amounts_carry_leading_sign() {
    assert_eq!(format_usd(-0.5), "-$0.50");
    assert_eq!(format_usd(-12_000.0), "-$12,000.00");
    assert_eq!(format_usd(-0.001), "$0.00");
}

#[test]
fn short_date_has_month_and_day() {
    let time = Utc
        .with_ymd_and_hms(2024, 3, 5, 14, 30, 0)
        .single()
        .expect("valid date");
    assert_eq!(format_short_date(time), "Mar 5");
}

#[test]
fn default_formatters_delegate_to_builtins() {
    let formatters = LabelFormatters::default();
    assert_eq!((formatters.currency)(2_500.0), "$2,500.00");
    assert!(formatters.date.is_none());
    let time = Utc
        .with_ymd_and_hms(2023, 11, 14, 9, 5, 0)
        .single()
        .expect("valid date");
    assert_eq!(formatters.tooltip_date(time), "Nov 14, 09:05");
    assert_eq!(
        formatters.axis_label(time, TimeTickInterval::Seconds(86_400.0)),
        "Nov 14"
    );
}

#[test]
fn tick_labels_follow_interval_precision() {
    let at = |h, m, s| {
        Utc.with_ymd_and_hms(2024, 1, 15, h, m, s)
            .single()
            .expect("valid date")
    };
    assert_eq!(format_time_tick(at(9, 30, 15), TimeTickInterval::Seconds(5.0)), "09:30:15");
    assert_eq!(format_time_tick(at(9, 30, 0), TimeTickInterval::Seconds(1_800.0)), "09:30");
    assert_eq!(format_time_tick(at(0, 0, 0), TimeTickInterval::Seconds(3_600.0)), "Jan 15");
    assert_eq!(format_time_tick(at(0, 0, 0), TimeTickInterval::Weeks(1)), "Jan 15");

    let jan = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().expect("jan");
    let mar = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).single().expect("mar");
    assert_eq!(format_time_tick(jan, TimeTickInterval::Months(1)), "2024");
    assert_eq!(format_time_tick(mar, TimeTickInterval::Months(1)), "Mar");
    assert_eq!(format_time_tick(jan, TimeTickInterval::Years(1)), "2024");
}

#[test]
fn intraday_axis_labels_are_distinct() {
    let t0 = 1_700_000_000;
    let samples: Vec<Sample> = [(0, 100.0), (3_600, 110.0), (7_200, 105.0)]
        .into_iter()
        .map(|(offset, price)| {
            let timestamp = Utc.timestamp_opt(t0 + offset, 0).single().expect("timestamp");
            Sample::new(timestamp, price, 1.0)
        })
        .collect();
    let mut engine = ChartEngine::new(NullRenderer::default(), ChartEngineConfig::default())
        .expect("engine init");
    engine
        .render(&samples, 104.0, ViewState::new(500, 480))
        .expect("render");

    let frame = engine.renderer().static_frame.as_ref().expect("frame");
    let labels: Vec<&str> = frame
        .texts
        .iter()
        .filter(|text| !text.text.starts_with('$'))
        .map(|text| text.text.as_str())
        .collect();
    assert_eq!(labels, vec!["22:30", "23:00", "23:30", "Nov 15"]);
}

#[test]
fn custom_date_formatter_replaces_axis_default() {
    let time = Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).single().expect("valid date");
    let mut formatters = LabelFormatters::default();
    formatters.date = Some(std::sync::Arc::new(format_short_date));
    assert_eq!(formatters.axis_label(time, TimeTickInterval::Seconds(60.0)), "Mar 5");
}
